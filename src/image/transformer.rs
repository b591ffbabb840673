use std::sync::{mpsc, Arc};

use threadpool::ThreadPool;

use super::{ColorImage, GreyscaleImage};
use crate::{color::Channel, error::Error, Result};

/// An operation from greyscale image to greyscale image.
pub trait GreyscaleTransform {
    fn apply(&self, image: &GreyscaleImage<u8>) -> Result<GreyscaleImage<u8>>;
}

struct SeparateColorChannels {
    red: GreyscaleImage<u8>,
    green: GreyscaleImage<u8>,
    blue: GreyscaleImage<u8>,
}

impl SeparateColorChannels {
    fn split(image: &ColorImage) -> Self {
        Self {
            red: image.channel(Channel::Red),
            green: image.channel(Channel::Green),
            blue: image.channel(Channel::Blue),
        }
    }

    fn merge(self) -> Result<ColorImage> {
        ColorImage::from_channels(self.red, self.green, self.blue)
    }

    fn into_array(self) -> [(Channel, GreyscaleImage<u8>); 3] {
        [
            (Channel::Red, self.red),
            (Channel::Green, self.green),
            (Channel::Blue, self.blue),
        ]
    }
}

/// Applies a [`GreyscaleTransform`] to each channel of a color image
/// independently and recombines the results.
pub struct ColorTransformer<F> {
    transform: Arc<F>,
}

pub fn lift_to_color<F: GreyscaleTransform>(transform: F) -> ColorTransformer<F> {
    ColorTransformer::new(transform)
}

impl<F: GreyscaleTransform> ColorTransformer<F> {
    pub fn new(transform: F) -> Self {
        Self {
            transform: Arc::new(transform),
        }
    }

    pub fn transform(&self, image: &ColorImage) -> Result<ColorImage> {
        image.validate()?;
        let channels = SeparateColorChannels::split(image);
        SeparateColorChannels {
            red: self.transform.apply(&channels.red)?,
            green: self.transform.apply(&channels.green)?,
            blue: self.transform.apply(&channels.blue)?,
        }
        .merge()
    }
}

impl<F> ColorTransformer<F>
where
    F: GreyscaleTransform + Send + Sync + 'static,
{
    /// Runs the three channel computations as separate threadpool jobs and
    /// waits for all of them before merging.
    pub fn transform_in_threadpool(
        &self,
        image: &ColorImage,
        threadpool: &ThreadPool,
    ) -> Result<ColorImage> {
        image.validate()?;
        let (sender, receiver) = mpsc::channel();
        for (channel, plane) in SeparateColorChannels::split(image).into_array() {
            let sender = sender.clone();
            let transform = Arc::clone(&self.transform);
            threadpool.execute(move || {
                log::debug!("Transforming {}", channel);
                let _ = sender.send((channel, transform.apply(&plane)));
            });
        }
        drop(sender);

        let mut red = None;
        let mut green = None;
        let mut blue = None;
        for (channel, result) in receiver.iter() {
            let slot = match channel {
                Channel::Red => &mut red,
                Channel::Green => &mut green,
                Channel::Blue => &mut blue,
            };
            *slot = Some(result?);
        }
        match (red, green, blue) {
            (Some(red), Some(green), Some(blue)) => {
                SeparateColorChannels { red, green, blue }.merge()
            }
            _ => {
                log::warn!("Not all color channels were delivered by the threadpool");
                Err(Error::WorkerAborted("color channel"))
            }
        }
    }
}
