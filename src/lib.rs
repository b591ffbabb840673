use std::{io, sync::Arc, thread};

use threadpool::ThreadPool;

pub use color::{Channel, RGBColorFormat};
pub use error::Error;
pub use image::{
    resampler::{AreaResampler, ResizeSpec},
    transformer::{lift_to_color, ColorTransformer, GreyscaleTransform},
    ColorImage, GreyscaleImage, Image,
};

mod color;
mod error;
mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeOptions {
    pub number_of_threads: usize,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            number_of_threads: get_number_of_threads().unwrap_or(1),
        }
    }
}

impl ResizeOptions {
    fn create_threadpool(&self) -> ThreadPool {
        ThreadPool::new(self.number_of_threads.max(1))
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

pub fn resize<T>(image: &GreyscaleImage<T>, width: usize, height: usize) -> Result<GreyscaleImage>
where
    T: Copy + Into<f64>,
{
    let spec = ResizeSpec::new(width, height)?;
    AreaResampler::new(spec).resample(image)
}

pub fn resize_with_options<T>(
    image: &GreyscaleImage<T>,
    width: usize,
    height: usize,
    options: &ResizeOptions,
) -> Result<GreyscaleImage>
where
    T: Copy + Into<f64> + Send + Sync + 'static,
{
    let spec = ResizeSpec::new(width, height)?;
    let threadpool = options.create_threadpool();
    AreaResampler::new(spec).resample_in_threadpool(Arc::new(image.clone()), &threadpool)
}

pub fn color_resize(image: &ColorImage, width: usize, height: usize) -> Result<ColorImage> {
    let spec = ResizeSpec::new(width, height)?;
    lift_to_color(AreaResampler::new(spec)).transform(image)
}

pub fn color_resize_with_options(
    image: &ColorImage,
    width: usize,
    height: usize,
    options: &ResizeOptions,
) -> Result<ColorImage> {
    let spec = ResizeSpec::new(width, height)?;
    let threadpool = options.create_threadpool();
    lift_to_color(AreaResampler::new(spec)).transform_in_threadpool(image, &threadpool)
}

pub fn normalize(raw: &[f64], width: usize, height: usize) -> Result<GreyscaleImage> {
    image::normalizer::round_and_clip(raw, width, height)
}
