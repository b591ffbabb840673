use crate::color::{Channel, RGBColorFormat};
use crate::error::Error;
use crate::Result;

pub mod normalizer;
pub mod resampler;
pub mod transformer;

/// A row-major raster. Construction does not check the shape, every
/// operation calls [`Image::validate`] before touching the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    dots: Vec<T>,
}

pub type GreyscaleImage<T = u8> = Image<T>;

pub type ColorImage = Image<RGBColorFormat<u8>>;

impl<T> Image<T> {
    pub fn new(width: usize, height: usize, dots: Vec<T>) -> Self {
        Self {
            width,
            height,
            dots,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[T] {
        &self.dots
    }

    pub fn validate(&self) -> Result<()> {
        check_shape(self.width, self.height, self.dots.len())
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(row * self.width + column)
    }
}

impl<T: Copy> Image<T> {
    /// Sample at `(row, column)`, `None` outside the image.
    pub fn pixel(&self, row: usize, column: usize) -> Option<T> {
        self.index(row, column)
            .and_then(|index| self.dots.get(index))
            .copied()
    }

    /// Unchecked read for callers that already validated the image and
    /// derived the coordinates from its dimensions.
    pub(crate) fn dot(&self, row: usize, column: usize) -> T {
        self.dots[row * self.width + column]
    }
}

impl ColorImage {
    pub fn channel(&self, channel: Channel) -> GreyscaleImage<u8> {
        let dots = self
            .dots
            .iter()
            .map(|dot| dot.component(channel))
            .collect();
        Image::new(self.width, self.height, dots)
    }

    pub fn from_channels(
        red: GreyscaleImage<u8>,
        green: GreyscaleImage<u8>,
        blue: GreyscaleImage<u8>,
    ) -> Result<Self> {
        let planes = [&red, &green, &blue];
        let same_shape = planes.iter().all(|plane| {
            plane.width == red.width
                && plane.height == red.height
                && plane.dots.len() == red.dots.len()
        });
        if !same_shape {
            return Err(Error::ChannelShapeMismatch);
        }
        let dots = red
            .dots
            .iter()
            .zip(green.dots.iter())
            .zip(blue.dots.iter())
            .map(|((&r, &g), &b)| RGBColorFormat::new(r, g, b))
            .collect();
        Ok(Image::new(red.width, red.height, dots))
    }
}

pub(crate) fn check_shape(width: usize, height: usize, number_of_pixels: usize) -> Result<()> {
    let expected = width.checked_mul(height);
    if width == 0 || height == 0 || expected != Some(number_of_pixels) {
        return Err(Error::InvalidImage {
            width,
            height,
            number_of_pixels,
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{ColorImage, GreyscaleImage, Image};
    use crate::color::{Channel, RGBColorFormat};
    use crate::error::Error;

    #[rustfmt::skip]
    const TEST_CHANNEL_ONE: &[u8] = &[
         1,  2,  3,
         4,  5,  6,
    ];

    fn create_test_color_image() -> ColorImage {
        let dots = TEST_CHANNEL_ONE
            .iter()
            .map(|&v| RGBColorFormat::new(v, v * 10, 255 - v))
            .collect();
        Image::new(3, 2, dots)
    }

    #[test]
    fn read_pixel_row_major() {
        let image = Image::new(3, 2, Vec::from(TEST_CHANNEL_ONE));
        assert_eq!(image.pixel(0, 2), Some(3));
        assert_eq!(image.pixel(1, 0), Some(4));
        assert_eq!(image.pixel(1, 2), Some(6));
    }

    #[test]
    fn read_pixel_out_of_bounds() {
        let image = Image::new(3, 2, Vec::from(TEST_CHANNEL_ONE));
        assert!(image.pixel(2, 0).is_none(), "Row out of bounds not detected");
        assert!(
            image.pixel(0, 3).is_none(),
            "Column out of bounds not detected"
        );
    }

    #[test]
    fn read_pixel_of_truncated_image() {
        let image = Image::new(3, 3, Vec::from(TEST_CHANNEL_ONE));
        assert!(image.pixel(2, 1).is_none(), "Missing pixel was returned");
    }

    #[test]
    fn validate_matching_shape() {
        let image = Image::new(3, 2, Vec::from(TEST_CHANNEL_ONE));
        assert!(image.validate().is_ok());
    }

    #[test]
    fn validate_wrong_pixel_count() {
        let image = Image::new(3, 3, vec![0_u8; 8]);
        if let Err(Error::InvalidImage {
            number_of_pixels, ..
        }) = image.validate()
        {
            assert_eq!(number_of_pixels, 8);
            return;
        }
        panic!("Mismatch of size and pixel count was not detected");
    }

    #[test]
    fn validate_empty_image() {
        let image: GreyscaleImage = Image::new(0, 0, Vec::new());
        assert!(matches!(
            image.validate(),
            Err(Error::InvalidImage { .. })
        ));
    }

    #[test]
    fn split_color_channels() {
        let image = create_test_color_image();
        let green = image.channel(Channel::Green);
        assert_eq!(green.width(), 3);
        assert_eq!(green.height(), 2);
        assert_eq!(green.pixels(), &[10, 20, 30, 40, 50, 60]);
        let blue = image.channel(Channel::Blue);
        assert_eq!(blue.pixel(1, 1), Some(250));
    }

    #[test]
    fn merge_split_channels() {
        let image = create_test_color_image();
        let merged = ColorImage::from_channels(
            image.channel(Channel::Red),
            image.channel(Channel::Green),
            image.channel(Channel::Blue),
        )
        .expect("Channels of one image must have the same shape");
        assert_eq!(merged, image);
    }

    #[test]
    fn merge_channels_with_different_shape() {
        let red = Image::new(3, 2, Vec::from(TEST_CHANNEL_ONE));
        let green = Image::new(2, 3, Vec::from(TEST_CHANNEL_ONE));
        let blue = Image::new(3, 2, Vec::from(TEST_CHANNEL_ONE));
        let result = ColorImage::from_channels(red, green, blue);
        assert_eq!(result, Err(Error::ChannelShapeMismatch));
    }

    #[test]
    fn merge_channels_with_different_length() {
        let red = Image::new(3, 2, Vec::from(TEST_CHANNEL_ONE));
        let green = Image::new(3, 2, Vec::from(TEST_CHANNEL_ONE));
        let blue = Image::new(3, 2, vec![0_u8; 5]);
        let result = ColorImage::from_channels(red, green, blue);
        assert_eq!(result, Err(Error::ChannelShapeMismatch));
    }
}
