use super::{check_shape, GreyscaleImage, Image};
use crate::error::Error;
use crate::Result;

const MIN_VALUE: f64 = 0.0;
const MAX_VALUE: f64 = 255.0;

/// Turns raw samples into an 8-bit greyscale image. Every value is clamped
/// to `[0, 255]` first and then rounded half to even, so `255.6` ends up as
/// `255` and `0.5` as `0`.
pub fn round_and_clip(raw: &[f64], width: usize, height: usize) -> Result<GreyscaleImage<u8>> {
    check_shape(width, height, raw.len())?;
    check_all_values_finite(raw)?;
    let dots = raw.iter().map(|&value| round_and_clip_value(value)).collect();
    Ok(Image::new(width, height, dots))
}

fn check_all_values_finite(raw: &[f64]) -> Result<()> {
    match raw.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(Error::InvalidPixelValue {
            index,
            value: raw[index],
        }),
        None => Ok(()),
    }
}

fn round_and_clip_value(value: f64) -> u8 {
    value.clamp(MIN_VALUE, MAX_VALUE).round_ties_even() as u8
}

#[cfg(test)]
mod test {
    use super::round_and_clip;
    use crate::error::Error;

    fn normalize_single(value: f64) -> u8 {
        round_and_clip(&[value], 1, 1)
            .expect("Finite value must be normalized")
            .pixels()[0]
    }

    #[test]
    fn clip_before_round() {
        assert_eq!(normalize_single(255.6), 255);
        assert_eq!(normalize_single(-0.4), 0);
        assert_eq!(normalize_single(1000.0), 255);
        assert_eq!(normalize_single(-73.2), 0);
    }

    #[test]
    fn round_half_to_even() {
        assert_eq!(normalize_single(0.5), 0);
        assert_eq!(normalize_single(1.5), 2);
        assert_eq!(normalize_single(2.5), 2);
        assert_eq!(normalize_single(254.5), 254);
        assert_eq!(normalize_single(138.75), 139);
        assert_eq!(normalize_single(17.49), 17);
    }

    #[test]
    fn keep_shape() {
        let raw = [0.0, 10.2, 20.7, 300.0, -5.0, 128.5];
        let image = round_and_clip(&raw, 3, 2).expect("Normalization failed");
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels(), &[0, 10, 21, 255, 0, 128]);
    }

    #[test]
    fn reject_non_finite_value() {
        let raw = [1.0, f64::INFINITY, 3.0, 4.0];
        if let Err(Error::InvalidPixelValue { index, .. }) = round_and_clip(&raw, 2, 2) {
            assert_eq!(index, 1, "Wrong index reported");
            return;
        }
        panic!("Infinite value not detected");
    }

    #[test]
    fn reject_nan() {
        let raw = [f64::NAN];
        assert!(matches!(
            round_and_clip(&raw, 1, 1),
            Err(Error::InvalidPixelValue { index: 0, .. })
        ));
    }

    #[test]
    fn reject_wrong_size() {
        let raw = [0.0; 5];
        assert!(matches!(
            round_and_clip(&raw, 3, 2),
            Err(Error::InvalidImage {
                width: 3,
                height: 2,
                number_of_pixels: 5
            })
        ));
    }
}
