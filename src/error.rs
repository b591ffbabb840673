use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidImage {
        width: usize,
        height: usize,
        number_of_pixels: usize,
    },
    InvalidResizeSpec {
        width: usize,
        height: usize,
    },
    InvalidPixelValue {
        index: usize,
        value: f64,
    },
    ChannelShapeMismatch,
    WorkerAborted(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidImage {
                width,
                height,
                number_of_pixels,
            } => {
                write!(
                    f,
                    "Invalid image of size {}x{} with {} pixels",
                    width, height, number_of_pixels
                )
            }
            Self::InvalidResizeSpec { width, height } => {
                write!(
                    f,
                    "Invalid target size {}x{}. Width and height must be positive.",
                    width, height
                )
            }
            Self::InvalidPixelValue { index, value } => {
                write!(f, "Pixel at index {} has non-finite value {}", index, value)
            }
            Self::ChannelShapeMismatch => {
                write!(f, "Color channels do not agree on width and height")
            }
            Self::WorkerAborted(job) => {
                write!(f, "Worker computing {} ended without a result", job)
            }
        }
    }
}

impl std::error::Error for Error {}
