use std::fmt::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red channel"),
            Self::Green => write!(f, "green channel"),
            Self::Blue => write!(f, "blue channel"),
        }
    }
}

impl<T: Copy> RGBColorFormat<T> {
    pub fn new(red: T, green: T, blue: T) -> Self {
        RGBColorFormat { red, green, blue }
    }

    pub fn component(&self, channel: Channel) -> T {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

impl<T> From<(T, T, T)> for RGBColorFormat<T> {
    fn from((red, green, blue): (T, T, T)) -> Self {
        RGBColorFormat { red, green, blue }
    }
}

impl<T> From<RGBColorFormat<T>> for (T, T, T) {
    fn from(value: RGBColorFormat<T>) -> Self {
        (value.red, value.green, value.blue)
    }
}
