use core::fmt;

use super::IntSize;

/// The dimensions of a layer in fractional pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSize {
    width: f32,
    height: f32,
}

impl FloatSize {
    /// Create a `FloatSize` from its components.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width in fractional pixels.
    #[must_use]
    pub const fn width(self) -> f32 {
        self.width
    }

    /// Height in fractional pixels.
    #[must_use]
    pub const fn height(self) -> f32 {
        self.height
    }

    /// Multiply both components by `factor`, without any rounding.
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

impl From<IntSize> for FloatSize {
    fn from(size: IntSize) -> Self {
        Self {
            width: cast::f32(size.width()),
            height: cast::f32(size.height()),
        }
    }
}

impl fmt::Display for FloatSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.width, self.height)
    }
}
