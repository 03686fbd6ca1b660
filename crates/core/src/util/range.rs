use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// A float type that ranges can be built over. Only the float primitives
/// implement this.
pub trait Rangeable:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_rangeable {
    ($($type:ty),*) => {
        $(
            impl Rangeable for $type {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
            }
        )*
    };
}

impl_rangeable!(f32, f64);

/// An inclusive range of floats. Used to normalize noise output, clamp colour
/// intensities and fit a scale to some data.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable> {
    pub min: T,
    pub max: T,
}

impl<T: Rangeable> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// `[0, 1]`
    pub fn normal_range() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Position of a value within this range, where `min` is 0 and `max` is
    /// 1. Values outside the range land outside `[0, 1]`. An empty range
    /// puts everything at 0.
    pub fn normalize(&self, value: T) -> T {
        let span = self.span();
        if span > T::ZERO {
            (value - self.min) / span
        } else {
            T::ZERO
        }
    }

    /// Pull a value into this range. NaN becomes the minimum.
    pub fn clamp(&self, value: T) -> T {
        if value > self.max {
            self.max
        } else if value >= self.min {
            value
        } else {
            self.min
        }
    }

    /// Attach a value to this range so operations on it can be chained
    ///
    /// ```
    /// use hexsurf::NumRange;
    ///
    /// let range: NumRange<f32> = NumRange::new(10.0, 20.0);
    /// let value = range.value(25.0).normalize().clamp().inner();
    /// assert_eq!(value, 1.0);
    /// ```
    pub fn value(self, value: T) -> RangeValue<T> {
        RangeValue { value, range: self }
    }
}

/// A value tied to the range it currently lives in. See [NumRange::value].
#[derive(Copy, Clone, Debug)]
pub struct RangeValue<T: Rangeable> {
    value: T,
    range: NumRange<T>,
}

impl<T: Rangeable> RangeValue<T> {
    pub fn inner(self) -> T {
        self.value
    }

    /// Move the value into `[0, 1]`, which becomes its new range
    pub fn normalize(self) -> Self {
        Self {
            value: self.range.normalize(self.value),
            range: NumRange::normal_range(),
        }
    }

    pub fn clamp(self) -> Self {
        Self {
            value: self.range.clamp(self.value),
            ..self
        }
    }

    /// Replace the value with the output of `f`, keeping the range
    pub fn apply(self, f: impl FnOnce(T) -> T) -> Self {
        Self {
            value: f(self.value),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_normalize() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.normalize(0.0), -0.5);
        assert_approx_eq!(range.normalize(2.0), 0.5);
        assert_approx_eq!(range.normalize(6.0), 2.5);

        let empty: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert_approx_eq!(empty.normalize(1.0), 0.0);
        assert_approx_eq!(empty.normalize(5.0), 0.0);
    }

    #[test]
    fn test_clamp() {
        let range: NumRange<f32> = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.clamp(0.0), 1.0);
        assert_approx_eq!(range.clamp(2.0), 2.0);
        assert_approx_eq!(range.clamp(6.0), 3.0);
        assert_approx_eq!(range.clamp(f32::NAN), 1.0);
    }

    #[test]
    fn test_noise_output_chain() {
        // The shape of the chain the noise field runs every sample through
        let range: NumRange<f64> = NumRange::new(-1.0, 1.0);
        let value = range
            .value(0.0)
            .normalize()
            .clamp()
            .apply(|value| value.powf(2.0))
            .inner();
        assert_approx_eq!(value, 0.25);

        let value = range.value(3.0).normalize().clamp().inner();
        assert_approx_eq!(value, 1.0);
    }
}
