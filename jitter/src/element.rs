//! Pixel element types.

use crate::common::*;

/// A scalar type that can be stored in an image array.
///
/// Pixel maps are evaluated in `f64` and converted back with
/// [Element::from_scalar]. Integer conversions truncate toward zero and
/// saturate at the bounds of the type.
pub trait Element: Copy + Debug + PartialEq + Zero + Send + Sync + 'static {
    fn to_scalar(self) -> f64;

    fn from_scalar(value: f64) -> Self;

    /// The machine epsilon of the type, zero for integers.
    fn epsilon() -> f64;

    /// Adds `rhs` to `self`. Integer types saturate instead of overflowing.
    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! impl_int_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn to_scalar(self) -> f64 {
                    self as f64
                }

                fn from_scalar(value: f64) -> Self {
                    value as $ty
                }

                fn epsilon() -> f64 {
                    0.0
                }

                fn accumulate(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn to_scalar(self) -> f64 {
                    self as f64
                }

                fn from_scalar(value: f64) -> Self {
                    value as $ty
                }

                fn epsilon() -> f64 {
                    <$ty>::EPSILON as f64
                }

                fn accumulate(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_int_element!(u8, i8, i16, i32);
impl_float_element!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversion_saturates() {
        assert_eq!(u8::from_scalar(300.7), 255);
        assert_eq!(u8::from_scalar(-3.0), 0);
        assert_eq!(u8::from_scalar(12.9), 12);
        assert_eq!(i8::from_scalar(-200.0), -128);
        assert_eq!(i16::from_scalar(f64::NAN), 0);
    }

    #[test]
    fn epsilon_of_element_type() {
        assert_eq!(<f32 as Element>::epsilon(), f32::EPSILON as f64);
        assert_eq!(<f64 as Element>::epsilon(), f64::EPSILON);
        assert_eq!(<u8 as Element>::epsilon(), 0.0);
    }

    #[test]
    fn integer_accumulation_saturates() {
        assert_eq!(250u8.accumulate(10), 255);
        assert_eq!((-100i8).accumulate(-100), -128);
        assert_eq!(1.5f32.accumulate(2.25), 3.75);
    }

    #[test]
    fn float_round_trip_is_exact() {
        let value = 0.123_456_79f32;
        assert_eq!(f32::from_scalar(value.to_scalar()), value);
        assert_eq!(i32::from_scalar(i32::MAX.to_scalar()), i32::MAX);
    }
}
