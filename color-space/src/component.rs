use crate::common::*;

/// A floating point color component.
pub trait Component: Float + Debug {
    /// Converts a literal into the component type.
    fn lit(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }
}

impl<T> Component for T where T: Float + Debug {}
