use crate::Component;

/// ITU-R BT.601 luma coefficients of the red, green and blue channels.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Computes the BT.601 luma of an RGB triple.
pub fn luma<T>(r: T, g: T, b: T) -> T
where
    T: Component,
{
    let [wr, wg, wb] = LUMA_WEIGHTS;
    r * T::lit(wr) + g * T::lit(wg) + b * T::lit(wb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn luma_weights_sum_to_one() {
        assert_abs_diff_eq!(LUMA_WEIGHTS.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(luma(0.25f64, 0.25, 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn luma_of_primaries() {
        assert_abs_diff_eq!(luma(1.0f32, 0.0, 0.0), 0.299, epsilon = 1e-6);
        assert_abs_diff_eq!(luma(0.0f32, 1.0, 0.0), 0.587, epsilon = 1e-6);
        assert_abs_diff_eq!(luma(0.0f32, 0.0, 1.0), 0.114, epsilon = 1e-6);
    }
}
