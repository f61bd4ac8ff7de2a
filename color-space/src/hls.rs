//! Conversions between RGB and HLS (hue, lightness, saturation).
//!
//! Hue is expressed in degrees in `[0, 360)`. Lightness and saturation are in
//! the same unit as the RGB components, which are assumed to lie in `[0, 1]`.

use crate::{common::*, Component};

/// Interpolation table indices feeding (b, g, r), one row per 60° hue sector.
pub const HLS_SECTOR_TABLE: [[usize; 3]; 6] = [
    [1, 3, 0], // red to yellow
    [1, 0, 2], // yellow to green
    [3, 0, 1], // green to cyan
    [0, 2, 1], // cyan to blue
    [0, 1, 3], // blue to magenta
    [2, 1, 0], // magenta to red
];

/// Converts an RGB triple to `(hue, lightness, saturation)`.
///
/// Pixels whose channel spread does not exceed the machine epsilon of `T` are
/// achromatic and get zero hue and saturation.
pub fn rgb_to_hls<T>(r: T, g: T, b: T) -> (T, T, T)
where
    T: Component,
{
    rgb_to_hls_with_epsilon(r, g, b, T::epsilon())
}

/// Converts an RGB triple to `(hue, lightness, saturation)`, treating pixels
/// whose channel spread does not exceed `epsilon` as achromatic.
pub fn rgb_to_hls_with_epsilon<T>(r: T, g: T, b: T, epsilon: T) -> (T, T, T)
where
    T: Component,
{
    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let half = one / two;

    let vmax = r.max(g).max(b);
    let vmin = r.min(g).min(b);
    let diff = vmax - vmin;
    let l = (vmax + vmin) * half;

    if diff > epsilon {
        let s = if l < half {
            diff / (vmax + vmin)
        } else {
            diff / (two - vmax - vmin)
        };

        let scale = T::lit(60.0) / diff;
        let h = if vmax == r {
            (g - b) * scale
        } else if vmax == g {
            (b - r) * scale + T::lit(120.0)
        } else {
            (r - g) * scale + T::lit(240.0)
        };
        let h = if h < zero { h + T::lit(360.0) } else { h };

        (h, l, s)
    } else {
        (zero, l, zero)
    }
}

/// Converts `(hue, lightness, saturation)` back to an RGB triple.
///
/// The hue may lie outside of `[0, 360)`; it wraps around. A non-finite hue
/// is treated as achromatic.
pub fn hls_to_rgb<T>(h: T, l: T, s: T) -> (T, T, T)
where
    T: Component,
{
    if s == T::zero() || !h.is_finite() {
        return (l, l, l);
    }

    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let half = one / two;
    let six = T::lit(6.0);

    let p2 = if l <= half {
        l * (one + s)
    } else {
        l + s - l * s
    };
    let p1 = two * l - p2;

    // hue in units of sectors, wrapped into [0, 6)
    let h = h / T::lit(60.0) % six;
    let h = if h < zero { h + six } else { h };
    let h = if h >= six { zero } else { h };

    let sector = h.floor();
    let frac = h - sector;
    let sector = sector.to_usize().unwrap_or(0).min(5);

    let tab = [
        p2,
        p1,
        p1 + (p2 - p1) * (one - frac),
        p1 + (p2 - p1) * frac,
    ];
    let [b_index, g_index, r_index] = HLS_SECTOR_TABLE[sector];

    (tab[r_index], tab[g_index], tab[b_index])
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T> Rgb<T>
where
    T: Component,
{
    pub fn to_hls(&self) -> Hls<T> {
        let (h, l, s) = rgb_to_hls(self.r, self.g, self.b);
        Hls { h, l, s }
    }

    pub fn to_hls_with_epsilon(&self, epsilon: T) -> Hls<T> {
        let (h, l, s) = rgb_to_hls_with_epsilon(self.r, self.g, self.b, epsilon);
        Hls { h, l, s }
    }
}

impl<T> Rgb<T> {
    pub fn into_array(self) -> [T; 3] {
        [self.r, self.g, self.b]
    }
}

impl<T> From<[T; 3]> for Rgb<T> {
    fn from([r, g, b]: [T; 3]) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hls<T> {
    /// Hue in degrees.
    pub h: T,
    pub l: T,
    pub s: T,
}

impl<T> Hls<T>
where
    T: Component,
{
    pub fn to_rgb(&self) -> Rgb<T> {
        let (r, g, b) = hls_to_rgb(self.h, self.l, self.s);
        Rgb { r, g, b }
    }

    pub fn is_achromatic(&self) -> bool {
        self.s == T::zero()
    }

    /// Shifts the hue by `delta` degrees and clamps it into `[min, max]`.
    pub fn shift_hue_clamped(self, delta: T, min: T, max: T) -> Self {
        Self {
            h: (self.h + delta).max(min).min(max),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pure_red_to_hls() {
        let (h, l, s) = rgb_to_hls(1.0f64, 0.0, 0.0);
        assert_eq!(h, 0.0);
        assert_eq!(l, 0.5);
        assert_eq!(s, 1.0);

        let (r, g, b) = hls_to_rgb(h, l, s);
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));
    }

    #[test]
    fn primary_and_secondary_hues() {
        let cases = [
            ([0.0f64, 1.0, 0.0], 120.0),
            ([0.0, 0.0, 1.0], 240.0),
            ([1.0, 1.0, 0.0], 60.0),
            ([0.0, 1.0, 1.0], 180.0),
            ([1.0, 0.0, 1.0], 300.0),
        ];

        for ([r, g, b], expect) in cases {
            let (h, l, s) = rgb_to_hls(r, g, b);
            assert_abs_diff_eq!(h, expect, epsilon = 1e-9);
            assert_abs_diff_eq!(l, 0.5, epsilon = 1e-9);
            assert_abs_diff_eq!(s, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn dark_and_light_saturation_branches() {
        // l < 0.5
        let (h, l, s) = rgb_to_hls(0.2f64, 0.4, 0.6);
        assert_abs_diff_eq!(h, 210.0, epsilon = 1e-9);
        assert_abs_diff_eq!(l, 0.4, epsilon = 1e-9);
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-9);

        // l >= 0.5
        let (h, l, s) = rgb_to_hls(0.9f64, 0.5, 0.7);
        assert_abs_diff_eq!(h, 330.0, epsilon = 1e-9);
        assert_abs_diff_eq!(l, 0.7, epsilon = 1e-9);
        assert_abs_diff_eq!(s, 0.4 / 0.6, epsilon = 1e-9);
    }

    #[test]
    fn achromatic_pixel() {
        let (h, l, s) = rgb_to_hls(0.5f32, 0.5, 0.5);
        assert_eq!(h, 0.0);
        assert_eq!(l, 0.5);
        assert_eq!(s, 0.0);

        // any hue maps back to the same gray
        for hue in [0.0f32, 45.0, 179.0, 359.0] {
            assert_eq!(hls_to_rgb(hue, l, s), (0.5, 0.5, 0.5));
        }
    }

    #[test]
    fn hue_wraps_around() {
        let base = hls_to_rgb(30.0f64, 0.5, 1.0);
        for hue in [390.0, -330.0, 750.0] {
            let (r, g, b) = hls_to_rgb(hue, 0.5, 1.0);
            assert_abs_diff_eq!(r, base.0, epsilon = 1e-9);
            assert_abs_diff_eq!(g, base.1, epsilon = 1e-9);
            assert_abs_diff_eq!(b, base.2, epsilon = 1e-9);
        }

        // a hue just below zero must not land on a seventh sector
        let (r, g, b) = hls_to_rgb(-1e-18f64, 0.5, 1.0);
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(g, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn huge_hue_wraps_into_a_sector() {
        for hue in [1e18f64, -1e18, f64::MAX, f64::MIN] {
            let (r, g, b) = hls_to_rgb(hue, 0.5, 1.0);
            for value in [r, g, b] {
                assert!((0.0..=1.0).contains(&value));
            }
        }

        let (r, g, b) = hls_to_rgb(1e18f32, 0.5, 1.0);
        assert!([r, g, b].iter().all(|value| (0.0..=1.0).contains(value)));
    }

    #[test]
    fn achromatic_threshold_follows_epsilon() {
        let g = 0.5 + f32::EPSILON as f64 / 2.0;

        let (_, _, s) = rgb_to_hls(0.5f64, g, 0.5);
        assert!(s > 0.0);

        let (h, _, s) = rgb_to_hls_with_epsilon(0.5f64, g, 0.5, f32::EPSILON as f64);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn non_finite_hue_is_gray() {
        assert_eq!(hls_to_rgb(f64::NAN, 0.3, 0.5), (0.3, 0.3, 0.3));
        assert_eq!(hls_to_rgb(f64::INFINITY, 0.3, 0.5), (0.3, 0.3, 0.3));
    }

    #[test]
    fn shift_hue_clamped() {
        let hls = Rgb::from([0.0f64, 0.0, 1.0]).to_hls();
        assert_eq!(hls.shift_hue_clamped(10.0, 0.0, 180.0).h, 180.0);
        assert_eq!(hls.shift_hue_clamped(-250.0, 0.0, 180.0).h, 0.0);
        assert_abs_diff_eq!(
            hls.shift_hue_clamped(-100.0, 0.0, 180.0).h,
            140.0,
            epsilon = 1e-9
        );
    }
}
