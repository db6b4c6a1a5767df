//! Scalar helpers shared by the vector, colour and mesh code.

use rand::Rng;

/// Clamp a value to [min, max] range.
///
/// NaN passes through unchanged.
#[inline(always)]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min { min } else if v > max { max } else { v }
}

/// Uniform offset in `[-amount, amount]`, or 0 when `amount` is 0.
#[inline]
pub fn symmetric_offset<R: Rng + ?Sized>(rng: &mut R, amount: f64) -> f64 {
    if amount > 0.0 { rng.gen_range(-amount..=amount) } else { 0.0 }
}

/// Uniform value in `[0, max]`, or 0 when `max` is 0.
#[inline]
pub fn upto<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 { rng.gen_range(0.0..=max) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..1000 {
            let o = symmetric_offset(&mut rng, 10.0);
            assert!((-10.0..=10.0).contains(&o));
            let u = upto(&mut rng, 15.0);
            assert!((0.0..=15.0).contains(&u));
        }
        assert_eq!(symmetric_offset(&mut rng, 0.0), 0.0);
        assert_eq!(upto(&mut rng, 0.0), 0.0);
    }
}
