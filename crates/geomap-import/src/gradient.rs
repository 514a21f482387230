//! Quantized gradient sampling with random dithering.
//!
//! Rasters are often stored with a limited palette, so channel values cluster
//! on a few distinct steps. Mapping them straight onto discrete levels would
//! draw hard seams across the map; instead, values near a level boundary are
//! randomly pushed to the next level with a probability that grows the closer
//! they get to it.

use crate::random::RandomSource;

/// Channel values at or below this count as "off".
///
/// Indexed rasters with limited palettes may not hit 0 and 255 exactly.
pub const LOWER_CUTOFF: u8 = 0x0f;

/// Channel values at or above this count as "on".
pub const UPPER_CUTOFF: u8 = 0xf0;

/// Channel values below this carry no information for most classifiers.
pub const MID_CUTOFF: u8 = 0x10;

/// Samples a quantized gradient and returns the level at `sample`.
///
/// ```text
/// x == start |   sample->|   | end
///            |░░░|▒▒▒|▓▓▓|███|
/// y ==       0   1   2  *3*  4 == max_level
/// ```
///
/// `start` maps to level 0 and `end` to `max_level`; the gradient runs
/// downwards when `start > end`. Inside each band the chance of jittering up
/// to the next level rises linearly, with a fixed zone at both band edges
/// where no jitter happens.
///
/// # Panics
///
/// Panics if `max_level` is not positive or if `|end - start| < max_level`,
/// which would leave bands of zero width.
pub fn sample_quantized_gradient(
    rng: &mut dyn RandomSource,
    sample: i32,
    max_level: i32,
    start: i32,
    end: i32,
) -> i32 {
    assert!(max_level > 0, "gradient needs at least one level");
    let step = (end - start) / max_level;
    assert!(step != 0, "gradient {start}..{end} is too short for {max_level} levels");

    let low = start.min(end);
    let x = (sample - low).max(0);

    // Leave a buffer on both sides of the random range so that band edges
    // keep fixed values.
    let threshold = rng.random_below((step - 2).unsigned_abs()) as i32 + 1;
    let jitter = i32::from(x % step > threshold);

    let level = (x / step.abs() + jitter).clamp(0, max_level);
    if step < 0 { max_level - level } else { level }
}

/// A gradient over 8-bit channel values with a fixed number of levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub max_level: i32,
    pub start: u8,
    pub end: u8,
}

impl Gradient {
    pub const fn new(max_level: i32, start: u8, end: u8) -> Self {
        Self {
            max_level,
            start,
            end,
        }
    }

    /// Level of `value` on this gradient, in `0..=max_level`.
    pub fn sample(self, value: u8, rng: &mut dyn RandomSource) -> i32 {
        sample_quantized_gradient(
            rng,
            value as i32,
            self.max_level,
            self.start as i32,
            self.end as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DESCENDING: Gradient = Gradient::new(3, UPPER_CUTOFF, LOWER_CUTOFF);
    const ASCENDING: Gradient = Gradient::new(3, LOWER_CUTOFF, UPPER_CUTOFF);

    /// Exact expected level of `value`, averaging over every threshold the
    /// random draw can produce.
    fn expected_level(gradient: Gradient, value: u8) -> f64 {
        let step = (gradient.end as i32 - gradient.start as i32) / gradient.max_level;
        let limit = (step - 2).unsigned_abs() as u64;
        let total: i64 = (0..limit)
            .map(|k| {
                // Smallest bit pattern for which `random_below(limit) == k`.
                let bits = ((k << 32) + limit - 1) / limit;
                let mut rng = FixedRandom(bits as u32);
                gradient.sample(value, &mut rng) as i64
            })
            .sum();
        total as f64 / limit as f64
    }

    #[test]
    fn test_descending_gradient_endpoints() {
        for mut rng in [FixedRandom::lowest(), FixedRandom::highest()] {
            assert_eq!(DESCENDING.sample(0xf0, &mut rng), 0);
            assert_eq!(DESCENDING.sample(0x0f, &mut rng), 3);
        }
    }

    #[test]
    fn test_ascending_gradient_endpoints() {
        for mut rng in [FixedRandom::lowest(), FixedRandom::highest()] {
            assert_eq!(ASCENDING.sample(0x0f, &mut rng), 0);
            assert_eq!(ASCENDING.sample(0xf0, &mut rng), 3);
        }
    }

    #[test]
    fn test_values_beyond_the_gradient_clamp() {
        let mut rng = FixedRandom::lowest();
        assert_eq!(ASCENDING.sample(0, &mut rng), 0);
        assert_eq!(ASCENDING.sample(255, &mut rng), 3);
        assert_eq!(DESCENDING.sample(0, &mut rng), 3);
        assert_eq!(DESCENDING.sample(255, &mut rng), 0);
    }

    #[test]
    fn test_never_leaves_level_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let gradients = [
            ASCENDING,
            DESCENDING,
            Gradient::new(1, LOWER_CUTOFF, UPPER_CUTOFF),
            Gradient::new(2, LOWER_CUTOFF, UPPER_CUTOFF),
            Gradient::new(4, LOWER_CUTOFF, UPPER_CUTOFF),
            Gradient::new(6, LOWER_CUTOFF, UPPER_CUTOFF),
        ];
        for gradient in gradients {
            for value in 0..=255u8 {
                for _ in 0..8 {
                    let level = gradient.sample(value, &mut rng);
                    assert!(
                        (0..=gradient.max_level).contains(&level),
                        "{gradient:?} at {value} gave {level}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_jitter_only_near_band_edges() {
        // step = 75; x = 1 sits in the fixed zone at the bottom of band 0.
        let value = LOWER_CUTOFF + 1;
        assert_eq!(ASCENDING.sample(value, &mut FixedRandom::lowest()), 0);
        assert_eq!(ASCENDING.sample(value, &mut FixedRandom::highest()), 0);

        // x = 74 is the top of band 0: any threshold below 74 jitters up.
        let value = LOWER_CUTOFF + 74;
        assert_eq!(ASCENDING.sample(value, &mut FixedRandom::lowest()), 1);
        assert_eq!(ASCENDING.sample(value, &mut FixedRandom::highest()), 1);

        // Mid-band the outcome depends on the draw.
        let value = LOWER_CUTOFF + 37;
        assert_eq!(ASCENDING.sample(value, &mut FixedRandom::lowest()), 1);
        assert_eq!(ASCENDING.sample(value, &mut FixedRandom::highest()), 0);
    }

    #[test]
    fn test_expected_level_is_monotonic() {
        for gradient in [ASCENDING, Gradient::new(6, LOWER_CUTOFF, UPPER_CUTOFF)] {
            let mut previous = f64::MIN;
            for value in 0..=255u8 {
                let expected = expected_level(gradient, value);
                assert!(
                    expected >= previous,
                    "expected level dropped at {value}: {previous} -> {expected}"
                );
                previous = expected;
            }
        }
    }

    #[test]
    fn test_descending_mirrors_ascending_bands() {
        let mut rng = FixedRandom::highest();
        // Fixed zones: no jitter either way, so the two directions mirror.
        for value in [0x0f, 0x10, 0x5a, 0xa5, 0xf0] {
            let up = ASCENDING.sample(value, &mut rng);
            let down = DESCENDING.sample(value, &mut rng);
            assert_eq!(up + down, 3, "value {value:#x}");
        }
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn test_zero_width_bands_panic() {
        sample_quantized_gradient(&mut FixedRandom::lowest(), 5, 10, 0, 5);
    }
}
