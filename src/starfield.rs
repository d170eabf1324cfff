//! Decorative background stars.

/// One twinkling dot. Position is in percent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
}

/// Tiny LCG; plenty for scattering dots, not for anything else.
pub struct StarRng {
    state: u64,
}

impl StarRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // top 53 bits -> mantissa
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}

pub fn scatter(count: usize, rng: &mut StarRng) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            size_px: rng.next_f64() * 3.0 + 1.0,
            left_pct: rng.next_f64() * 100.0,
            top_pct: rng.next_f64() * 100.0,
            delay_s: rng.next_f64() * 2.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_stay_in_range() {
        let mut rng = StarRng::new(42);
        let stars = scatter(500, &mut rng);
        assert_eq!(stars.len(), 500);
        for s in &stars {
            assert!((1.0..4.0).contains(&s.size_px));
            assert!((0.0..100.0).contains(&s.left_pct));
            assert!((0.0..100.0).contains(&s.top_pct));
            assert!((0.0..2.0).contains(&s.delay_s));
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = scatter(10, &mut StarRng::new(7));
        let b = scatter(10, &mut StarRng::new(7));
        assert_eq!(a, b);
        assert_ne!(a, scatter(10, &mut StarRng::new(8)));
    }
}
