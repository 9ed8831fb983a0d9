//! Random sorted array generation

use crate::config::GeneratorConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces sorted arrays of a fixed length with values in `[min, max)`.
///
/// A configured seed makes the sequence of arrays reproducible across runs.
pub struct ArrayGenerator {
    rng: ChaCha8Rng,
    length: usize,
    min: i64,
    max: i64,
}

impl ArrayGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        ArrayGenerator {
            rng,
            length: config.length,
            min: config.min,
            max: config.max,
        }
    }

    pub fn generate(&mut self) -> Vec<i64> {
        let mut values: Vec<i64> = (0..self.length)
            .map(|_| self.rng.gen_range(self.min..self.max))
            .collect();
        values.sort_unstable();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_default_shape() {
        let mut generator = ArrayGenerator::new(&seeded(1));
        let values = generator.generate();

        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (0..100).contains(v)));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_same_seed_same_arrays() {
        let mut a = ArrayGenerator::new(&seeded(42));
        let mut b = ArrayGenerator::new(&seeded(42));

        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_custom_range() {
        let config = GeneratorConfig {
            length: 25,
            min: -5,
            max: -1,
            seed: Some(7),
        };
        let values = ArrayGenerator::new(&config).generate();

        assert_eq!(values.len(), 25);
        assert!(values.iter().all(|v| (-5..-1).contains(v)));
    }
}
