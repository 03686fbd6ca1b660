//! Demo data generation. Real data comes from whatever is being visualized,
//! but a seeded fractal noise field makes a good stand-in for trying out
//! colour maps and scales.

use crate::{grid::HexGrid, timed, FieldConfig, NumRange, Result};
use log::info;
use noise::{Fbm, MultiFractal, NoiseFn, Seedable};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use validator::Validate;

/// A wrapper around a noise function that makes it easy to sample at cell
/// centres. Outputs are always in `[0, 1]`.
#[derive(Debug)]
pub struct NoiseField {
    noise_fn: Fbm,
    exponent: f64,
}

impl NoiseField {
    /// The nominal output range of the internal noise function. Fractal sums
    /// can stray slightly outside of it, so outputs get clamped.
    const NOISE_FN_OUTPUT_RANGE: NumRange<f64> = NumRange::new(-1.0, 1.0);

    /// Initialize a noise function from its config. Returns an error if the
    /// config is invalid.
    pub fn new(config: &FieldConfig) -> Result<Self> {
        config.validate()?;
        // The noise crate only takes 32-bit seeds, so derive one from the full
        // 64-bit seed
        let mut rng = Pcg64::seed_from_u64(config.seed);
        let noise_fn = Fbm::default()
            .set_seed(rng.gen())
            .set_octaves(config.octaves)
            .set_frequency(config.frequency)
            .set_lacunarity(config.lacunarity)
            .set_persistence(config.persistence);
        Ok(Self {
            noise_fn,
            exponent: config.exponent,
        })
    }

    /// Get the function output at the given planar point
    pub fn get(&self, x: f32, y: f32) -> f32 {
        let fn_output = self.noise_fn.get([f64::from(x), f64::from(y)]);
        Self::NOISE_FN_OUTPUT_RANGE
            .value(fn_output)
            // Map to [0,1] so we can apply the exponent
            .normalize()
            .clamp()
            .apply(|value| value.powf(self.exponent))
            .inner() as f32
    }

    /// Sample the function at every cell centre of a grid. The output is
    /// index-aligned with the grid's cells.
    pub fn sample<G: HexGrid + ?Sized>(&self, grid: &G) -> Vec<f32> {
        timed!("Field generation", {
            (0..grid.len())
                .map(|index| {
                    let point = grid.position(index);
                    self.get(point.x, point.y)
                })
                .collect()
        })
    }
}

/// Generate a demo scalar field over a grid, with one value in `[0, 1]` per
/// cell.
pub fn generate_field<G: HexGrid + ?Sized>(
    grid: &G,
    config: &FieldConfig,
) -> Result<Vec<f32>> {
    let field = NoiseField::new(config)?;
    let data = field.sample(grid);
    info!(
        "Generated field with {} values (seed {})",
        data.len(),
        config.seed
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, HexagonalGrid};

    #[test]
    fn test_values_in_range() {
        let grid = HexagonalGrid::new(10, 0.1);
        let data = generate_field(&grid, &FieldConfig::default()).unwrap();
        assert_eq!(data.len(), grid.len());
        for value in &data {
            assert!((0.0..=1.0).contains(value), "{} out of range", value);
        }
    }

    #[test]
    fn test_deterministic() {
        let grid = HexagonalGrid::new(5, 0.1);
        let config = FieldConfig {
            seed: 1234,
            ..Default::default()
        };
        let first = generate_field(&grid, &config).unwrap();
        let second = generate_field(&grid, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_changes_output() {
        let grid = HexagonalGrid::new(5, 0.1);
        let first = generate_field(
            &grid,
            &FieldConfig {
                seed: 1,
                ..Default::default()
            },
        )
        .unwrap();
        let second = generate_field(
            &grid,
            &FieldConfig {
                seed: 2,
                ..Default::default()
            },
        )
        .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_config() {
        let grid = HexagonalGrid::new(1, 1.0);
        let config = FieldConfig {
            octaves: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate_field(&grid, &config),
            Err(Error::InvalidConfig(_))
        ));
    }
}
