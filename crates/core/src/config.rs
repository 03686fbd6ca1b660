use crate::RenderConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Everything needed to go from nothing to a rendered surface: the grid, the
/// demo data over it, and how to present it. Two surfaces built from the same
/// config will always be identical.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate,
)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::prelude::Resource))]
#[serde(default)]
pub struct SurfaceConfig {
    /// Shape and size of the hex grid
    #[validate]
    pub grid: GridConfig,

    /// Config for the noise function used to generate the scalar field
    #[validate]
    pub field: FieldConfig,

    /// Config for how the surface is presented
    #[validate]
    pub render: RenderConfig,
}

/// Configuration for a hexagon-shaped grid. See
/// [HexagonalGrid](crate::HexagonalGrid).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the centre cell to the edge (in cells).
    #[validate(range(min = 0, max = 200))]
    pub radius: u16,

    /// Distance between the centres of two adjacent cells.
    #[validate(range(min = 0.000001))]
    pub hex_spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 20,
            hex_spacing: 0.1,
        }
    }
}

/// Config for the fractal noise function that generates demo data. We use
/// <https://crates.io/crates/noise> for noise generation. Generated values
/// are normalized into `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FieldConfig {
    /// RNG seed for the noise function.
    ///
    /// When deserializing a config, this field supports a few options:
    /// - If the value is an integer that fits into `u64`, use that value
    /// - If it's a string that can be parsed into a `u64`, use the parsed
    ///   value
    /// - If it's any other string, hash it and use the hash value
    /// - If it's anything else (out of range number, float, array, etc.),
    ///   error
    ///
    /// Regardless of how the seed value is input, it will always be serialized
    /// as a number.
    #[serde(deserialize_with = "serde_seed::deserialize")]
    pub seed: u64,

    /// Number of different frequencies to add together.
    #[validate(range(min = 1, max = 32))]
    pub octaves: usize,

    /// The frequency of the first (lowest) octave, in cycles per unit of grid
    /// distance.
    #[validate(range(min = 0.0))]
    pub frequency: f64,

    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,

    /// Amplitude multiplier between successive octaves. The first amplitude is
    /// always 1.0, then is multiplied by the persistence for each octave.
    pub persistence: f64,

    /// Exponent to apply to values after normalization. Since normalized
    /// values are in `[0, 1]`, any positive exponent keeps them there.
    #[validate(range(min = 0.0))]
    pub exponent: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            frequency: 1.5,
            lacunarity: 2.0,
            persistence: 0.5,
            exponent: 1.0,
        }
    }
}

/// The seed field has some fancy deserialization behavior implemented here. See
/// the `seed` field definition for a description.
mod serde_seed {
    use fnv::FnvHasher;
    use serde::{de::Visitor, Deserializer};
    use std::{
        fmt,
        hash::{Hash, Hasher},
    };

    /// Implements one integer visit method, range-checking into u64
    macro_rules! impl_visit {
        ($fname:ident, $type:ty) => {
            fn $fname<E>(self, value: $type) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.try_into().map_err(|_| {
                    E::custom(format!("u64 out of range: {}", value))
                })
            }
        };
    }

    struct SeedVisitor;

    impl<'de> Visitor<'de> for SeedVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or string")
        }

        impl_visit!(visit_u8, u8);
        impl_visit!(visit_u16, u16);
        impl_visit!(visit_u32, u32);
        impl_visit!(visit_u64, u64);
        impl_visit!(visit_i8, i8);
        impl_visit!(visit_i16, i16);
        impl_visit!(visit_i32, i32);
        impl_visit!(visit_i64, i64);

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.parse::<u64>().unwrap_or_else(|_| {
                let mut hasher = FnvHasher::default();
                value.hash(&mut hasher);
                hasher.finish()
            }))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        // We accept more than one type, so there's no type hint to give
        deserializer.deserialize_any(SeedVisitor)
    }
}
