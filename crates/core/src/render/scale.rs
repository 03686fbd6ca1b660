use crate::NumRange;
use serde::{Deserialize, Serialize};

/// Two independent affine transforms applied to each datum before rendering:
/// one for the surface height, one for the colour intensity that gets fed to
/// the colour map.
///
/// ```text
/// height    = datum * height_gradient + height_offset
/// intensity = clamp(datum * colour_gradient + colour_offset, 0, 1)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearScale {
    pub height_gradient: f32,
    pub height_offset: f32,
    pub colour_gradient: f32,
    pub colour_offset: f32,
}

impl LinearScale {
    /// The pass-through scale: heights equal data, and data in `[0, 1]` maps
    /// straight onto the colour map
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 1.0, 0.0);

    pub const fn new(
        height_gradient: f32,
        height_offset: f32,
        colour_gradient: f32,
        colour_offset: f32,
    ) -> Self {
        Self {
            height_gradient,
            height_offset,
            colour_gradient,
            colour_offset,
        }
    }

    /// Unpack a scale from `[m_z, c_z, m_col, c_col]`
    pub const fn from_array(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Pack this scale into `[m_z, c_z, m_col, c_col]`
    pub const fn to_array(self) -> [f32; 4] {
        [
            self.height_gradient,
            self.height_offset,
            self.colour_gradient,
            self.colour_offset,
        ]
    }

    /// Build a scale that maps `data_range` linearly onto `height_range` for
    /// heights, and onto `[0, 1]` for colours. If the data range is empty,
    /// every datum maps to the bottom of both ranges.
    pub fn fit(data_range: NumRange<f32>, height_range: NumRange<f32>) -> Self {
        let colour_range: NumRange<f32> = NumRange::normal_range();
        let (height_gradient, colour_gradient) = if data_range.span() > 0.0 {
            (
                height_range.span() / data_range.span(),
                colour_range.span() / data_range.span(),
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            height_gradient,
            height_offset: height_range.min - height_gradient * data_range.min,
            colour_gradient,
            colour_offset: colour_range.min - colour_gradient * data_range.min,
        }
    }

    /// Map a datum to a surface height
    pub fn height(&self, datum: f32) -> f32 {
        datum * self.height_gradient + self.height_offset
    }

    /// Map a datum to a colour intensity, which is always in `[0, 1]`
    pub fn intensity(&self, datum: f32) -> f32 {
        NumRange::normal_range()
            .value(datum * self.colour_gradient + self.colour_offset)
            .clamp()
            .inner()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 4]> for LinearScale {
    fn from(values: [f32; 4]) -> Self {
        Self::from_array(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_height() {
        let scale = LinearScale::new(2.0, -1.0, 1.0, 0.0);
        assert_approx_eq!(scale.height(0.0), -1.0);
        assert_approx_eq!(scale.height(0.5), 0.0);
        assert_approx_eq!(scale.height(3.0), 5.0);
    }

    #[test]
    fn test_intensity_clamps() {
        let scale = LinearScale::new(1.0, 0.0, 4.0, 0.5);
        assert_approx_eq!(scale.intensity(-1.0), 0.0);
        assert_approx_eq!(scale.intensity(0.0), 0.5);
        assert_approx_eq!(scale.intensity(1.0), 1.0);
    }

    #[test]
    fn test_array_layout() {
        let scale = LinearScale::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_approx_eq!(scale.height_gradient, 1.0);
        assert_approx_eq!(scale.height_offset, 2.0);
        assert_approx_eq!(scale.colour_gradient, 3.0);
        assert_approx_eq!(scale.colour_offset, 4.0);
        assert_eq!(scale.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_fit() {
        let scale = LinearScale::fit(
            NumRange::new(10.0, 20.0),
            NumRange::new(0.0, 0.5),
        );
        assert_approx_eq!(scale.height(10.0), 0.0);
        assert_approx_eq!(scale.height(15.0), 0.25);
        assert_approx_eq!(scale.height(20.0), 0.5);
        assert_approx_eq!(scale.intensity(10.0), 0.0);
        assert_approx_eq!(scale.intensity(15.0), 0.5);
        assert_approx_eq!(scale.intensity(20.0), 1.0);
    }

    #[test]
    fn test_fit_empty_range() {
        let scale =
            LinearScale::fit(NumRange::new(3.0, 3.0), NumRange::new(1.0, 2.0));
        assert_approx_eq!(scale.height(3.0), 1.0);
        assert_approx_eq!(scale.height(100.0), 1.0);
        assert_approx_eq!(scale.intensity(100.0), 0.0);
    }
}
