//! Colour mapping: converting a normalized scalar into an RGB triple.
//!
//! A [ColourMap] is a pure function of `(scheme, hue, datum)`. The scheme is
//! picked from [ColourMapType], and determines which algorithm is used:
//!
//! - [ColourMapType::Jet]: piecewise-linear blend over a fixed 9-stop table
//! - [ColourMapType::Rainbow]: a full sweep of the HSV hue circle
//! - Perceptual lookup tables (magma, inferno, plasma, viridis, cividis,
//!   twilight): nearest-entry sampling of a static table
//! - [ColourMapType::Greyscale]: HSV value proportional to the datum
//! - The monochrome family: HSV saturation proportional to the datum
//!
//! Inputs are expected to be in `[0, 1]`. The colour map doesn't clamp for
//! you, so have a look at each scheme's notes for what happens outside of
//! that range.

mod tables;

use crate::{util::unit::Colour, Error, NumRange, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator};

/// The 9 stops of the jet colour map, evenly spaced over `[0, 1]`
const JET_STOPS: [[f32; 3]; 9] = [
    [0.0, 0.0, 0.5],
    [0.0, 0.0, 1.0],
    [0.0, 0.5, 1.0],
    [0.0, 1.0, 1.0],
    [0.5, 1.0, 0.5],
    [1.0, 1.0, 0.0],
    [1.0, 0.5, 0.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
];

/// The different colour schemes available. Variants are listed in a fixed
/// order, which is the order used for numeric selection (see the
/// `TryFrom<i32>` impl).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColourMapType {
    Jet,
    Rainbow,
    Magma,
    Inferno,
    Plasma,
    Viridis,
    Cividis,
    Twilight,
    Greyscale,
    /// Monochrome with a free hue
    Monochrome,
    MonochromeRed,
    MonochromeBlue,
    MonochromeGreen,
}

impl ColourMapType {
    /// For the named-hue monochrome variants, get the hue they're locked to,
    /// as a fraction of the hue circle. `None` for every other scheme.
    pub fn locked_hue(self) -> Option<f32> {
        match self {
            Self::MonochromeRed => Some(1.0),
            Self::MonochromeBlue => Some(0.667),
            Self::MonochromeGreen => Some(0.333),
            _ => None,
        }
    }

    /// Can the hue be changed while this scheme is selected?
    pub fn accepts_hue(self) -> bool {
        self.locked_hue().is_none()
    }
}

impl Default for ColourMapType {
    fn default() -> Self {
        Self::Jet
    }
}

impl FromStr for ColourMapType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::iter()
            .find(|map_type| map_type.to_string() == name)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("unknown colour map: {:?}", s))
            })
    }
}

impl TryFrom<i32> for ColourMapType {
    type Error = Error;

    fn try_from(index: i32) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::iter().nth(index))
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "colour map index out of range: {}",
                    index
                ))
            })
    }
}

/// The order in which colour channels are written out
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColourOrder {
    Rgb,
    Bgr,
}

impl Default for ColourOrder {
    fn default() -> Self {
        Self::Rgb
    }
}

/// Converts scalars in `[0, 1]` to colours. See the module-level docs for a
/// rundown of each scheme.
///
/// ```
/// use hexsurf::{ColourMap, ColourMapType};
///
/// let mut colour_map = ColourMap::default();
/// colour_map.set_type(ColourMapType::MonochromeRed);
/// assert_eq!(colour_map.hue(), 1.0);
/// assert!(colour_map.set_hue(0.5).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColourMap {
    map_type: ColourMapType,
    hue: f32,
    order: ColourOrder,
}

impl ColourMap {
    pub fn new(map_type: ColourMapType) -> Self {
        let mut colour_map = Self {
            map_type,
            hue: 0.0,
            order: ColourOrder::default(),
        };
        colour_map.set_type(map_type);
        colour_map
    }

    pub fn map_type(&self) -> ColourMapType {
        self.map_type
    }

    /// Switch to a different scheme. If the new scheme has a locked hue, the
    /// current hue is overwritten with it.
    pub fn set_type(&mut self, map_type: ColourMapType) {
        self.map_type = map_type;
        if let Some(hue) = map_type.locked_hue() {
            self.hue = hue;
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Change the hue. Fails with [Error::InvalidOperation] if the current
    /// scheme has a locked hue.
    pub fn set_hue(&mut self, hue: f32) -> Result<()> {
        if self.map_type.accepts_hue() {
            self.hue = hue;
            Ok(())
        } else {
            Err(Error::InvalidOperation(format!(
                "cannot set the hue of colour map {}",
                self.map_type
            )))
        }
    }

    pub fn order(&self) -> ColourOrder {
        self.order
    }

    pub fn set_order(&mut self, order: ColourOrder) {
        self.order = order;
    }

    /// Convert a scalar to a colour under the current scheme and hue.
    ///
    /// Out of range input:
    /// - Jet: anything outside `[0, 1]` (including NaN) is black
    /// - Lookup tables: the index is clamped to the table, so values below 0
    ///   get the first entry and values above 1 get the last
    /// - HSV-based schemes: the hue/saturation/value is passed through as is
    pub fn convert(&self, datum: f32) -> Colour {
        match self.map_type {
            ColourMapType::Jet => jet(datum),
            ColourMapType::Rainbow => hsv_to_rgb(datum, 1.0, 1.0),
            ColourMapType::Magma => sample_table(&tables::MAGMA, datum),
            ColourMapType::Inferno => sample_table(&tables::INFERNO, datum),
            ColourMapType::Plasma => sample_table(&tables::PLASMA, datum),
            ColourMapType::Viridis => sample_table(&tables::VIRIDIS, datum),
            ColourMapType::Cividis => sample_table(&tables::CIVIDIS, datum),
            ColourMapType::Twilight => sample_table(&tables::TWILIGHT, datum),
            ColourMapType::Greyscale => hsv_to_rgb(self.hue, 0.0, datum),
            ColourMapType::Monochrome
            | ColourMapType::MonochromeRed
            | ColourMapType::MonochromeBlue
            | ColourMapType::MonochromeGreen => {
                hsv_to_rgb(self.hue, datum, 1.0)
            }
        }
    }

    /// Same as [Self::convert], but the channels are laid out in this map's
    /// configured [ColourOrder].
    pub fn convert_ordered(&self, datum: f32) -> [f32; 3] {
        self.convert(datum).to_array(self.order)
    }
}

impl Default for ColourMap {
    fn default() -> Self {
        Self::new(ColourMapType::default())
    }
}

/// Blend between the two jet stops that bracket the datum. The last interval
/// is closed on both ends, so `1.0` lands exactly on the final stop.
fn jet(datum: f32) -> Colour {
    let intervals = JET_STOPS.len() - 1;
    let interval_len = 1.0 / intervals as f32;
    for i in 0..intervals {
        let lower = i as f32 * interval_len;
        let upper = if i == intervals - 1 {
            1.0
        } else {
            (i + 1) as f32 * interval_len
        };
        if lower <= datum && datum <= upper {
            let c = datum - lower;
            return Colour::from(JET_STOPS[i])
                * ((interval_len - c) / interval_len)
                + Colour::from(JET_STOPS[i + 1]) * (c / interval_len);
        }
    }
    Colour::BLACK
}

/// Nearest-entry lookup. The index is clamped to the table bounds.
fn sample_table(table: &[[f32; 3]], datum: f32) -> Colour {
    let max_index = (table.len() - 1) as f32;
    let index = NumRange::new(0.0, max_index)
        .value((datum * max_index).round())
        .clamp()
        .inner();
    Colour::from(table[index as usize])
}

/// Convert a colour from HSV to RGB, with all components in `[0, 1]`. The hue
/// circle is split into 6 sectors, starting from red at `h = 0` (and again at
/// `h = 1`). A negative hue, or any non-finite component, gives black.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Colour {
    if !(h.is_finite() && s.is_finite() && v.is_finite()) {
        return Colour::BLACK;
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    if sector < 0.0 {
        return Colour::BLACK;
    }
    match sector as u64 % 6 {
        0 => Colour::new(v, t, p),
        1 => Colour::new(q, v, p),
        2 => Colour::new(p, v, t),
        3 => Colour::new(p, q, v),
        4 => Colour::new(t, p, v),
        _ => Colour::new(v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use serde_test::{assert_tokens, Token};

    fn assert_colour_approx_eq(actual: Colour, expected: (f32, f32, f32)) {
        assert_approx_eq!(actual.red, expected.0, 1e-5);
        assert_approx_eq!(actual.green, expected.1, 1e-5);
        assert_approx_eq!(actual.blue, expected.2, 1e-5);
    }

    #[test]
    fn test_jet_stops() {
        let colour_map = ColourMap::new(ColourMapType::Jet);
        for (i, stop) in JET_STOPS.iter().enumerate() {
            let datum = i as f32 / 8.0;
            assert_eq!(
                colour_map.convert(datum),
                Colour::from(*stop),
                "datum {}",
                datum
            );
        }
    }

    #[test]
    fn test_jet_interpolates() {
        let colour_map = ColourMap::new(ColourMapType::Jet);
        // Halfway between (0,1,1) and (0.5,1,0.5)
        assert_colour_approx_eq(
            colour_map.convert(0.4375),
            (0.25, 1.0, 0.75),
        );
    }

    #[test]
    fn test_jet_out_of_range() {
        let colour_map = ColourMap::new(ColourMapType::Jet);
        assert_eq!(colour_map.convert(-0.1), Colour::BLACK);
        assert_eq!(colour_map.convert(1.1), Colour::BLACK);
        assert_eq!(colour_map.convert(f32::NAN), Colour::BLACK);
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_colour_approx_eq(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_colour_approx_eq(
            hsv_to_rgb(1.0 / 3.0, 1.0, 1.0),
            (0.0, 1.0, 0.0),
        );
        assert_colour_approx_eq(
            hsv_to_rgb(2.0 / 3.0, 1.0, 1.0),
            (0.0, 0.0, 1.0),
        );
        // Hue 1.0 wraps back around to red
        assert_colour_approx_eq(hsv_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        for hue in &[0.0, 0.2, 0.5, 0.9] {
            assert_colour_approx_eq(
                hsv_to_rgb(*hue, 0.0, 1.0),
                (1.0, 1.0, 1.0),
            );
        }
        assert_eq!(hsv_to_rgb(-0.5, 1.0, 1.0), Colour::BLACK);
    }

    #[test]
    fn test_rainbow() {
        let colour_map = ColourMap::new(ColourMapType::Rainbow);
        assert_colour_approx_eq(colour_map.convert(0.0), (1.0, 0.0, 0.0));
        // Yellow is at the boundary of sectors 0 and 1
        assert_colour_approx_eq(
            colour_map.convert(1.0 / 6.0),
            (1.0, 1.0, 0.0),
        );
    }

    #[test]
    fn test_greyscale() {
        let colour_map = ColourMap::new(ColourMapType::Greyscale);
        assert_colour_approx_eq(colour_map.convert(0.0), (0.0, 0.0, 0.0));
        assert_colour_approx_eq(colour_map.convert(0.5), (0.5, 0.5, 0.5));
        assert_colour_approx_eq(colour_map.convert(1.0), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_monochrome_locked_hue() {
        let mut colour_map = ColourMap::default();
        colour_map.set_hue(0.25).unwrap();
        colour_map.set_type(ColourMapType::MonochromeRed);
        assert_approx_eq!(colour_map.hue(), 1.0);
        assert!(matches!(
            colour_map.set_hue(0.5),
            Err(Error::InvalidOperation(_))
        ));
        // The failed set shouldn't have changed anything
        assert_approx_eq!(colour_map.hue(), 1.0);
        assert_colour_approx_eq(colour_map.convert(1.0), (1.0, 0.0, 0.0));
        assert_colour_approx_eq(colour_map.convert(0.0), (1.0, 1.0, 1.0));

        colour_map.set_type(ColourMapType::MonochromeGreen);
        assert_approx_eq!(colour_map.hue(), 0.333);
        colour_map.set_type(ColourMapType::MonochromeBlue);
        assert_approx_eq!(colour_map.hue(), 0.667);
    }

    #[test]
    fn test_monochrome_free_hue() {
        let mut colour_map = ColourMap::new(ColourMapType::Monochrome);
        assert_approx_eq!(colour_map.hue(), 0.0);
        colour_map.set_hue(2.0 / 3.0).unwrap();
        assert_colour_approx_eq(colour_map.convert(1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_lookup_table_clamps() {
        let colour_map = ColourMap::new(ColourMapType::Viridis);
        let first = Colour::from(tables::VIRIDIS[0]);
        let last = Colour::from(tables::VIRIDIS[255]);
        assert_eq!(colour_map.convert(0.0), first);
        assert_eq!(colour_map.convert(-3.0), first);
        assert_eq!(colour_map.convert(1.0), last);
        assert_eq!(colour_map.convert(7.5), last);
        assert_eq!(colour_map.convert(f32::NAN), first);

        let colour_map = ColourMap::new(ColourMapType::Twilight);
        assert_eq!(
            colour_map.convert(1.5),
            Colour::from(tables::TWILIGHT[509])
        );
    }

    #[test]
    fn test_lookup_tables_match_matplotlib() {
        // Published float values. Tables are 8-bit, so allow half a step.
        let tolerance = 0.5 / 255.0 + 1e-6;
        let cases: &[(&[[f32; 3]], usize, [f32; 3])] = &[
            (&tables::VIRIDIS, 0, [0.267004, 0.004874, 0.329415]),
            (&tables::VIRIDIS, 128, [0.127568, 0.566949, 0.550556]),
            (&tables::VIRIDIS, 255, [0.993248, 0.906157, 0.143936]),
            (&tables::MAGMA, 0, [0.001462, 0.000466, 0.013866]),
            (&tables::MAGMA, 255, [0.987053, 0.991438, 0.749504]),
            (&tables::INFERNO, 0, [0.001462, 0.000466, 0.013866]),
            (&tables::INFERNO, 255, [0.988362, 0.998364, 0.644924]),
            (&tables::PLASMA, 0, [0.050383, 0.029803, 0.527975]),
            (&tables::PLASMA, 255, [0.940015, 0.975158, 0.131326]),
        ];
        for (table, index, expected) in cases {
            for channel in 0..3 {
                assert_approx_eq!(
                    table[*index][channel],
                    expected[channel],
                    tolerance
                );
            }
        }
    }

    #[test]
    fn test_lookup_table_nearest_entry() {
        let colour_map = ColourMap::new(ColourMapType::Magma);
        // 0.5 * 255 = 127.5, which rounds away from zero
        assert_eq!(colour_map.convert(0.5), Colour::from(tables::MAGMA[128]));
        assert_eq!(
            colour_map.convert(10.0 / 255.0),
            Colour::from(tables::MAGMA[10])
        );
    }

    #[test]
    fn test_convert_ordered() {
        let mut colour_map = ColourMap::new(ColourMapType::Jet);
        assert_eq!(colour_map.convert_ordered(0.0), [0.0, 0.0, 0.5]);
        colour_map.set_order(ColourOrder::Bgr);
        assert_eq!(colour_map.convert_ordered(0.0), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_type() {
        assert_eq!(
            "monochrome_red".parse::<ColourMapType>().unwrap(),
            ColourMapType::MonochromeRed
        );
        assert_eq!(
            "Viridis".parse::<ColourMapType>().unwrap(),
            ColourMapType::Viridis
        );
        assert!(matches!(
            "sepia".parse::<ColourMapType>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_type_from_index() {
        assert_eq!(ColourMapType::try_from(0).unwrap(), ColourMapType::Jet);
        assert_eq!(
            ColourMapType::try_from(12).unwrap(),
            ColourMapType::MonochromeGreen
        );
        assert!(matches!(
            ColourMapType::try_from(13),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ColourMapType::try_from(-1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_serde_type() {
        assert_tokens(
            &ColourMapType::MonochromeBlue,
            &[Token::UnitVariant {
                name: "ColourMapType",
                variant: "monochrome_blue",
            }],
        );
        assert_tokens(
            &ColourOrder::Bgr,
            &[Token::UnitVariant {
                name: "ColourOrder",
                variant: "bgr",
            }],
        );
    }
}
