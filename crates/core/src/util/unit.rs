use crate::{ColourOrder, NumRange};
use derive_more::{Add, Display, From, Into, Mul, Sub};
use serde::{Deserialize, Serialize};
use std::ops;

/// A 2D point in grid space, i.e. on the plane `z = 0` before any height is
/// applied.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Add,
    Sub,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An RGB colour. Values are stored as floats, nominally between 0 and 1
/// (inclusive). Colour maps are allowed to produce anything though, so no
/// range check happens on construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Colour {
    /// The valid range of values for each component in RGB
    const COMPONENT_RANGE: NumRange<f32> = NumRange::new(0.0, 1.0);

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Convert this colour to a set of 3 bytes: `(red, green, blue)`. Each
    /// component is clamped to [0,1] first.
    pub fn to_ints(self) -> (u8, u8, u8) {
        let to_int = |component: f32| {
            (Self::COMPONENT_RANGE.clamp(component) * 255.0).round() as u8
        };
        (to_int(self.red), to_int(self.green), to_int(self.blue))
    }

    /// Convert this colour to an HTML colour code: `#rrggbb`
    pub fn to_html(self) -> String {
        let (r, g, b) = self.to_ints();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Get the three channels, in the requested order
    pub fn to_array(self, order: ColourOrder) -> [f32; 3] {
        match order {
            ColourOrder::Rgb => [self.red, self.green, self.blue],
            ColourOrder::Bgr => [self.blue, self.green, self.red],
        }
    }
}

impl From<[f32; 3]> for Colour {
    fn from([red, green, blue]: [f32; 3]) -> Self {
        Self { red, green, blue }
    }
}

// Scale a colour by a constant. Used for blending between two table stops
impl ops::Mul<f32> for Colour {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.red * rhs, self.green * rhs, self.blue * rhs)
    }
}

impl ops::Add for Colour {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.red + rhs.red,
            self.green + rhs.green,
            self.blue + rhs.blue,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html() {
        assert_eq!(Colour::BLACK.to_html(), "#000000");
        assert_eq!(Colour::WHITE.to_html(), "#ffffff");
        assert_eq!(Colour::new(0.0784, 0.302, 0.639).to_html(), "#144da3");
        // Out of range components get clamped
        assert_eq!(Colour::new(1.5, -0.5, 0.0).to_html(), "#ff0000");
    }

    #[test]
    fn test_to_array() {
        let colour = Colour::new(0.1, 0.2, 0.3);
        assert_eq!(colour.to_array(ColourOrder::Rgb), [0.1, 0.2, 0.3]);
        assert_eq!(colour.to_array(ColourOrder::Bgr), [0.3, 0.2, 0.1]);
    }
}
