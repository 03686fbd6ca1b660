//! Hex grids, and the accessor interface that the mesh builder reads them
//! through.
//!
//! ## Layout
//!
//! All grids are made of **pointy-top** hexagons lying on the `z = 0` plane.
//! Given the distance `d` between the centres of two adjacent hexes, each hex
//! has a vertex straight above and below its centre, and a vertical edge on
//! each side:
//!
//! ```text
//!               N
//!              / \
//!          NW /   \ NE
//!            |  c  |
//!          SW \   / SE
//!              \ /
//!               S
//! ```
//!
//! - [HexGeometry::short_radius] (`d/2`) is the horizontal distance from the
//!   centre to the side edges
//! - [HexGeometry::vertex_to_ne] (`d/(2√3)`) is the vertical distance from the
//!   centre to the NE/NW/SE/SW vertices
//! - [HexGeometry::long_radius] (`d/√3`) is the distance from the centre to
//!   the N/S vertices
//!
//! Each hex has six neighbours, one across each edge. See [HexDirection].

mod hexagonal;

pub use hexagonal::HexagonalGrid;

use crate::util::unit::Point2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the six directions from a hex to its neighbours. Each neighbour sits
/// across one of the hex's edges.
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
pub enum HexDirection {
    /// Same row, one step to the right
    East,
    /// Row above, half a step to the right
    NorthEast,
    /// Row above, half a step to the left
    NorthWest,
    /// Same row, one step to the left
    West,
    /// Row below, half a step to the left
    SouthWest,
    /// Row below, half a step to the right
    SouthEast,
}

impl HexDirection {
    /// The direction pointing back the other way. Adjacency is expected to be
    /// symmetric: if B is A's neighbour in direction `dir`, then A is B's
    /// neighbour in `dir.opposite()`.
    pub fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::West => Self::East,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
        }
    }
}

/// Fixed geometric constants of a hex layout. See the module-level docs for a
/// picture.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexGeometry {
    /// Horizontal distance from a hex's centre to its side edges
    pub short_radius: f32,
    /// Vertical distance from a hex's centre to its NE (and NW/SE/SW) vertex
    pub vertex_to_ne: f32,
    /// Distance from a hex's centre to its N and S vertices
    pub long_radius: f32,
}

impl HexGeometry {
    /// Derive the geometry from the centre-to-centre distance between two
    /// adjacent hexes
    pub fn from_spacing(hex_spacing: f32) -> Self {
        let sqrt_3 = 3.0f32.sqrt();
        Self {
            short_radius: hex_spacing / 2.0,
            vertex_to_ne: hex_spacing / (2.0 * sqrt_3),
            long_radius: hex_spacing / sqrt_3,
        }
    }
}

/// Read access to a hex grid. This is everything the mesh builder needs to
/// know about a grid, so any grid type can be rendered by implementing this.
///
/// Cells are indexed `0..len()`, and that ordering is the one that scalar
/// fields are aligned to.
pub trait HexGrid {
    /// Number of cells in the grid
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Planar coordinates of a cell's centre
    fn position(&self, index: usize) -> Point2;

    /// Index of the neighbour of a cell in the given direction, or `None` if
    /// the cell is on the edge of the grid in that direction. Any returned
    /// index must be in `0..len()`.
    fn neighbour(&self, index: usize, direction: HexDirection)
        -> Option<usize>;

    /// Layout constants shared by every cell in the grid
    fn geometry(&self) -> HexGeometry;
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_geometry_from_spacing() {
        let geometry = HexGeometry::from_spacing(1.0);
        assert_approx_eq!(geometry.short_radius, 0.5);
        assert_approx_eq!(geometry.vertex_to_ne, 0.288_675_13);
        assert_approx_eq!(geometry.long_radius, 0.577_350_26);
        // The N vertex is twice as far up as the NE vertex
        assert_approx_eq!(geometry.long_radius, geometry.vertex_to_ne * 2.0);
    }

    #[test]
    fn test_opposite() {
        for direction in HexDirection::iter() {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}
