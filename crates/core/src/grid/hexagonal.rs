use crate::{
    grid::{HexDirection, HexGeometry, HexGrid},
    util::{hexagon_len, unit::Point2},
    GridConfig,
};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::info;

/// Axial coordinates of a cell. `q` counts columns (rightward along a row)
/// and `r` counts rows (upward). The third cube coordinate is implied by
/// `q + r + s = 0`, see
/// <https://www.redblobgames.com/grids/hexagons/#coordinates-axial>.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
struct Axial {
    q: i32,
    r: i32,
}

impl Axial {
    fn adjacent(self, direction: HexDirection) -> Self {
        let (dq, dr) = match direction {
            HexDirection::East => (1, 0),
            HexDirection::NorthEast => (0, 1),
            HexDirection::NorthWest => (-1, 1),
            HexDirection::West => (-1, 0),
            HexDirection::SouthWest => (0, -1),
            HexDirection::SouthEast => (1, -1),
        };
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }
}

/// A hexagon-shaped region of hexagonal cells, centred on the origin. A grid
/// of radius `r` has a ring of `r` cells around the centre cell in every
/// direction, for a total of `3r² + 3r + 1` cells.
///
/// Cells are ordered row by row, starting at the bottom row and moving up, and
/// west to east within each row.
#[derive(Clone, Debug)]
pub struct HexagonalGrid {
    radius: u16,
    geometry: HexGeometry,
    /// Every cell, in index order. The ordering lets us map coordinates back
    /// to indexes in constant time.
    cells: IndexSet<Axial, FnvBuildHasher>,
    positions: Vec<Point2>,
}

impl HexagonalGrid {
    /// Build a new grid with the given radius (in cells) and the given
    /// centre-to-centre distance between adjacent cells.
    pub fn new(radius: u16, hex_spacing: f32) -> Self {
        let radius_i = i32::from(radius);
        let mut cells = IndexSet::with_capacity_and_hasher(
            hexagon_len(radius),
            FnvBuildHasher::default(),
        );
        for r in -radius_i..=radius_i {
            let q_min = (-radius_i).max(-r - radius_i);
            let q_max = radius_i.min(-r + radius_i);
            for q in q_min..=q_max {
                cells.insert(Axial { q, r });
            }
        }

        let row_height = hex_spacing * 3.0f32.sqrt() / 2.0;
        let positions = cells
            .iter()
            .map(|cell| {
                Point2::new(
                    hex_spacing * (cell.q as f32 + cell.r as f32 / 2.0),
                    row_height * cell.r as f32,
                )
            })
            .collect();

        info!(
            "Built hexagonal grid with radius {} ({} cells)",
            radius,
            cells.len()
        );
        Self {
            radius,
            geometry: HexGeometry::from_spacing(hex_spacing),
            cells,
            positions,
        }
    }

    /// Build a grid from its config
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.radius, config.hex_spacing)
    }

    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// Get the index of the cell at the given axial coordinates, if it's in
    /// the grid.
    pub fn index_of(&self, q: i32, r: i32) -> Option<usize> {
        self.cells.get_index_of(&Axial { q, r })
    }

    /// Get the axial coordinates `(q, r)` of a cell
    pub fn coordinates(&self, index: usize) -> Option<(i32, i32)> {
        self.cells.get_index(index).map(|cell| (cell.q, cell.r))
    }

    /// All cell centre positions, in index order
    pub fn positions(&self) -> &[Point2] {
        &self.positions
    }
}

impl HexGrid for HexagonalGrid {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn position(&self, index: usize) -> Point2 {
        self.positions[index]
    }

    fn neighbour(
        &self,
        index: usize,
        direction: HexDirection,
    ) -> Option<usize> {
        let cell = self.cells.get_index(index)?;
        self.cells.get_index_of(&cell.adjacent(direction))
    }

    fn geometry(&self) -> HexGeometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cell_count() {
        for radius in 0..6 {
            let grid = HexagonalGrid::new(radius, 1.0);
            assert_eq!(grid.len(), hexagon_len(radius));
        }
    }

    #[test]
    fn test_ordering() {
        let grid = HexagonalGrid::new(1, 1.0);
        // Bottom row first, then the middle row, then the top row
        let coords: Vec<_> =
            (0..grid.len()).filter_map(|i| grid.coordinates(i)).collect();
        assert_eq!(
            coords,
            vec![(0, -1), (1, -1), (-1, 0), (0, 0), (1, 0), (-1, 1), (0, 1)]
        );
        for i in 1..grid.len() {
            let previous = grid.position(i - 1);
            let current = grid.position(i);
            assert!(
                previous.y < current.y
                    || (previous.y == current.y && previous.x < current.x)
            );
        }
    }

    #[test]
    fn test_positions() {
        let grid = HexagonalGrid::new(1, 2.0);
        let centre = grid.position(grid.index_of(0, 0).unwrap());
        assert_approx_eq!(centre.x, 0.0);
        assert_approx_eq!(centre.y, 0.0);

        // Every neighbour of the centre is exactly one spacing away
        for direction in HexDirection::iter() {
            let index = grid.neighbour(3, direction).unwrap();
            let point = grid.position(index);
            assert_approx_eq!((point.x.powi(2) + point.y.powi(2)).sqrt(), 2.0);
        }

        let north_east = grid.position(grid.index_of(0, 1).unwrap());
        assert_approx_eq!(north_east.x, 1.0);
        assert_approx_eq!(north_east.y, 3.0f32.sqrt());
    }

    #[test]
    fn test_neighbours() {
        let grid = HexagonalGrid::new(2, 1.0);
        let centre = grid.index_of(0, 0).unwrap();
        for direction in HexDirection::iter() {
            assert!(grid.neighbour(centre, direction).is_some());
        }

        // The east-most cell in the middle row has nothing to its east
        let east_edge = grid.index_of(2, 0).unwrap();
        assert_eq!(grid.neighbour(east_edge, HexDirection::East), None);
        assert_eq!(grid.neighbour(east_edge, HexDirection::NorthEast), None);
        assert_eq!(grid.neighbour(east_edge, HexDirection::SouthEast), None);
        assert_eq!(
            grid.neighbour(east_edge, HexDirection::West),
            grid.index_of(1, 0)
        );
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let grid = HexagonalGrid::new(3, 1.0);
        for index in 0..grid.len() {
            for direction in HexDirection::iter() {
                if let Some(other) = grid.neighbour(index, direction) {
                    assert_eq!(
                        grid.neighbour(other, direction.opposite()),
                        Some(index)
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let grid = HexagonalGrid::new(0, 1.0);
        assert_eq!(grid.len(), 1);
        for direction in HexDirection::iter() {
            assert_eq!(grid.neighbour(0, direction), None);
        }
    }
}
