//! Conversion of a hex grid plus a scalar field into a triangle mesh.
//!
//! The main style is [MeshStyle::Hexes]: each cell becomes a fan of six
//! triangles around its centre. Seven vertices are emitted per cell, the centre
//! first, then the six boundary vertices clockwise starting from the NE
//! vertex:
//!
//! ```text
//!             6 (N)
//!            /     \
//!    5 (NW) /       \ 1 (NE)
//!          |    0    |
//!    4 (SW) \       / 2 (SE)
//!            \     /
//!             3 (S)
//! ```
//!
//! The centre sits at the cell's own height. Each boundary vertex is shared
//! with the two cells across the edges that meet there, so its height is the
//! mean of the own height and whichever of those two neighbours exist. That
//! keeps the surface continuous across cells, while every vertex of a fan gets
//! the cell's own colour so each hex reads as one flat colour.

use crate::{
    grid::{HexDirection, HexGrid},
    timed, ColourMap, Error, LinearScale, MeshStyle, Result,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// The normal used for every vertex. Surfaces are treated as flat terrain.
const UP: [f32; 3] = [0.0, 0.0, 1.0];

/// For each boundary vertex of a hex (in emit order), the offset from the
/// centre in units of `(short_radius, vertex_to_ne, long_radius)`, and the two
/// neighbours that share the vertex.
const BOUNDARY_VERTICES: [(BoundaryOffset, HexDirection, HexDirection); 6] = [
    (
        BoundaryOffset::Side { x: 1.0, y: 1.0 },
        HexDirection::NorthEast,
        HexDirection::East,
    ),
    (
        BoundaryOffset::Side { x: 1.0, y: -1.0 },
        HexDirection::East,
        HexDirection::SouthEast,
    ),
    (
        BoundaryOffset::Tip { y: -1.0 },
        HexDirection::SouthEast,
        HexDirection::SouthWest,
    ),
    (
        BoundaryOffset::Side { x: -1.0, y: -1.0 },
        HexDirection::West,
        HexDirection::SouthWest,
    ),
    (
        BoundaryOffset::Side { x: -1.0, y: 1.0 },
        HexDirection::NorthWest,
        HexDirection::West,
    ),
    (
        BoundaryOffset::Tip { y: 1.0 },
        HexDirection::NorthWest,
        HexDirection::NorthEast,
    ),
];

/// Where a boundary vertex sits relative to the centre
#[derive(Copy, Clone, Debug)]
enum BoundaryOffset {
    /// One of the four vertices at the ends of the vertical side edges
    Side { x: f32, y: f32 },
    /// The vertex directly above or below the centre
    Tip { y: f32 },
}

/// Fan triangles for one hex, relative to the cell's first vertex. All
/// triangles are counter-clockwise when viewed from +Z.
const FAN_INDICES: [[u32; 3]; 6] = [
    [1, 0, 2],
    [2, 0, 3],
    [3, 0, 4],
    [4, 0, 5],
    [5, 0, 6],
    [6, 0, 1],
];

const VERTICES_PER_HEX: usize = 7;

/// A renderable triangle mesh. All vertex attributes are flat buffers with 3
/// floats per vertex, index-aligned with each other. Indices come in groups of
/// 3 (one triangle each) and are 0-based into the vertex buffers.
///
/// Meshes are never updated in place. When the data or the scale changes,
/// build a new one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    positions: Vec<f32>,
    normals: Vec<f32>,
    colours: Vec<f32>,
    indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Build a mesh in the given style. Fails with [Error::InvalidArgument] if
    /// there isn't exactly one datum per grid cell.
    pub fn build<G: HexGrid + ?Sized>(
        grid: &G,
        data: &[f32],
        colour_map: &ColourMap,
        scale: &LinearScale,
        style: MeshStyle,
    ) -> Result<Self> {
        match style {
            MeshStyle::Hexes => Self::build_hexes(grid, data, colour_map, scale),
            MeshStyle::Triangles => {
                Self::build_triangles(grid, data, colour_map, scale)
            }
        }
    }

    /// Build a mesh with one 6-triangle fan per cell. See the module-level
    /// docs for the layout.
    pub fn build_hexes<G: HexGrid + ?Sized>(
        grid: &G,
        data: &[f32],
        colour_map: &ColourMap,
        scale: &LinearScale,
    ) -> Result<Self> {
        check_len(grid, data)?;
        let mesh = timed!("Hex mesh build", {
            let heights: Vec<f32> =
                data.iter().map(|datum| scale.height(*datum)).collect();
            let geometry = grid.geometry();
            let mut mesh = Self::with_capacity(
                grid.len() * VERTICES_PER_HEX,
                grid.len() * FAN_INDICES.len(),
            );

            for (index, (datum, height)) in
                data.iter().zip(heights.iter()).enumerate()
            {
                let centre = grid.position(index);
                let colour =
                    colour_map.convert_ordered(scale.intensity(*datum));
                let base = mesh.vertex_count() as u32;

                mesh.push_vertex([centre.x, centre.y, *height], colour);
                for (offset, dir_a, dir_b) in BOUNDARY_VERTICES.iter() {
                    let (x, y) = match offset {
                        BoundaryOffset::Side { x, y } => (
                            centre.x + x * geometry.short_radius,
                            centre.y + y * geometry.vertex_to_ne,
                        ),
                        BoundaryOffset::Tip { y } => {
                            (centre.x, centre.y + y * geometry.long_radius)
                        }
                    };
                    let z = boundary_height(
                        *height,
                        grid.neighbour(index, *dir_a).map(|i| heights[i]),
                        grid.neighbour(index, *dir_b).map(|i| heights[i]),
                    );
                    mesh.push_vertex([x, y, z], colour);
                }

                for triangle in FAN_INDICES.iter() {
                    mesh.indices.extend(triangle.iter().map(|i| base + i));
                }
            }
            mesh
        });

        debug!(
            "Built hex mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Build a mesh with one vertex per cell centre, connecting each cell to
    /// its eastern and north-eastern neighbours (and western and south-western
    /// neighbours) wherever both exist. Colours blend across triangles.
    pub fn build_triangles<G: HexGrid + ?Sized>(
        grid: &G,
        data: &[f32],
        colour_map: &ColourMap,
        scale: &LinearScale,
    ) -> Result<Self> {
        check_len(grid, data)?;
        let mesh = timed!("Triangle mesh build", {
            let mut mesh = Self::with_capacity(grid.len(), grid.len() * 2);
            for (index, datum) in data.iter().enumerate() {
                let centre = grid.position(index);
                mesh.push_vertex(
                    [centre.x, centre.y, scale.height(*datum)],
                    colour_map.convert_ordered(scale.intensity(*datum)),
                );
            }

            for index in 0..grid.len() {
                let pairs = [
                    (HexDirection::East, HexDirection::NorthEast),
                    (HexDirection::West, HexDirection::SouthWest),
                ];
                for (dir_a, dir_b) in pairs.iter() {
                    if let (Some(a), Some(b)) = (
                        grid.neighbour(index, *dir_a),
                        grid.neighbour(index, *dir_b),
                    ) {
                        mesh.indices.extend(&[index as u32, a as u32, b as u32]);
                    }
                }
            }
            mesh
        });

        debug!(
            "Built triangle mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
            colours: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    fn push_vertex(&mut self, position: [f32; 3], colour: [f32; 3]) {
        self.positions.extend(&position);
        self.normals.extend(&UP);
        self.colours.extend(&colour);
    }

    /// Flat vertex positions, `[x, y, z]` per vertex
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat vertex normals, `[x, y, z]` per vertex
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flat vertex colours, 3 channels per vertex in the colour map's
    /// configured order
    pub fn colours(&self) -> &[f32] {
        &self.colours
    }

    /// Triangle indices, 3 per triangle
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the position of a single vertex
    pub fn position(&self, vertex: usize) -> [f32; 3] {
        let i = vertex * 3;
        [
            self.positions[i],
            self.positions[i + 1],
            self.positions[i + 2],
        ]
    }

    /// Get the colour of a single vertex
    pub fn colour(&self, vertex: usize) -> [f32; 3] {
        let i = vertex * 3;
        [self.colours[i], self.colours[i + 1], self.colours[i + 2]]
    }

    /// Iterate over every triangle, as three vertex positions
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |triangle| {
            [
                self.position(triangle[0] as usize),
                self.position(triangle[1] as usize),
                self.position(triangle[2] as usize),
            ]
        })
    }

    /// Serialize the mesh buffers to JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| Error::Io(err.into()))
    }
}

/// Mean of the own height and the neighbour heights that exist
fn boundary_height(own: f32, a: Option<f32>, b: Option<f32>) -> f32 {
    match (a, b) {
        (Some(a), Some(b)) => (own + a + b) / 3.0,
        (Some(other), None) | (None, Some(other)) => (own + other) / 2.0,
        (None, None) => own,
    }
}

/// Make sure the scalar field has exactly one value per grid cell
pub(crate) fn check_len<G: HexGrid + ?Sized>(
    grid: &G,
    data: &[f32],
) -> Result<()> {
    if data.len() == grid.len() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "scalar field has {} values but the grid has {} cells",
            data.len(),
            grid.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_boundary_height() {
        assert_approx_eq!(boundary_height(3.0, None, None), 3.0);
        assert_approx_eq!(boundary_height(3.0, Some(1.0), None), 2.0);
        assert_approx_eq!(boundary_height(3.0, None, Some(5.0)), 4.0);
        assert_approx_eq!(boundary_height(3.0, Some(1.0), Some(2.0)), 2.0);
    }

    #[test]
    fn test_fan_winding() {
        // Unit hex with the boundary vertices at their real positions. Every
        // fan triangle should be counter-clockwise.
        let sr = 0.5f32;
        let vne = 0.5 / 3.0f32.sqrt();
        let lr = 1.0 / 3.0f32.sqrt();
        let points = [
            (0.0, 0.0),
            (sr, vne),
            (sr, -vne),
            (0.0, -lr),
            (-sr, -vne),
            (-sr, vne),
            (0.0, lr),
        ];
        for [a, b, c] in FAN_INDICES.iter() {
            let (ax, ay) = points[*a as usize];
            let (bx, by) = points[*b as usize];
            let (cx, cy) = points[*c as usize];
            let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
            assert!(cross > 0.0, "triangle {:?} is clockwise", [a, b, c]);
        }
    }
}
