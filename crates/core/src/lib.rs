//! Hexsurf renders scalar data defined over a hexagonal grid as a
//! colour-mapped 3D surface. This crate contains the core logic: colour maps,
//! hex grids, mesh building and the camera state of an interactive viewer.
//! Presentation layers (windowing, GPU upload) are implemented elsewhere.
//!
//! ```
//! use hexsurf::{HexagonalGrid, RenderConfig, SurfaceRenderer};
//!
//! let grid = HexagonalGrid::new(10, 0.1);
//! let data: Vec<f32> = (0..331).map(|i| i as f32 / 330.0).collect();
//! let renderer = SurfaceRenderer::new(RenderConfig::default()).unwrap();
//! let mesh = renderer.build_mesh(&grid, &data).unwrap();
//! assert_eq!(mesh.vertex_count(), 7 * 331);
//! // From here you can upload the mesh buffers however you like.
//! ```
//!
//! See [RenderConfig] for details on how rendering can be customized, and
//! [SurfaceConfig] for a complete description of a demo surface.

mod colour;
mod config;
mod error;
mod field;
mod grid;
mod render;
mod surface;
mod util;
mod viewer;

pub use crate::{
    colour::{hsv_to_rgb, ColourMap, ColourMapType, ColourOrder},
    config::{FieldConfig, GridConfig, SurfaceConfig},
    error::{Error, Result},
    field::{generate_field, NoiseField},
    grid::{HexDirection, HexGeometry, HexGrid, HexagonalGrid},
    render::{
        config::{MeshStyle, RenderConfig},
        mesh::SurfaceMesh,
        scale::LinearScale,
        SurfaceRenderer,
    },
    surface::Surface,
    util::{
        hexagon_len,
        range::{NumRange, RangeValue, Rangeable},
        unit::{Colour, Point2},
    },
    viewer::{InputEvent, ViewerButton, ViewerKey, ViewerState},
};
