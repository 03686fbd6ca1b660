pub mod config;
pub mod mesh;
pub mod scale;
#[cfg(feature = "stl")]
pub mod stl;
#[cfg(feature = "svg")]
pub mod svg;

use crate::{
    grid::HexGrid, util::unit::Colour, ColourMap, RenderConfig, Result,
    SurfaceMesh,
};
use log::warn;
use validator::Validate;

/// A surface renderer is used to convert a grid plus scalar data into various
/// visual output formats. A renderer is created using a particular
/// [RenderConfig], and from there can be used to render any number of data
/// sets any number of times.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new renderer.
///
/// ## Supported Formats
/// - Triangle mesh buffers, for uploading to a GPU (see [SurfaceMesh])
/// - STL (3D, no colours)
/// - SVG (2D top-down, flat colours)
#[derive(Clone, Debug)]
pub struct SurfaceRenderer {
    render_config: RenderConfig,
    colour_map: ColourMap,
}

impl SurfaceRenderer {
    /// Initialize a new renderer with the given options. Returns an error if
    /// the render config is invalid.
    pub fn new(render_config: RenderConfig) -> Result<Self> {
        render_config.validate()?;

        let mut colour_map = ColourMap::new(render_config.colour_map);
        colour_map.set_order(render_config.colour_order);
        if render_config.colour_map.accepts_hue() {
            colour_map.set_hue(render_config.hue)?;
        } else if render_config.hue != 0.0 {
            warn!(
                "Colour map {} has a fixed hue, ignoring configured hue {}",
                render_config.colour_map, render_config.hue
            );
        }

        Ok(Self {
            render_config,
            colour_map,
        })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    pub fn colour_map(&self) -> &ColourMap {
        &self.colour_map
    }

    /// Build a triangle mesh of the data over the grid, in the configured mesh
    /// style. Fails if the data doesn't have exactly one value per cell.
    pub fn build_mesh<G: HexGrid + ?Sized>(
        &self,
        grid: &G,
        data: &[f32],
    ) -> Result<SurfaceMesh> {
        SurfaceMesh::build(
            grid,
            data,
            &self.colour_map,
            &self.render_config.scale,
            self.render_config.mesh_style,
        )
    }

    /// Compute the flat colour of a single cell from its datum. This is the
    /// same colour the hex mesh gives all of the cell's vertices, but always
    /// in RGB order.
    pub fn cell_colour(&self, datum: f32) -> Colour {
        self.colour_map
            .convert(self.render_config.scale.intensity(datum))
    }

    /// Get the height of a cell's centre from its datum
    pub fn cell_height(&self, datum: f32) -> f32 {
        self.render_config.scale.height(datum)
    }

    /// Render the data as a 2D SVG, from a top-down perspective. Returns the
    /// SVG in a string.
    #[cfg(feature = "svg")]
    pub fn render_as_svg<G: HexGrid + ?Sized>(
        &self,
        grid: &G,
        data: &[f32],
    ) -> Result<String> {
        let document = svg::surface_to_svg(grid, data, self)?;
        Ok(document.to_string())
    }

    /// Render the data into a binary STL model.
    #[cfg(feature = "stl")]
    pub fn render_as_stl<G: HexGrid + ?Sized>(
        &self,
        grid: &G,
        data: &[f32],
    ) -> Result<Vec<u8>> {
        let mesh = self.build_mesh(grid, data)?;
        stl::mesh_to_stl(&mesh)
    }
}
