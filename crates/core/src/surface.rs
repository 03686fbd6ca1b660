use crate::{
    generate_field, timed, HexGrid, HexagonalGrid, Result, SurfaceConfig,
    SurfaceMesh, SurfaceRenderer,
};
use log::info;
use validator::Validate;

/// A demo surface: a hexagonal grid plus one generated datum per cell. This is
/// the quickest path from a [SurfaceConfig] to something renderable.
///
/// ```
/// use hexsurf::{Surface, SurfaceConfig};
///
/// let surface = Surface::generate(SurfaceConfig::default()).unwrap();
/// let mesh = surface.build_mesh().unwrap();
/// assert_eq!(mesh.vertex_count(), surface.data().len() * 7);
/// ```
#[derive(Clone, Debug)]
pub struct Surface {
    config: SurfaceConfig,
    grid: HexagonalGrid,
    data: Vec<f32>,
}

impl Surface {
    /// Build the grid and generate its data. Returns an error if the config
    /// is invalid.
    pub fn generate(config: SurfaceConfig) -> Result<Self> {
        config.validate()?;
        let grid = timed!("Grid initialization", {
            HexagonalGrid::from_config(&config.grid)
        });
        let data = generate_field(&grid, &config.field)?;
        info!("Generated surface with {} cells", grid.len());
        Ok(Self { config, grid, data })
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn grid(&self) -> &HexagonalGrid {
        &self.grid
    }

    /// One value per grid cell, in grid order
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Create a renderer from this surface's render config
    pub fn renderer(&self) -> Result<SurfaceRenderer> {
        SurfaceRenderer::new(self.config.render)
    }

    /// Build a mesh using this surface's render config
    pub fn build_mesh(&self) -> Result<SurfaceMesh> {
        self.renderer()?.build_mesh(&self.grid, &self.data)
    }
}
