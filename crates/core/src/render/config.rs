use crate::{ColourMapType, ColourOrder, LinearScale};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// Configuration specific to visually rendering a surface. These options have
/// no bearing on the grid or the data over it, only on how it's presented.
///
/// Not all render options apply to all output formats, e.g. `mesh_style` is
/// irrelevant for SVG, which always draws whole hexes. The documentation for
/// each field lists which formats it applies to.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::prelude::Resource))]
#[serde(default)]
pub struct RenderConfig {
    /// The colour scheme used to convert each cell's colour intensity into
    /// a colour.
    ///
    /// ## Relevant Formats
    /// - Mesh (3D viewer, JSON)
    /// - SVG
    pub colour_map: ColourMapType,

    /// Hue of the colour map, as a fraction of the hue circle. Only schemes
    /// that take a hue use this (monochrome, greyscale). The fixed-hue
    /// monochrome schemes ignore it.
    ///
    /// ## Relevant Formats
    /// - Mesh (3D viewer, JSON)
    /// - SVG
    #[validate(range(min = 0.0, max = 1.0))]
    pub hue: f32,

    /// Order of the channels in the vertex colour buffer. Some GPU pipelines
    /// want BGR.
    ///
    /// ## Relevant Formats
    /// - Mesh (3D viewer, JSON)
    pub colour_order: ColourOrder,

    /// How the grid is triangulated
    ///
    /// ## Relevant Formats
    /// - Mesh (3D viewer, JSON)
    /// - STL
    pub mesh_style: MeshStyle,

    /// Transforms from data values to heights and colour intensities. This
    /// serializes as a table, so it stays the last field.
    ///
    /// ## Relevant Formats
    /// - All
    pub scale: LinearScale,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colour_map: ColourMapType::Viridis,
            hue: 0.0,
            colour_order: ColourOrder::Rgb,
            mesh_style: MeshStyle::Hexes,
            scale: LinearScale::new(0.5, 0.0, 1.0, 0.0),
        }
    }
}

/// The different ways a grid can be turned into triangles
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MeshStyle {
    /// Each cell is a fan of 6 triangles around its centre. Boundary heights
    /// are averaged with the neighbouring cells, while the colour is flat
    /// across each cell.
    Hexes,
    /// One vertex per cell centre, joined to its neighbours. Much lighter,
    /// but colours blend across cells.
    Triangles,
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self::Hexes
    }
}
