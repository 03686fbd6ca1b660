//! Top-down SVG rendering of a surface. Only available with the "svg" feature
//! enabled.

use crate::{
    grid::HexGrid, render::mesh::check_len, util::unit::Point2, Result,
    SurfaceRenderer,
};
use svg::{
    node::{element::Polygon, Comment},
    Document,
};

/// Render the data over a grid as a 2D SVG, from a top-down perspective. Each
/// cell is drawn as a full hexagon in its flat colour. Heights are ignored.
///
/// SVG's Y axis points down, so the grid is flipped vertically to keep north
/// at the top of the image.
pub fn surface_to_svg<G: HexGrid + ?Sized>(
    grid: &G,
    data: &[f32],
    renderer: &SurfaceRenderer,
) -> Result<Document> {
    check_len(grid, data)?;

    let geometry = grid.geometry();
    // Offsets from a cell centre to each of its vertices, in SVG space
    let outline = [
        (0.0, -geometry.long_radius),
        (geometry.short_radius, -geometry.vertex_to_ne),
        (geometry.short_radius, geometry.vertex_to_ne),
        (0.0, geometry.long_radius),
        (-geometry.short_radius, geometry.vertex_to_ne),
        (-geometry.short_radius, -geometry.vertex_to_ne),
    ];

    let mut min = Point2::new(f32::INFINITY, f32::INFINITY);
    let mut max = Point2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
    let mut document = Document::new()
        .set("shape-rendering", "crispEdges")
        .add(Comment::new(format!("\n{:#?}\n", renderer.render_config())));

    for (index, datum) in data.iter().enumerate() {
        let centre = grid.position(index);
        let centre = Point2::new(centre.x, -centre.y);
        min = Point2::new(
            min.x.min(centre.x - geometry.short_radius),
            min.y.min(centre.y - geometry.long_radius),
        );
        max = Point2::new(
            max.x.max(centre.x + geometry.short_radius),
            max.y.max(centre.y + geometry.long_radius),
        );

        let points: Vec<(f32, f32)> = outline
            .iter()
            .map(|(dx, dy)| (centre.x + dx, centre.y + dy))
            .collect();
        document = document.add(
            Polygon::new()
                .set("points", points)
                .set("fill", renderer.cell_colour(*datum).to_html()),
        );
    }

    if grid.is_empty() {
        min = Point2::default();
        max = Point2::default();
    }
    Ok(document.set("viewBox", (min.x, min.y, max.x - min.x, max.y - min.y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColourMapType, Error, HexagonalGrid, RenderConfig};

    #[test]
    fn test_one_polygon_per_cell() {
        let grid = HexagonalGrid::new(2, 1.0);
        let data: Vec<f32> =
            (0..grid.len()).map(|i| i as f32 / 18.0).collect();
        let renderer = SurfaceRenderer::new(RenderConfig {
            colour_map: ColourMapType::Greyscale,
            ..Default::default()
        })
        .unwrap();

        let svg = surface_to_svg(&grid, &data, &renderer).unwrap().to_string();
        assert_eq!(svg.matches("<polygon").count(), 19);
        // First cell is black, last cell is white
        assert!(svg.contains("fill=\"#000000\""));
        assert!(svg.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_length_mismatch() {
        let grid = HexagonalGrid::new(1, 1.0);
        let renderer = SurfaceRenderer::new(RenderConfig::default()).unwrap();
        assert!(matches!(
            surface_to_svg(&grid, &[0.0; 3], &renderer),
            Err(Error::InvalidArgument(_))
        ));
    }
}
