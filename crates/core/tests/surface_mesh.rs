use assert_approx_eq::assert_approx_eq;
use hexsurf::{
    ColourMap, ColourMapType, ColourOrder, Error, HexDirection, HexGeometry,
    HexGrid, HexagonalGrid, LinearScale, MeshStyle, Point2, SurfaceMesh,
};

/// Build a hex mesh with an identity scale and the default colour map
fn hex_mesh<G: HexGrid>(grid: &G, data: &[f32]) -> SurfaceMesh {
    SurfaceMesh::build_hexes(
        grid,
        data,
        &ColourMap::default(),
        &LinearScale::IDENTITY,
    )
    .unwrap()
}

/// Height of one of a cell's 7 vertices
fn vertex_height(mesh: &SurfaceMesh, cell: usize, vertex: usize) -> f32 {
    mesh.position(cell * 7 + vertex)[2]
}

/// A single row of cells, to make sure the builder works through the grid
/// trait and not just with the built-in grid
struct StripGrid {
    len: usize,
}

impl HexGrid for StripGrid {
    fn len(&self) -> usize {
        self.len
    }

    fn position(&self, index: usize) -> Point2 {
        Point2::new(index as f32, 0.0)
    }

    fn neighbour(
        &self,
        index: usize,
        direction: HexDirection,
    ) -> Option<usize> {
        match direction {
            HexDirection::East if index + 1 < self.len => Some(index + 1),
            HexDirection::West if index > 0 => Some(index - 1),
            _ => None,
        }
    }

    fn geometry(&self) -> HexGeometry {
        HexGeometry::from_spacing(1.0)
    }
}

#[test]
fn test_buffer_sizes() {
    for radius in &[0, 1, 4, 12] {
        let grid = HexagonalGrid::new(*radius, 0.5);
        let n = grid.len();
        let data = vec![0.25; n];
        let mesh = hex_mesh(&grid, &data);

        assert_eq!(mesh.positions().len(), 7 * n * 3);
        assert_eq!(mesh.normals().len(), 7 * n * 3);
        assert_eq!(mesh.colours().len(), 7 * n * 3);
        assert_eq!(mesh.indices().len(), 18 * n);
        assert!(mesh.indices().iter().all(|i| (*i as usize) < 7 * n));
    }
}

#[test]
fn test_normals_point_up() {
    let grid = HexagonalGrid::new(2, 1.0);
    let data: Vec<f32> = (0..grid.len()).map(|i| i as f32).collect();
    let mesh = hex_mesh(&grid, &data);
    for normal in mesh.normals().chunks_exact(3) {
        assert_eq!(normal, &[0.0, 0.0, 1.0]);
    }
}

#[test]
fn test_boundary_heights() {
    let grid = HexagonalGrid::new(1, 1.0);
    // Heights equal cell indexes
    let data: Vec<f32> = (0..7).map(|i| i as f32).collect();
    let mesh = hex_mesh(&grid, &data);

    let centre = grid.index_of(0, 0).unwrap();
    let east = grid.index_of(1, 0).unwrap();
    let south_west_of_east = grid.index_of(1, -1).unwrap();
    let north_east = grid.index_of(0, 1).unwrap();
    assert_eq!((centre, east), (3, 4));

    // Centre vertices are at the cell's own height
    assert_approx_eq!(vertex_height(&mesh, east, 0), 4.0);

    // The east cell has no neighbours to the NE or E, so its NE vertex stays
    // at its own height. Same for the SE vertex.
    assert_approx_eq!(vertex_height(&mesh, east, 1), 4.0);
    assert_approx_eq!(vertex_height(&mesh, east, 2), 4.0);

    // The S vertex only has the SW neighbour
    assert_approx_eq!(
        vertex_height(&mesh, east, 3),
        (4.0 + south_west_of_east as f32) / 2.0
    );

    // The SW vertex has both the W (centre) and SW neighbours
    assert_approx_eq!(
        vertex_height(&mesh, east, 4),
        (4.0 + centre as f32 + south_west_of_east as f32) / 3.0
    );

    // The centre cell's NE vertex is shared with the NE and E cells
    assert_approx_eq!(
        vertex_height(&mesh, centre, 1),
        (centre as f32 + north_east as f32 + east as f32) / 3.0
    );
}

#[test]
fn test_shared_vertices_match() {
    // Interior vertices are shared by three cells, so every copy of the same
    // vertex should end up at the same height
    let grid = HexagonalGrid::new(3, 1.0);
    let data: Vec<f32> =
        (0..grid.len()).map(|i| ((i * 37) % 11) as f32).collect();
    let mesh = hex_mesh(&grid, &data);

    let centre = grid.index_of(0, 0).unwrap();
    let east = grid.index_of(1, 0).unwrap();
    let north_east = grid.index_of(0, 1).unwrap();
    // Centre's NE vertex == east's NW vertex == north-east's S vertex
    let a = mesh.position(centre * 7 + 1);
    let b = mesh.position(east * 7 + 5);
    let c = mesh.position(north_east * 7 + 3);
    for i in 0..3 {
        assert_approx_eq!(a[i], b[i], 1e-5);
        assert_approx_eq!(a[i], c[i], 1e-5);
    }
}

#[test]
fn test_vertex_positions() {
    let grid = HexagonalGrid::new(1, 1.0);
    let data = vec![0.0; 7];
    let mesh = hex_mesh(&grid, &data);
    let geometry = grid.geometry();
    let east = grid.index_of(1, 0).unwrap();

    let ne = mesh.position(east * 7 + 1);
    assert_approx_eq!(ne[0], 1.0 + geometry.short_radius);
    assert_approx_eq!(ne[1], geometry.vertex_to_ne);
    let south = mesh.position(east * 7 + 3);
    assert_approx_eq!(south[0], 1.0);
    assert_approx_eq!(south[1], -geometry.long_radius);
}

#[test]
fn test_custom_grid() {
    let grid = StripGrid { len: 3 };
    let mesh = hex_mesh(&grid, &[0.0, 3.0, 9.0]);
    assert_eq!(mesh.vertex_count(), 21);

    // Middle cell: the NE vertex only has the E neighbour, the N vertex has no
    // neighbours at all
    assert_approx_eq!(vertex_height(&mesh, 1, 1), 6.0);
    assert_approx_eq!(vertex_height(&mesh, 1, 6), 3.0);
    // The NW vertex only has the W neighbour
    assert_approx_eq!(vertex_height(&mesh, 1, 5), 1.5);
}

#[test]
fn test_flat_colour_per_cell() {
    let grid = HexagonalGrid::new(1, 1.0);
    let data = vec![0.0, 0.125, 0.25, 0.375, 0.5, 0.75, 1.0];
    let colour_map = ColourMap::new(ColourMapType::Jet);
    let mesh = hex_mesh(&grid, &data);
    for (cell, datum) in data.iter().enumerate() {
        let expected = colour_map.convert_ordered(*datum);
        for vertex in 0..7 {
            assert_eq!(mesh.colour(cell * 7 + vertex), expected);
        }
    }
}

#[test]
fn test_colour_order() {
    let grid = HexagonalGrid::new(0, 1.0);
    let mut colour_map = ColourMap::new(ColourMapType::Jet);
    colour_map.set_order(ColourOrder::Bgr);
    let mesh = SurfaceMesh::build_hexes(
        &grid,
        &[0.0],
        &colour_map,
        &LinearScale::IDENTITY,
    )
    .unwrap();
    assert_eq!(mesh.colour(0), [0.5, 0.0, 0.0]);
}

#[test]
fn test_scale_clamps_colour_intensity() {
    let grid = HexagonalGrid::new(1, 1.0);
    let data = vec![-1.0, -0.4, 0.0, 0.2, 0.5, 1.0, 2.0];
    // Anything at or above -0.4 overflows the top of the range, anything
    // below -0.5 underflows
    let scale = LinearScale::new(1.0, 0.0, 10.0, 5.0);
    let colour_map = ColourMap::new(ColourMapType::Greyscale);
    let mesh =
        SurfaceMesh::build_hexes(&grid, &data, &colour_map, &scale).unwrap();

    assert_eq!(mesh.colour(0), [0.0, 0.0, 0.0]);
    for cell in 1..7 {
        assert_eq!(mesh.colour(cell * 7), [1.0, 1.0, 1.0]);
    }
    // Heights aren't clamped
    assert_approx_eq!(vertex_height(&mesh, 6, 0), 2.0);
}

#[test]
fn test_rebuild_is_identical() {
    let grid = HexagonalGrid::new(6, 0.3);
    let data: Vec<f32> =
        (0..grid.len()).map(|i| (i as f32 * 0.37).sin()).collect();
    let colour_map = ColourMap::new(ColourMapType::Plasma);
    let scale = LinearScale::new(0.5, 0.1, 0.5, 0.5);

    let first = SurfaceMesh::build(
        &grid,
        &data,
        &colour_map,
        &scale,
        MeshStyle::Hexes,
    )
    .unwrap();
    let second = SurfaceMesh::build(
        &grid,
        &data,
        &colour_map,
        &scale,
        MeshStyle::Hexes,
    )
    .unwrap();

    let bits = |values: &[f32]| -> Vec<u32> {
        values.iter().map(|v| v.to_bits()).collect()
    };
    assert_eq!(bits(first.positions()), bits(second.positions()));
    assert_eq!(bits(first.normals()), bits(second.normals()));
    assert_eq!(bits(first.colours()), bits(second.colours()));
    assert_eq!(first.indices(), second.indices());
}

#[test]
fn test_length_mismatch() {
    let grid = HexagonalGrid::new(2, 1.0);
    for style in &[MeshStyle::Hexes, MeshStyle::Triangles] {
        let result = SurfaceMesh::build(
            &grid,
            &[0.0; 18],
            &ColourMap::default(),
            &LinearScale::IDENTITY,
            *style,
        );
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

#[test]
fn test_triangle_style() {
    let grid = HexagonalGrid::new(1, 1.0);
    let data: Vec<f32> = (0..7).map(|i| i as f32).collect();
    let mesh = SurfaceMesh::build_triangles(
        &grid,
        &data,
        &ColourMap::default(),
        &LinearScale::IDENTITY,
    )
    .unwrap();

    // One vertex per cell, at the cell's height
    assert_eq!(mesh.vertex_count(), 7);
    for (cell, datum) in data.iter().enumerate() {
        let point = grid.position(cell);
        assert_eq!(mesh.position(cell), [point.x, point.y, *datum]);
    }

    // Seven points in a hexagon make six triangles, all counter-clockwise
    assert_eq!(mesh.triangle_count(), 6);
    for [a, b, c] in mesh.triangles() {
        let cross =
            (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        assert!(cross > 0.0);
    }
}

#[cfg(feature = "json")]
#[test]
fn test_to_json() {
    let grid = HexagonalGrid::new(1, 1.0);
    let data: Vec<f32> = (0..7).map(|i| i as f32 / 6.0).collect();
    let mesh = hex_mesh(&grid, &data);

    let json = mesh.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["positions"].as_array().unwrap().len(), 7 * 7 * 3);
    assert_eq!(value["indices"].as_array().unwrap().len(), 18 * 7);

    let parsed: SurfaceMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.indices(), mesh.indices());
    assert_eq!(parsed.vertex_count(), mesh.vertex_count());
}
