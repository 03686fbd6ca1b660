//! This module provides logic for rendering a surface as an STL. Only
//! available with the "stl" feature enabled.

use crate::{Result, SurfaceMesh};
use stl_io::{Normal, Triangle, Vertex};

/// Convert a mesh into STL triangle soup. STL only carries geometric data, so
/// colours are dropped. The mesh is Z-up and so is the STL.
pub fn mesh_to_triangles(mesh: &SurfaceMesh) -> Vec<Triangle> {
    // Readers recompute normals from the winding
    let normal = Normal::new([0.0, 0.0, 0.0]);
    mesh.triangles()
        .map(|[a, b, c]| Triangle {
            normal,
            vertices: [Vertex::new(a), Vertex::new(b), Vertex::new(c)],
        })
        .collect()
}

/// Serialize a mesh as a binary STL. An error here indicates a bug in the
/// mesh or in stl_io, since we're writing to memory.
pub fn mesh_to_stl(mesh: &SurfaceMesh) -> Result<Vec<u8>> {
    let triangles = mesh_to_triangles(mesh);
    let mut buffer = Vec::<u8>::new();
    stl_io::write_stl(&mut buffer, triangles.iter())?;
    Ok(buffer)
}
