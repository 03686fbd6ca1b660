use bevy::{
    asset::RenderAssetUsages,
    color::{Color, ColorToComponents, LinearRgba},
    mesh::Indices,
    prelude::{
        debug, default, error, info, resource_changed, App, Assets, Commands,
        Component, Entity, IntoScheduleConfigs, Mesh, Mesh3d, MeshMaterial3d,
        Plugin, Query, Res, ResMut, Resource, StandardMaterial, Startup,
        Transform, Update, With,
    },
    render::render_resource::PrimitiveTopology,
};
use hexsurf::{Surface, SurfaceConfig, SurfaceMesh, SurfaceRenderer};

pub struct SurfacePlugin;

impl Plugin for SurfacePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SurfaceConfig::default())
            .add_systems(Startup, init_surface)
            .add_systems(
                Update,
                update_surface.run_if(resource_changed::<SurfaceConfig>),
            );
    }
}

/// Marker for the single entity that holds the surface mesh. The camera
/// plugin drives its transform.
#[derive(Component, Debug)]
pub struct SurfaceModel;

/// The most recently generated surface. Only regenerated when the grid or
/// field config changes, render-only changes reuse the data.
#[derive(Resource)]
struct CurrentSurface(Surface);

/// Spawn the (empty) surface entity. The mesh gets attached once the config
/// is first processed.
fn init_surface(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Vertex colours carry all the information, so skip lighting
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    commands.spawn((
        SurfaceModel,
        MeshMaterial3d(material),
        Transform::default(),
    ));
}

/// Regenerate the data and/or rebuild the mesh whenever the config changes.
/// The whole mesh is rebuilt every time.
fn update_surface(
    mut commands: Commands,
    config: Res<SurfaceConfig>,
    current: Option<Res<CurrentSurface>>,
    model_query: Query<Entity, With<SurfaceModel>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let config = *config;

    // Reuse the old data if only the render config changed
    let regenerate = match &current {
        Some(current) => {
            let old = current.0.config();
            old.grid != config.grid || old.field != config.field
        }
        None => true,
    };
    let new_surface = if regenerate {
        info!("Generating surface");
        match Surface::generate(config) {
            Ok(surface) => Some(surface),
            Err(err) => {
                error!("Invalid surface config: {err}");
                return;
            }
        }
    } else {
        None
    };
    let surface = match (&new_surface, &current) {
        (Some(surface), _) => surface,
        (None, Some(current)) => &current.0,
        // Unreachable: we always regenerate when there's no current surface
        (None, None) => return,
    };

    let renderer = match SurfaceRenderer::new(config.render) {
        Ok(renderer) => renderer,
        Err(err) => {
            error!("Invalid render config: {err}");
            return;
        }
    };
    let surface_mesh = match renderer.build_mesh(surface.grid(), surface.data())
    {
        Ok(surface_mesh) => surface_mesh,
        Err(err) => {
            error!("Error building surface mesh: {err}");
            return;
        }
    };
    debug!(
        "Uploading mesh with {} vertices and {} triangles",
        surface_mesh.vertex_count(),
        surface_mesh.triangle_count()
    );
    let mesh_handle = meshes.add(to_bevy_mesh(&surface_mesh));
    for entity in model_query.iter() {
        commands.entity(entity).insert(Mesh3d(mesh_handle.clone()));
    }

    if let Some(surface) = new_surface {
        commands.insert_resource(CurrentSurface(surface));
    }
}

/// Copy the mesh buffers into a bevy mesh. Colour map output is treated as
/// sRGB, bevy wants linear vertex colours.
fn to_bevy_mesh(surface_mesh: &SurfaceMesh) -> Mesh {
    let positions: Vec<[f32; 3]> = surface_mesh
        .positions()
        .chunks_exact(3)
        .map(|p| [p[0], p[1], p[2]])
        .collect();
    let normals: Vec<[f32; 3]> = surface_mesh
        .normals()
        .chunks_exact(3)
        .map(|n| [n[0], n[1], n[2]])
        .collect();
    let colours: Vec<[f32; 4]> = surface_mesh
        .colours()
        .chunks_exact(3)
        .map(|c| LinearRgba::from(Color::srgb(c[0], c[1], c[2])).to_f32_array())
        .collect();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colours)
    .with_inserted_indices(Indices::U32(surface_mesh.indices().to_vec()))
}
