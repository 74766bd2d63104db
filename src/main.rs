//! Prim - weld a generated triangle soup and report the result

use prim::config::AppConfig;
use prim::soup::SoupBuilder;
use prim::weld::{self, position_bytes};

fn main() {
    // Configuration first so the log level can come from it
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Prim");

    let grid = &config.grid;
    let soup = SoupBuilder::with_capacity(grid.cols * grid.rows * 2)
        .add_grid(grid.cols, grid.rows, grid.cell_size)
        .build();
    log::info!(
        "Generated {}x{} grid: {} triangles, {} corners",
        grid.cols,
        grid.rows,
        soup.len(),
        soup.len() * 3
    );

    let mesh = weld::weld(&soup);
    let positions = mesh.positions();
    log::info!(
        "Welded mesh: {} vertices, {} faces, {} bytes of positions",
        mesh.vertex_count(),
        mesh.face_count(),
        position_bytes(&positions).len()
    );

    match mesh.indices_u32() {
        Some(indices) => log::info!("Index buffer: {} u32 indices", indices.len()),
        None => log::warn!("Mesh has too many vertices for a u32 index buffer"),
    }

    if config.weld.compute_normals {
        let normals = mesh.face_normals();
        let degenerate = normals.iter().filter(|n| n.self_dot() == 0.0).count();
        log::info!(
            "Computed {} face normals ({} degenerate)",
            normals.len(),
            degenerate
        );
        if let Some(first) = normals.first() {
            log::debug!("First face normal: {}", first);
        }
    }
}
