pub mod finalize_raster;
pub mod iterate_grid;
pub mod render_raster;
pub mod sample_grid;
