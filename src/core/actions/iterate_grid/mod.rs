pub mod iterate_grid;
pub mod iterate_grid_rayon;
pub mod iterate_point;
