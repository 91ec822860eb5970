pub mod evenly_spaced;
pub mod normalized_iteration;
pub mod pixel_to_plane_coords;
