pub mod finalize_raster;
