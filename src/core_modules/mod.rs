pub mod pixel;
pub mod sample_grid;
pub mod smart_pixel;
