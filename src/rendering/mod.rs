pub mod camera;
pub mod palette;
pub mod sync;
pub mod visuals;
