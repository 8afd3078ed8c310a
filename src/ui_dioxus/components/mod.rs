pub mod map_surface;

pub use map_surface::MapSurface;
