// Dioxus UI module - the page shell and its Leaflet host
pub mod app;
pub mod assets;
pub mod components;
pub mod leaflet;
pub mod views;


pub use app::App;
