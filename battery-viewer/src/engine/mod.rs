pub mod core;
pub mod loading;
pub mod materials;
pub mod orientation;
pub mod placement;
pub mod scene;
