pub mod cache;
pub mod compositor;
pub mod config;
pub mod consts;
pub mod error;
pub mod event;
pub mod geometry;
pub mod image_source;
pub mod pan;
pub mod transform;
pub mod viewer;
pub mod viewport;
