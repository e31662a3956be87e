pub mod info;
pub mod render;
