pub mod grid;
pub mod html;
pub mod map;
