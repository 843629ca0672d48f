pub mod render;
pub mod scroll;
pub mod template;
pub mod web;
