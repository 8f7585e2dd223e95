pub mod draw;
pub mod selector;
