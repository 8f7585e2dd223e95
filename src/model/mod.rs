pub mod draw;
pub mod response;
