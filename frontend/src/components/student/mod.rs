pub mod tracking;
pub mod upload;
