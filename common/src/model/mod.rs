pub mod application;
pub mod branch;
pub mod funds;
pub mod notification;
