pub mod access;
pub mod app;
