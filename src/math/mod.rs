//! Mathematical utilities

pub mod ray;

pub use ray::Ray;
