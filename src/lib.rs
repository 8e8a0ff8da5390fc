//! Ivygen - procedural surface-following ivy growth and strip meshing

pub mod core;
pub mod math;
pub mod surface;
pub mod growth;
pub mod mesh;
pub mod leaf;
