//! Error types for the ivy generator

use thiserror::Error;

/// Main error type for the crate
///
/// Growth itself never fails; a branch that finds no surface simply
/// produces no geometry. Errors only surface from the host-facing IO
/// helpers (settings files, mesh export).
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}
