//! Error types for the Borealis graphics layer
//!
//! This module defines the error types used throughout the graphics
//! layer, covering argument validation, backend failures, and
//! initialization.

use std::fmt;

/// Result type for Borealis graphics operations
pub type Result<T> = std::result::Result<T, Error>;

/// Borealis graphics errors
#[derive(Debug, Clone)]
pub enum Error {
    /// An argument failed validation before any native call was issued
    /// (e.g. clearing a null render target)
    InvalidArgument(String),

    /// Backend-specific error (Vulkan, Direct3D 11, etc.)
    ///
    /// Native device failures are fatal at this layer and propagate to
    /// the caller; recovery (swapchain-lost handling and the like) is a
    /// caller responsibility.
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Initialization failed (device, swapchain, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
