//! Error Types
//!
//! The library's fallible surface is small: animation playback treats an
//! unregistered clip name as a caller contract violation and panics (see
//! [`crate::animation::AnimationMixer::action`]), so [`StriderError`] only
//! covers operations that can genuinely fail at runtime.

use thiserror::Error;

/// The main error type for the Strider crate.
#[derive(Error, Debug)]
pub enum StriderError {
    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),
}

/// Alias for `Result<T, StriderError>`.
pub type Result<T> = std::result::Result<T, StriderError>;
