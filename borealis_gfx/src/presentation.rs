//! Presentation parameters - device-creation-time description of the
//! back buffer and window surface
//!
//! Passed in when a graphics device is created and treated as read-only
//! input afterwards; framebuffer sizing reads the back-buffer extent from
//! here.

use raw_window_handle::RawWindowHandle;

/// Device-level settings blob carried inside [`PresentationParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Enable the backend's validation/debug layer
    pub enable_validation: bool,

    /// Prefer a vsync'd present mode (FIFO) over low-latency (MAILBOX)
    pub vsync: bool,

    /// Preferred number of back-buffer images (clamped to what the
    /// surface supports)
    pub preferred_image_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            vsync: true,
            preferred_image_count: 3,
        }
    }
}

/// Back-buffer and surface description supplied at device creation
///
/// The width and height are the authoritative framebuffer dimensions;
/// they are independent fields and are read independently everywhere
/// (see [`PresentationParameters::back_buffer_extent`]).
#[derive(Debug, Clone, Copy)]
pub struct PresentationParameters {
    /// Back-buffer width in pixels
    pub back_buffer_width: u32,

    /// Back-buffer height in pixels
    pub back_buffer_height: u32,

    /// Native window handle the surface was created from, if any
    pub window_handle: Option<RawWindowHandle>,

    /// Device-level settings
    pub settings: Settings,
}

impl PresentationParameters {
    /// Create presentation parameters for the given back-buffer size
    /// with default settings and no window handle
    pub fn new(back_buffer_width: u32, back_buffer_height: u32) -> Self {
        Self {
            back_buffer_width,
            back_buffer_height,
            window_handle: None,
            settings: Settings::default(),
        }
    }

    /// The back-buffer extent as (width, height)
    ///
    /// Each axis comes from its own field; callers sizing framebuffers
    /// must not substitute one for the other.
    pub fn back_buffer_extent(&self) -> (u32, u32) {
        (self.back_buffer_width, self.back_buffer_height)
    }
}

#[cfg(test)]
#[path = "presentation_tests.rs"]
mod tests;
