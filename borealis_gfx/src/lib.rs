/*!
# Borealis Graphics Layer

Core vocabulary and ambient services for the Borealis graphics backends.

This crate defines the backend-agnostic pieces shared by the native
backends: the error and logging systems, presentation parameters, the
render-pass data model, the command-list vocabulary (viewports,
topologies, clear values, shader stages) and the shader-constant-buffer
layouts.

Backend crates are deliberately independent of each other:

- `borealis_gfx_renderer_vulkan` — render-target setup (render pass +
  per-swapchain-image framebuffers) over ash.
- `borealis_gfx_renderer_d3d11` — immediate command-list façade over a
  Direct3D 11 device context (Windows only).

There is no trait that unifies the two; they share only the types in this
crate.
*/

// Internal modules
mod command;
mod constants;
mod error;
mod presentation;
mod render_pass;
pub mod log;

// Main borealis namespace module
pub mod borealis {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: gfx_* macros are NOT re-exported here - they live at the crate root
    }

    // Render sub-module with all rendering vocabulary
    pub mod render {
        pub use crate::command::*;
        pub use crate::presentation::*;
        pub use crate::render_pass::*;
    }

    // Shader constant-buffer layouts
    pub mod constants {
        pub use crate::constants::*;
    }
}

// Re-export math library at crate root
pub use glam;
