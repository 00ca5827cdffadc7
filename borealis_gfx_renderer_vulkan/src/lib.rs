/*!
# Borealis Graphics Layer - Vulkan Backend

Vulkan implementation of the Borealis render-target path.

This crate owns device/instance bring-up (via the Ash bindings and
gpu-allocator), the swapchain, and the render-target setup component:
the presentation render pass plus the per-swapchain-image framebuffer
array that every draw targeting the window needs.

The backend shares only vocabulary types with `borealis_gfx`; it is not
abstracted together with the Direct3D 11 backend.
*/

// Vulkan implementation modules
mod debug;
mod vulkan;
mod vulkan_format;
mod vulkan_render_target_setup;
mod vulkan_swapchain;

pub use vulkan::VulkanGraphicsDevice;
pub use vulkan_render_target_setup::RenderTargetSetup;
pub use vulkan_swapchain::VulkanSwapchain;
