//! VulkanSwapchain - surface, swapchain, and the ordered image-view array
//!
//! Completely separated from render-pass logic. The image-view array
//! preserves swapchain image order: index *i* always refers to swapchain
//! image *i*, which the render-target setup relies on when pairing
//! framebuffers with images.

use ash::vk;
use borealis_gfx::borealis::render::{Settings, TextureFormat};
use borealis_gfx::borealis::{Error, Result};
use borealis_gfx::{gfx_debug, gfx_error, gfx_warn};
use std::sync::Arc;

use crate::vulkan_format::format_from_vk;

/// Vulkan swapchain implementation
///
/// Owns the surface, the swapchain, and one image view per swapchain
/// image. Destroyed explicitly by the owning device (or on Drop).
pub struct VulkanSwapchain {
    /// Vulkan device
    device: Arc<ash::Device>,
    /// Physical device for capability queries
    physical_device: vk::PhysicalDevice,

    /// Surface
    surface: vk::SurfaceKHR,
    surface_loader: ash::khr::surface::Instance,

    /// Swapchain
    swapchain: vk::SwapchainKHR,
    swapchain_loader: ash::khr::swapchain::Device,
    swapchain_images: Vec<vk::Image>,
    swapchain_image_views: Vec<vk::ImageView>,
    color_format: TextureFormat,
    extent: vk::Extent2D,

    /// Settings the swapchain was negotiated with (present mode, image count)
    settings: Settings,
}

impl VulkanSwapchain {
    /// Create a new swapchain over an existing surface
    ///
    /// # Arguments
    ///
    /// * `device` - Vulkan logical device
    /// * `physical_device` - Vulkan physical device
    /// * `instance` - Vulkan instance (for the swapchain loader)
    /// * `surface` - Window surface (ownership transfers to the swapchain)
    /// * `surface_loader` - Surface loader
    /// * `settings` - Present-mode / image-count preferences
    /// * `width` - Requested width (used when the surface reports no fixed extent)
    /// * `height` - Requested height
    pub fn new(
        device: Arc<ash::Device>,
        physical_device: vk::PhysicalDevice,
        instance: &ash::Instance,
        surface: vk::SurfaceKHR,
        surface_loader: ash::khr::surface::Instance,
        settings: Settings,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let swapchain_loader = ash::khr::swapchain::Device::new(instance, &device);

        let mut swapchain = Self {
            device,
            physical_device,
            surface,
            surface_loader,
            swapchain: vk::SwapchainKHR::null(),
            swapchain_loader,
            swapchain_images: Vec::new(),
            swapchain_image_views: Vec::new(),
            color_format: TextureFormat::B8G8R8A8_SRGB,
            extent: vk::Extent2D { width, height },
            settings,
        };
        swapchain.build(width, height)?;
        Ok(swapchain)
    }

    /// Recreate the swapchain (e.g. after a window resize or a lost
    /// surface)
    ///
    /// The caller must ensure the device is idle first; old image views
    /// and the old swapchain are destroyed before the new ones are
    /// created.
    pub fn recreate(&mut self, width: u32, height: u32) -> Result<()> {
        self.destroy_swapchain_objects();
        self.build(width, height)
    }

    /// Get the ordered swapchain image views (index *i* = swapchain image *i*)
    pub fn image_views(&self) -> &[vk::ImageView] {
        &self.swapchain_image_views
    }

    /// Get the number of swapchain images
    pub fn image_count(&self) -> usize {
        self.swapchain_images.len()
    }

    /// Get the negotiated color format
    pub fn color_format(&self) -> TextureFormat {
        self.color_format
    }

    /// Get the swapchain extent in pixels
    pub fn extent(&self) -> vk::Extent2D {
        self.extent
    }

    /// Get the raw swapchain handle
    pub fn handle(&self) -> vk::SwapchainKHR {
        self.swapchain
    }

    fn build(&mut self, width: u32, height: u32) -> Result<()> {
        unsafe {
            // Query surface capabilities
            let surface_capabilities = self
                .surface_loader
                .get_physical_device_surface_capabilities(self.physical_device, self.surface)
                .map_err(|e| {
                    gfx_error!(
                        "borealis::vulkan",
                        "Failed to get surface capabilities: {:?}",
                        e
                    );
                    Error::InitializationFailed(format!(
                        "Failed to get surface capabilities: {:?}",
                        e
                    ))
                })?;

            // Choose surface format (prefer SRGB swapchains)
            let surface_formats = self
                .surface_loader
                .get_physical_device_surface_formats(self.physical_device, self.surface)
                .map_err(|e| {
                    gfx_error!("borealis::vulkan", "Failed to query surface formats: {:?}", e);
                    Error::InitializationFailed(format!("Failed to get surface formats: {:?}", e))
                })?;

            let surface_format = surface_formats
                .iter()
                .find(|f| {
                    f.format == vk::Format::B8G8R8A8_SRGB || f.format == vk::Format::R8G8B8A8_SRGB
                })
                .or_else(|| {
                    surface_formats
                        .iter()
                        .find(|f| format_from_vk(f.format).is_some())
                })
                .ok_or_else(|| {
                    gfx_error!("borealis::vulkan", "No supported surface format found");
                    Error::InitializationFailed("No supported surface format found".to_string())
                })?;

            let color_format = format_from_vk(surface_format.format).ok_or_else(|| {
                Error::InitializationFailed(format!(
                    "Surface format {:?} is not representable",
                    surface_format.format
                ))
            })?;

            // Choose present mode: FIFO is always available; MAILBOX only
            // when vsync is off and the surface supports it
            let present_mode = if self.settings.vsync {
                vk::PresentModeKHR::FIFO
            } else {
                let supported = self
                    .surface_loader
                    .get_physical_device_surface_present_modes(self.physical_device, self.surface)
                    .unwrap_or_default();
                if supported.contains(&vk::PresentModeKHR::MAILBOX) {
                    vk::PresentModeKHR::MAILBOX
                } else {
                    gfx_warn!(
                        "borealis::vulkan",
                        "MAILBOX present mode unavailable, falling back to FIFO"
                    );
                    vk::PresentModeKHR::FIFO
                }
            };

            // Clamp the preferred image count to what the surface allows
            // (max_image_count == 0 means no upper bound)
            let mut min_image_count = self
                .settings
                .preferred_image_count
                .max(surface_capabilities.min_image_count);
            if surface_capabilities.max_image_count > 0 {
                min_image_count = min_image_count.min(surface_capabilities.max_image_count);
            }

            // The surface dictates the extent unless it reports the
            // "window manager decides" sentinel
            let extent = if surface_capabilities.current_extent.width != u32::MAX {
                surface_capabilities.current_extent
            } else {
                vk::Extent2D { width, height }
            };

            // Create swapchain
            let swapchain_create_info = vk::SwapchainCreateInfoKHR::default()
                .surface(self.surface)
                .min_image_count(min_image_count)
                .image_format(surface_format.format)
                .image_color_space(surface_format.color_space)
                .image_extent(extent)
                .image_array_layers(1)
                .image_usage(vk::ImageUsageFlags::COLOR_ATTACHMENT)
                .image_sharing_mode(vk::SharingMode::EXCLUSIVE)
                .pre_transform(surface_capabilities.current_transform)
                .composite_alpha(vk::CompositeAlphaFlagsKHR::OPAQUE)
                .present_mode(present_mode);

            let swapchain = self
                .swapchain_loader
                .create_swapchain(&swapchain_create_info, None)
                .map_err(|e| {
                    gfx_error!("borealis::vulkan", "Failed to create swapchain: {:?}", e);
                    Error::InitializationFailed(format!("Failed to create swapchain: {:?}", e))
                })?;

            // Get swapchain images
            let swapchain_images =
                self.swapchain_loader
                    .get_swapchain_images(swapchain)
                    .map_err(|e| {
                        gfx_error!("borealis::vulkan", "Failed to get swapchain images: {:?}", e);
                        Error::InitializationFailed(format!(
                            "Failed to get swapchain images: {:?}",
                            e
                        ))
                    })?;

            // Create swapchain image views, preserving image order
            let swapchain_image_views: Vec<vk::ImageView> = swapchain_images
                .iter()
                .map(|&image| {
                    let create_info = vk::ImageViewCreateInfo::default()
                        .image(image)
                        .view_type(vk::ImageViewType::TYPE_2D)
                        .format(surface_format.format)
                        .components(vk::ComponentMapping {
                            r: vk::ComponentSwizzle::IDENTITY,
                            g: vk::ComponentSwizzle::IDENTITY,
                            b: vk::ComponentSwizzle::IDENTITY,
                            a: vk::ComponentSwizzle::IDENTITY,
                        })
                        .subresource_range(vk::ImageSubresourceRange {
                            aspect_mask: vk::ImageAspectFlags::COLOR,
                            base_mip_level: 0,
                            level_count: 1,
                            base_array_layer: 0,
                            layer_count: 1,
                        });
                    self.device.create_image_view(&create_info, None)
                })
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| {
                    gfx_error!(
                        "borealis::vulkan",
                        "Failed to create swapchain image views: {:?}",
                        e
                    );
                    self.swapchain_loader.destroy_swapchain(swapchain, None);
                    Error::InitializationFailed(format!("Failed to create image views: {:?}", e))
                })?;

            gfx_debug!(
                "borealis::vulkan",
                "Swapchain created: {} images, {:?}, {}x{}",
                swapchain_images.len(),
                color_format,
                extent.width,
                extent.height
            );

            self.swapchain = swapchain;
            self.swapchain_images = swapchain_images;
            self.swapchain_image_views = swapchain_image_views;
            self.color_format = color_format;
            self.extent = extent;

            Ok(())
        }
    }

    /// Destroy the image views and the swapchain, leaving the surface
    /// alive for a rebuild
    fn destroy_swapchain_objects(&mut self) {
        unsafe {
            for view in self.swapchain_image_views.drain(..) {
                self.device.destroy_image_view(view, None);
            }
            self.swapchain_images.clear();
            if self.swapchain != vk::SwapchainKHR::null() {
                self.swapchain_loader.destroy_swapchain(self.swapchain, None);
                self.swapchain = vk::SwapchainKHR::null();
            }
        }
    }

    /// Destroy everything including the surface
    ///
    /// Idempotent; also invoked from Drop. The owning device calls this
    /// before destroying the logical device.
    pub(crate) fn destroy(&mut self) {
        self.destroy_swapchain_objects();
        unsafe {
            if self.surface != vk::SurfaceKHR::null() {
                self.surface_loader.destroy_surface(self.surface, None);
                self.surface = vk::SurfaceKHR::null();
            }
        }
    }
}

impl Drop for VulkanSwapchain {
    fn drop(&mut self) {
        self.destroy();
    }
}
