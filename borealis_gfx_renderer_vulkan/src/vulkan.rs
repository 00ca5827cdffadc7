//! VulkanGraphicsDevice - instance/device bring-up and ownership of the
//! swapchain and render-target setup
//!
//! Central object of the Vulkan backend. Construction brings up the
//! whole stack (instance, surface, physical + logical device, queues,
//! allocator, swapchain) and establishes the render targets; afterwards
//! the device hands out references to its parts and drives recreation.

use ash::vk;
use borealis_gfx::borealis::render::PresentationParameters;
use borealis_gfx::borealis::{Error, Result};
use borealis_gfx::{gfx_error, gfx_info};
use gpu_allocator::vulkan::{Allocator, AllocatorCreateDesc};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::mem::ManuallyDrop;
use std::sync::{Arc, Mutex};

use crate::vulkan_render_target_setup::RenderTargetSetup;
use crate::vulkan_swapchain::VulkanSwapchain;

/// Vulkan graphics device
///
/// Owns every backend object the render-target path needs. All state is
/// single-threaded and externally serialized (one rendering thread per
/// device); recreation is never atomic with respect to in-flight
/// submissions, so callers drain the queue before resizing.
pub struct VulkanGraphicsDevice {
    /// Vulkan entry (kept alive for the loaders derived from it)
    _entry: ash::Entry,
    /// Vulkan instance
    instance: ash::Instance,
    /// Physical device
    #[allow(dead_code)]
    physical_device: vk::PhysicalDevice,
    /// Logical device
    device: Arc<ash::Device>,

    /// Graphics queue
    #[allow(dead_code)]
    graphics_queue: vk::Queue,
    #[allow(dead_code)]
    graphics_queue_family: u32,
    /// Present queue (may be same as graphics)
    #[allow(dead_code)]
    present_queue: vk::Queue,
    #[allow(dead_code)]
    present_queue_family: u32,

    /// GPU memory allocator
    /// Wrapped in ManuallyDrop so it is dropped BEFORE the device is destroyed
    allocator: ManuallyDrop<Arc<Mutex<Allocator>>>,

    /// Debug messenger (validation builds only)
    debug_utils_loader: Option<ash::ext::debug_utils::Instance>,
    debug_messenger: Option<vk::DebugUtilsMessengerEXT>,

    /// Presentation parameters, kept in sync with the negotiated
    /// swapchain extent
    parameters: PresentationParameters,

    /// Swapchain (surface, images, views)
    swapchain: VulkanSwapchain,

    /// Render pass + per-image framebuffers
    render_targets: RenderTargetSetup,
}

impl VulkanGraphicsDevice {
    /// Create a new Vulkan graphics device and establish its render
    /// targets
    ///
    /// # Arguments
    ///
    /// * `window` - Window to create the surface from
    /// * `parameters` - Back-buffer size and device settings
    pub fn new<W: HasDisplayHandle + HasWindowHandle>(
        window: &W,
        mut parameters: PresentationParameters,
    ) -> Result<Self> {
        unsafe {
            // Load the Vulkan library
            let entry = ash::Entry::load().map_err(|e| {
                gfx_error!("borealis::vulkan", "Failed to load Vulkan library: {:?}", e);
                Error::InitializationFailed(format!("Failed to load Vulkan library: {:?}", e))
            })?;

            // Application info
            let app_info = vk::ApplicationInfo::default()
                .application_name(c"Borealis Application")
                .application_version(vk::make_api_version(0, 1, 0, 0))
                .engine_name(c"Borealis")
                .engine_version(vk::make_api_version(0, 0, 1, 0))
                .api_version(vk::API_VERSION_1_3);

            // Required instance extensions for the window's display
            let display_handle = window.display_handle().map_err(|e| {
                gfx_error!("borealis::vulkan", "Failed to get display handle: {}", e);
                Error::InitializationFailed(format!("Failed to get display handle: {}", e))
            })?;
            let mut extension_names =
                ash_window::enumerate_required_extensions(display_handle.as_raw())
                    .map_err(|e| {
                        gfx_error!(
                            "borealis::vulkan",
                            "Failed to get required extensions: {}",
                            e
                        );
                        Error::InitializationFailed(format!(
                            "Failed to get required extensions: {}",
                            e
                        ))
                    })?
                    .to_vec();

            if parameters.settings.enable_validation {
                extension_names.push(ash::ext::debug_utils::NAME.as_ptr());
            }

            // Validation layers
            let layer_names = if parameters.settings.enable_validation {
                vec![c"VK_LAYER_KHRONOS_validation".as_ptr()]
            } else {
                vec![]
            };

            let create_info = vk::InstanceCreateInfo::default()
                .application_info(&app_info)
                .enabled_layer_names(&layer_names)
                .enabled_extension_names(&extension_names);

            let instance = entry.create_instance(&create_info, None).map_err(|e| {
                gfx_error!("borealis::vulkan", "Failed to create Vulkan instance: {:?}", e);
                Error::InitializationFailed(format!("Failed to create instance: {:?}", e))
            })?;

            // Debug messenger when validation is on
            let (debug_utils_loader, debug_messenger) = if parameters.settings.enable_validation {
                let debug_utils = ash::ext::debug_utils::Instance::new(&entry, &instance);

                let debug_info = vk::DebugUtilsMessengerCreateInfoEXT::default()
                    .message_severity(
                        vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                            | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING,
                    )
                    .message_type(
                        vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                            | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                            | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
                    )
                    .pfn_user_callback(Some(crate::debug::vulkan_debug_callback));

                let messenger = debug_utils
                    .create_debug_utils_messenger(&debug_info, None)
                    .map_err(|e| {
                        gfx_error!(
                            "borealis::vulkan",
                            "Failed to create debug messenger: {:?}",
                            e
                        );
                        Error::InitializationFailed(format!(
                            "Failed to create debug messenger: {:?}",
                            e
                        ))
                    })?;

                (Some(debug_utils), Some(messenger))
            } else {
                (None, None)
            };

            // Create the window surface
            let window_handle = window.window_handle().map_err(|e| {
                gfx_error!("borealis::vulkan", "Failed to get window handle: {}", e);
                Error::InitializationFailed(format!("Failed to get window handle: {}", e))
            })?;
            let surface = ash_window::create_surface(
                &entry,
                &instance,
                display_handle.as_raw(),
                window_handle.as_raw(),
                None,
            )
            .map_err(|e| {
                gfx_error!("borealis::vulkan", "Failed to create surface: {:?}", e);
                Error::InitializationFailed(format!("Failed to create surface: {:?}", e))
            })?;

            let surface_loader = ash::khr::surface::Instance::new(&entry, &instance);

            // Record the native handle in the parameters (read-only info
            // from here on)
            parameters.window_handle = Some(window_handle.as_raw());

            // Pick the first Vulkan-capable physical device
            let physical_devices = instance.enumerate_physical_devices().map_err(|e| {
                gfx_error!(
                    "borealis::vulkan",
                    "Failed to enumerate physical devices: {:?}",
                    e
                );
                Error::InitializationFailed(format!(
                    "Failed to enumerate physical devices: {:?}",
                    e
                ))
            })?;

            let physical_device = physical_devices.into_iter().next().ok_or_else(|| {
                gfx_error!("borealis::vulkan", "No Vulkan-capable GPU found");
                Error::InitializationFailed("No Vulkan-capable GPU found".to_string())
            })?;

            // Find queue families
            let queue_families =
                instance.get_physical_device_queue_family_properties(physical_device);

            let graphics_family_index = queue_families
                .iter()
                .enumerate()
                .find(|(_, qf)| qf.queue_flags.contains(vk::QueueFlags::GRAPHICS))
                .map(|(i, _)| i as u32)
                .ok_or_else(|| {
                    gfx_error!("borealis::vulkan", "No graphics queue family found");
                    Error::InitializationFailed("No graphics queue family found".to_string())
                })?;

            let present_family_index = (0..queue_families.len() as u32)
                .find(|&i| {
                    surface_loader
                        .get_physical_device_surface_support(physical_device, i, surface)
                        .unwrap_or(false)
                })
                .ok_or_else(|| {
                    gfx_error!("borealis::vulkan", "No present queue family found");
                    Error::InitializationFailed("No present queue family found".to_string())
                })?;

            // Create the logical device
            let queue_priorities = [1.0];
            let queue_create_infos = if graphics_family_index == present_family_index {
                vec![vk::DeviceQueueCreateInfo::default()
                    .queue_family_index(graphics_family_index)
                    .queue_priorities(&queue_priorities)]
            } else {
                vec![
                    vk::DeviceQueueCreateInfo::default()
                        .queue_family_index(graphics_family_index)
                        .queue_priorities(&queue_priorities),
                    vk::DeviceQueueCreateInfo::default()
                        .queue_family_index(present_family_index)
                        .queue_priorities(&queue_priorities),
                ]
            };

            let device_extension_names = vec![ash::khr::swapchain::NAME.as_ptr()];

            let device_create_info = vk::DeviceCreateInfo::default()
                .queue_create_infos(&queue_create_infos)
                .enabled_extension_names(&device_extension_names);

            let device = Arc::new(
                instance
                    .create_device(physical_device, &device_create_info, None)
                    .map_err(|e| {
                        gfx_error!("borealis::vulkan", "Failed to create logical device: {:?}", e);
                        Error::InitializationFailed(format!("Failed to create device: {:?}", e))
                    })?,
            );

            let graphics_queue = device.get_device_queue(graphics_family_index, 0);
            let present_queue = device.get_device_queue(present_family_index, 0);

            // Create the GPU allocator
            let allocator = Allocator::new(&AllocatorCreateDesc {
                instance: instance.clone(),
                device: (*device).clone(),
                physical_device,
                debug_settings: Default::default(),
                buffer_device_address: false,
                allocation_sizes: Default::default(),
            })
            .map_err(|e| {
                gfx_error!("borealis::vulkan", "Failed to create GPU allocator: {:?}", e);
                Error::InitializationFailed(format!("Failed to create allocator: {:?}", e))
            })?;

            // Create the swapchain over the surface
            let swapchain = VulkanSwapchain::new(
                Arc::clone(&device),
                physical_device,
                &instance,
                surface,
                surface_loader,
                parameters.settings,
                parameters.back_buffer_width,
                parameters.back_buffer_height,
            )?;

            // The surface may have dictated a different extent; the
            // parameters stay authoritative for framebuffer sizing, so
            // sync them to what was actually negotiated
            let extent = swapchain.extent();
            parameters.back_buffer_width = extent.width;
            parameters.back_buffer_height = extent.height;

            // Establish the render pass and framebuffers
            let mut render_targets = RenderTargetSetup::new(Arc::clone(&device));
            render_targets.recreate(&swapchain, &parameters)?;

            gfx_info!(
                "borealis::vulkan",
                "Graphics device ready: {} swapchain images, {}x{}",
                swapchain.image_count(),
                extent.width,
                extent.height
            );

            Ok(Self {
                _entry: entry,
                instance,
                physical_device,
                device,
                graphics_queue,
                graphics_queue_family: graphics_family_index,
                present_queue,
                present_queue_family: present_family_index,
                allocator: ManuallyDrop::new(Arc::new(Mutex::new(allocator))),
                debug_utils_loader,
                debug_messenger,
                parameters,
                swapchain,
                render_targets,
            })
        }
    }

    /// The logical device
    pub fn device(&self) -> &Arc<ash::Device> {
        &self.device
    }

    /// The swapchain
    pub fn swapchain(&self) -> &VulkanSwapchain {
        &self.swapchain
    }

    /// The presentation parameters the device was created with, extent
    /// kept in sync with the swapchain
    pub fn presentation_parameters(&self) -> &PresentationParameters {
        &self.parameters
    }

    /// The render pass + framebuffer set
    pub fn render_targets(&self) -> &RenderTargetSetup {
        &self.render_targets
    }

    /// Re-derive the render pass and framebuffers from the current
    /// device/swapchain state
    ///
    /// Call once at startup happens implicitly in [`new`](Self::new);
    /// call again after any swapchain invalidation. The caller must
    /// ensure no in-flight command buffer still references the previous
    /// framebuffer array.
    pub fn recreate_render_targets(&mut self) -> Result<()> {
        self.render_targets.recreate(&self.swapchain, &self.parameters)
    }

    /// Recreate the swapchain for a new window size, then the render
    /// targets
    ///
    /// Waits for the device to go idle first so nothing references the
    /// old swapchain or framebuffers.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.wait_idle()?;
        self.swapchain.recreate(width, height)?;

        let extent = self.swapchain.extent();
        self.parameters.back_buffer_width = extent.width;
        self.parameters.back_buffer_height = extent.height;

        self.recreate_render_targets()
    }

    /// Block until the device has finished all submitted work
    pub fn wait_idle(&self) -> Result<()> {
        unsafe {
            self.device.device_wait_idle().map_err(|e| {
                gfx_error!("borealis::vulkan", "Failed to wait for device idle: {:?}", e);
                Error::BackendError(format!("Failed to wait for device idle: {:?}", e))
            })
        }
    }
}

impl Drop for VulkanGraphicsDevice {
    fn drop(&mut self) {
        unsafe {
            // Nothing may be in flight while native objects go away
            let _ = self.device.device_wait_idle();

            // 1. Framebuffers, then render pass
            self.render_targets.destroy();

            // 2. Image views, swapchain, surface
            self.swapchain.destroy();

            // 3. Allocator (must go before the device)
            ManuallyDrop::drop(&mut self.allocator);

            // 4. Debug messenger
            if let (Some(loader), Some(messenger)) =
                (&self.debug_utils_loader, self.debug_messenger)
            {
                loader.destroy_debug_utils_messenger(messenger, None);
            }

            // 5. Device and instance last
            self.device.destroy_device(None);
            self.instance.destroy_instance(None);
        }
    }
}
