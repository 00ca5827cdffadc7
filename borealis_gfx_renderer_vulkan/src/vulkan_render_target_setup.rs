//! RenderTargetSetup - the presentation render pass and the
//! per-swapchain-image framebuffer array
//!
//! This component owns the render pass exclusively; every framebuffer
//! holds a non-owning reference to it, so teardown always destroys the
//! framebuffers first and the render pass last.
//!
//! The component has two states: uninitialized (no render pass, empty
//! framebuffer array) and ready. `recreate()` is the only transition and
//! returns to ready from either state.

use ash::vk;
use borealis_gfx::borealis::render::{PresentationParameters, RenderPassDesc, TextureFormat};
use borealis_gfx::borealis::{Error, Result};
use borealis_gfx::{gfx_debug, gfx_error};
use std::sync::Arc;

use crate::vulkan_format::{
    access_flags_to_vk, bind_point_to_vk, format_to_vk, image_layout_to_vk, load_op_to_vk,
    pipeline_stage_to_vk, sample_count_to_vk, store_op_to_vk, subpass_ref_to_vk,
};
use crate::vulkan_swapchain::VulkanSwapchain;

/// Framebuffer extent derived from the presentation parameters
///
/// Width and height are read from their own fields; the two must never
/// be substituted for one another (a rectangular back buffer makes a
/// mix-up here visible immediately, a square one hides it).
pub(crate) fn framebuffer_extent(parameters: &PresentationParameters) -> vk::Extent2D {
    let (width, height) = parameters.back_buffer_extent();
    vk::Extent2D { width, height }
}

/// Render pass + framebuffer array for the swapchain
///
/// Established once at startup and again after any swapchain
/// invalidation (resize, device-lost recovery). Framebuffer *i* always
/// references swapchain image view *i*.
pub struct RenderTargetSetup {
    /// Vulkan device (for creation and cleanup)
    device: Arc<ash::Device>,
    /// The single presentation render pass; null while uninitialized
    render_pass: vk::RenderPass,
    /// One framebuffer per swapchain image, in image-index order
    framebuffers: Vec<vk::Framebuffer>,
}

impl RenderTargetSetup {
    /// Create an uninitialized setup; call [`recreate`](Self::recreate)
    /// to bring it to the ready state
    pub fn new(device: Arc<ash::Device>) -> Self {
        Self {
            device,
            render_pass: vk::RenderPass::null(),
            framebuffers: Vec::new(),
        }
    }

    /// Re-derive the render pass and the framebuffer array from the
    /// current swapchain state and presentation parameters
    ///
    /// Any previously created framebuffers and render pass are destroyed
    /// first, so repeated calls never leak native handles. The caller
    /// must ensure no in-flight command buffer still references the old
    /// framebuffers (drain or fence the queue before calling).
    pub fn recreate(
        &mut self,
        swapchain: &VulkanSwapchain,
        parameters: &PresentationParameters,
    ) -> Result<()> {
        self.destroy();

        self.create_render_pass(swapchain.color_format())?;
        if let Err(e) = self.create_framebuffers(swapchain.image_views(), parameters) {
            // Leave no half-built state behind
            self.destroy();
            return Err(e);
        }

        gfx_debug!(
            "borealis::vulkan",
            "Render targets ready: {} framebuffers, {}x{}",
            self.framebuffers.len(),
            parameters.back_buffer_width,
            parameters.back_buffer_height
        );
        Ok(())
    }

    /// Whether the render pass and framebuffers are populated
    pub fn is_ready(&self) -> bool {
        self.render_pass != vk::RenderPass::null() && !self.framebuffers.is_empty()
    }

    /// The render pass handle (null while uninitialized)
    pub fn render_pass(&self) -> vk::RenderPass {
        self.render_pass
    }

    /// The framebuffers in swapchain image order
    pub fn framebuffers(&self) -> &[vk::Framebuffer] {
        &self.framebuffers
    }

    /// Number of framebuffers (equals the swapchain image count once ready)
    pub fn framebuffer_count(&self) -> usize {
        self.framebuffers.len()
    }

    /// Build the single presentation render pass for the swapchain's
    /// color format
    ///
    /// One color attachment, one graphics subpass referencing it, one
    /// dependency from the implicit external producer. Native rejection
    /// of the format/layout combination is fatal at this layer.
    fn create_render_pass(&mut self, color_format: TextureFormat) -> Result<()> {
        let desc = RenderPassDesc::presentation(color_format);

        let attachments = [vk::AttachmentDescription::default()
            .format(format_to_vk(desc.color_attachment.format))
            .samples(sample_count_to_vk(desc.color_attachment.samples))
            .load_op(load_op_to_vk(desc.color_attachment.load_op))
            .store_op(store_op_to_vk(desc.color_attachment.store_op))
            .stencil_load_op(load_op_to_vk(desc.color_attachment.stencil_load_op))
            .stencil_store_op(store_op_to_vk(desc.color_attachment.stencil_store_op))
            .initial_layout(image_layout_to_vk(desc.color_attachment.initial_layout))
            .final_layout(image_layout_to_vk(desc.color_attachment.final_layout))];

        let color_attachment_refs = [vk::AttachmentReference::default()
            .attachment(desc.subpass.color_attachment)
            .layout(image_layout_to_vk(desc.subpass.attachment_layout))];

        let subpasses = [vk::SubpassDescription::default()
            .pipeline_bind_point(bind_point_to_vk(desc.subpass.bind_point))
            .color_attachments(&color_attachment_refs)];

        let dependencies = [vk::SubpassDependency::default()
            .src_subpass(subpass_ref_to_vk(desc.dependency.src_subpass))
            .dst_subpass(subpass_ref_to_vk(desc.dependency.dst_subpass))
            .src_stage_mask(pipeline_stage_to_vk(desc.dependency.src_stage_mask))
            .src_access_mask(access_flags_to_vk(desc.dependency.src_access_mask))
            .dst_stage_mask(pipeline_stage_to_vk(desc.dependency.dst_stage_mask))
            .dst_access_mask(access_flags_to_vk(desc.dependency.dst_access_mask))];

        let render_pass_info = vk::RenderPassCreateInfo::default()
            .attachments(&attachments)
            .subpasses(&subpasses)
            .dependencies(&dependencies);

        unsafe {
            self.render_pass = self
                .device
                .create_render_pass(&render_pass_info, None)
                .map_err(|e| {
                    gfx_error!("borealis::vulkan", "Failed to create render pass: {:?}", e);
                    Error::BackendError(format!("Failed to create render pass: {:?}", e))
                })?;
        }

        Ok(())
    }

    /// Build one framebuffer per swapchain image view
    ///
    /// Iterates in image-index order so framebuffer *i* maps to
    /// swapchain image *i*. Each framebuffer binds exactly one
    /// attachment and one layer, sized from the presentation
    /// parameters.
    fn create_framebuffers(
        &mut self,
        image_views: &[vk::ImageView],
        parameters: &PresentationParameters,
    ) -> Result<()> {
        let extent = framebuffer_extent(parameters);

        let mut framebuffers = Vec::with_capacity(image_views.len());
        for &image_view in image_views {
            let attachments = [image_view];
            let framebuffer_info = vk::FramebufferCreateInfo::default()
                .render_pass(self.render_pass)
                .attachments(&attachments)
                .width(extent.width)
                .height(extent.height)
                .layers(1);

            let framebuffer = unsafe {
                self.device
                    .create_framebuffer(&framebuffer_info, None)
                    .map_err(|e| {
                        gfx_error!("borealis::vulkan", "Failed to create framebuffer: {:?}", e);
                        Error::BackendError(format!("Failed to create framebuffer: {:?}", e))
                    })
            };

            match framebuffer {
                Ok(fb) => framebuffers.push(fb),
                Err(e) => {
                    // Roll back the framebuffers built so far
                    unsafe {
                        for fb in framebuffers.drain(..) {
                            self.device.destroy_framebuffer(fb, None);
                        }
                    }
                    return Err(e);
                }
            }
        }

        self.framebuffers = framebuffers;
        Ok(())
    }

    /// Destroy the framebuffers, then the render pass
    ///
    /// Idempotent. The ordering is load-bearing: framebuffers reference
    /// the render pass and must go first.
    pub(crate) fn destroy(&mut self) {
        unsafe {
            for framebuffer in self.framebuffers.drain(..) {
                self.device.destroy_framebuffer(framebuffer, None);
            }
            if self.render_pass != vk::RenderPass::null() {
                self.device.destroy_render_pass(self.render_pass, None);
                self.render_pass = vk::RenderPass::null();
            }
        }
    }
}

impl Drop for RenderTargetSetup {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
#[path = "vulkan_render_target_setup_tests.rs"]
mod tests;
