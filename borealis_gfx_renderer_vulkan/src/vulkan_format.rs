//! Pure conversions between the core render-pass vocabulary and Vulkan
//! enums
//!
//! Everything here is total over the core types and GPU-free, so the
//! mappings are unit-tested directly.

use ash::vk;
use borealis_gfx::borealis::render::{
    AccessFlags, ImageLayout, LoadOp, PipelineBindPoint, PipelineStageFlags, SampleCount,
    StoreOp, SubpassRef, TextureFormat,
};

/// Convert TextureFormat to Vulkan format
pub(crate) fn format_to_vk(format: TextureFormat) -> vk::Format {
    match format {
        TextureFormat::R8G8B8A8_UNORM => vk::Format::R8G8B8A8_UNORM,
        TextureFormat::R8G8B8A8_SRGB => vk::Format::R8G8B8A8_SRGB,
        TextureFormat::B8G8R8A8_UNORM => vk::Format::B8G8R8A8_UNORM,
        TextureFormat::B8G8R8A8_SRGB => vk::Format::B8G8R8A8_SRGB,
    }
}

/// Convert a Vulkan surface format back to a TextureFormat
///
/// Returns None for formats the swapchain never negotiates.
pub(crate) fn format_from_vk(format: vk::Format) -> Option<TextureFormat> {
    match format {
        vk::Format::R8G8B8A8_UNORM => Some(TextureFormat::R8G8B8A8_UNORM),
        vk::Format::R8G8B8A8_SRGB => Some(TextureFormat::R8G8B8A8_SRGB),
        vk::Format::B8G8R8A8_UNORM => Some(TextureFormat::B8G8R8A8_UNORM),
        vk::Format::B8G8R8A8_SRGB => Some(TextureFormat::B8G8R8A8_SRGB),
        _ => None,
    }
}

/// Convert LoadOp to Vulkan
pub(crate) fn load_op_to_vk(load_op: LoadOp) -> vk::AttachmentLoadOp {
    match load_op {
        LoadOp::Load => vk::AttachmentLoadOp::LOAD,
        LoadOp::Clear => vk::AttachmentLoadOp::CLEAR,
        LoadOp::DontCare => vk::AttachmentLoadOp::DONT_CARE,
    }
}

/// Convert StoreOp to Vulkan
pub(crate) fn store_op_to_vk(store_op: StoreOp) -> vk::AttachmentStoreOp {
    match store_op {
        StoreOp::Store => vk::AttachmentStoreOp::STORE,
        StoreOp::DontCare => vk::AttachmentStoreOp::DONT_CARE,
    }
}

/// Convert ImageLayout to Vulkan
pub(crate) fn image_layout_to_vk(layout: ImageLayout) -> vk::ImageLayout {
    match layout {
        ImageLayout::Undefined => vk::ImageLayout::UNDEFINED,
        ImageLayout::ColorAttachment => vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
        ImageLayout::ShaderReadOnly => vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
        ImageLayout::TransferSrc => vk::ImageLayout::TRANSFER_SRC_OPTIMAL,
        ImageLayout::TransferDst => vk::ImageLayout::TRANSFER_DST_OPTIMAL,
        ImageLayout::PresentSrc => vk::ImageLayout::PRESENT_SRC_KHR,
    }
}

/// Convert SampleCount to Vulkan
pub(crate) fn sample_count_to_vk(count: SampleCount) -> vk::SampleCountFlags {
    match count {
        SampleCount::S1 => vk::SampleCountFlags::TYPE_1,
        SampleCount::S2 => vk::SampleCountFlags::TYPE_2,
        SampleCount::S4 => vk::SampleCountFlags::TYPE_4,
        SampleCount::S8 => vk::SampleCountFlags::TYPE_8,
    }
}

/// Convert PipelineBindPoint to Vulkan
pub(crate) fn bind_point_to_vk(bind_point: PipelineBindPoint) -> vk::PipelineBindPoint {
    match bind_point {
        PipelineBindPoint::Graphics => vk::PipelineBindPoint::GRAPHICS,
        PipelineBindPoint::Compute => vk::PipelineBindPoint::COMPUTE,
    }
}

/// Convert PipelineStageFlags to Vulkan stage flags
pub(crate) fn pipeline_stage_to_vk(flags: PipelineStageFlags) -> vk::PipelineStageFlags {
    let mut vk_flags = vk::PipelineStageFlags::empty();
    if flags.contains(PipelineStageFlags::TOP_OF_PIPE) {
        vk_flags |= vk::PipelineStageFlags::TOP_OF_PIPE;
    }
    if flags.contains(PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT) {
        vk_flags |= vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT;
    }
    if flags.contains(PipelineStageFlags::BOTTOM_OF_PIPE) {
        vk_flags |= vk::PipelineStageFlags::BOTTOM_OF_PIPE;
    }
    vk_flags
}

/// Convert AccessFlags to Vulkan access flags
pub(crate) fn access_flags_to_vk(flags: AccessFlags) -> vk::AccessFlags {
    let mut vk_flags = vk::AccessFlags::empty();
    if flags.contains(AccessFlags::COLOR_ATTACHMENT_READ) {
        vk_flags |= vk::AccessFlags::COLOR_ATTACHMENT_READ;
    }
    if flags.contains(AccessFlags::COLOR_ATTACHMENT_WRITE) {
        vk_flags |= vk::AccessFlags::COLOR_ATTACHMENT_WRITE;
    }
    vk_flags
}

/// Convert a SubpassRef to the Vulkan subpass index encoding
pub(crate) fn subpass_ref_to_vk(subpass: SubpassRef) -> u32 {
    match subpass {
        SubpassRef::External => vk::SUBPASS_EXTERNAL,
        SubpassRef::Index(index) => index,
    }
}

#[cfg(test)]
#[path = "vulkan_format_tests.rs"]
mod tests;
