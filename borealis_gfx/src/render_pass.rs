//! Render-pass data model - describes attachments, the subpass, and the
//! external dependency of a presentation render pass
//!
//! The model is deliberately narrow: one color attachment, one graphics
//! subpass, one dependency from the implicit external producer. That is
//! the exact shape a swapchain presentation pass needs, and
//! [`RenderPassDesc::presentation`] is the only constructor.

use bitflags::bitflags;

/// Pixel formats a swapchain color attachment can carry
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    R8G8B8A8_UNORM,
    R8G8B8A8_SRGB,
    B8G8R8A8_UNORM,
    B8G8R8A8_SRGB,
}

/// Load operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOp {
    /// Load existing content
    Load,
    /// Clear the content
    Clear,
    /// Don't care about existing content
    DontCare,
}

/// Store operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    /// Store the rendered content
    Store,
    /// Don't care about storing the content
    DontCare,
}

/// Image layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLayout {
    /// Undefined layout (initial state)
    Undefined,
    /// Layout for color attachment
    ColorAttachment,
    /// Layout for shader read-only access
    ShaderReadOnly,
    /// Layout for transfer source
    TransferSrc,
    /// Layout for transfer destination
    TransferDst,
    /// Layout for presenting to swapchain
    PresentSrc,
}

/// Number of samples per pixel (1 = no MSAA)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleCount {
    S1,
    S2,
    S4,
    S8,
}

impl SampleCount {
    /// Sample count as a raw number
    pub fn as_u32(self) -> u32 {
        match self {
            SampleCount::S1 => 1,
            SampleCount::S2 => 2,
            SampleCount::S4 => 4,
            SampleCount::S8 => 8,
        }
    }
}

/// Pipeline a subpass binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineBindPoint {
    Graphics,
    Compute,
}

/// Reference to a subpass in a dependency: either a concrete subpass
/// index or the implicit external producer/consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubpassRef {
    /// The implicit operations before or after the render pass
    External,
    /// Subpass at the given index
    Index(u32),
}

bitflags! {
    /// Pipeline stages a dependency synchronizes at
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PipelineStageFlags: u32 {
        const TOP_OF_PIPE = 1 << 0;
        const COLOR_ATTACHMENT_OUTPUT = 1 << 1;
        const BOTTOM_OF_PIPE = 1 << 2;
    }
}

bitflags! {
    /// Memory access kinds a dependency grants
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessFlags: u32 {
        const COLOR_ATTACHMENT_READ = 1 << 0;
        const COLOR_ATTACHMENT_WRITE = 1 << 1;
    }
}

/// Descriptor for a single attachment in a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentDesc {
    /// Pixel format
    pub format: TextureFormat,
    /// Number of samples (S1 = no MSAA)
    pub samples: SampleCount,
    /// Load operation for the color aspect
    pub load_op: LoadOp,
    /// Store operation for the color aspect
    pub store_op: StoreOp,
    /// Load operation for the (unused) stencil aspect
    pub stencil_load_op: LoadOp,
    /// Store operation for the (unused) stencil aspect
    pub stencil_store_op: StoreOp,
    /// Layout the attachment starts in
    pub initial_layout: ImageLayout,
    /// Layout the attachment ends in
    pub final_layout: ImageLayout,
}

/// Descriptor for the single subpass of a presentation render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubpassDesc {
    /// Pipeline kind the subpass binds to
    pub bind_point: PipelineBindPoint,
    /// Index of the color attachment the subpass writes
    pub color_attachment: u32,
    /// Layout the attachment is in during the subpass
    pub attachment_layout: ImageLayout,
}

/// Descriptor for the dependency between the implicit external producer
/// and the subpass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubpassDependencyDesc {
    pub src_subpass: SubpassRef,
    pub dst_subpass: SubpassRef,
    pub src_stage_mask: PipelineStageFlags,
    pub src_access_mask: AccessFlags,
    pub dst_stage_mask: PipelineStageFlags,
    pub dst_access_mask: AccessFlags,
}

/// Descriptor for a presentation render pass
///
/// Invariants: exactly one color attachment, no depth/stencil attachment,
/// sample count fixed at one, exactly one graphics subpass, exactly one
/// dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPassDesc {
    /// The single color attachment
    pub color_attachment: AttachmentDesc,
    /// The single subpass
    pub subpass: SubpassDesc,
    /// The single external dependency
    pub dependency: SubpassDependencyDesc,
}

impl RenderPassDesc {
    /// Build the canonical presentation pass for a swapchain of the
    /// given color format
    ///
    /// Clears on load, stores on completion, ignores the stencil aspect,
    /// transitions Undefined -> PresentSrc, and synchronizes with the
    /// implicit external producer at the color-attachment-output stage.
    pub fn presentation(format: TextureFormat) -> Self {
        Self {
            color_attachment: AttachmentDesc {
                format,
                samples: SampleCount::S1,
                load_op: LoadOp::Clear,
                store_op: StoreOp::Store,
                stencil_load_op: LoadOp::DontCare,
                stencil_store_op: StoreOp::DontCare,
                initial_layout: ImageLayout::Undefined,
                final_layout: ImageLayout::PresentSrc,
            },
            subpass: SubpassDesc {
                bind_point: PipelineBindPoint::Graphics,
                color_attachment: 0,
                attachment_layout: ImageLayout::ColorAttachment,
            },
            dependency: SubpassDependencyDesc {
                src_subpass: SubpassRef::External,
                dst_subpass: SubpassRef::Index(0),
                src_stage_mask: PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
                src_access_mask: AccessFlags::empty(),
                dst_stage_mask: PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
                dst_access_mask: AccessFlags::COLOR_ATTACHMENT_READ
                    | AccessFlags::COLOR_ATTACHMENT_WRITE,
            },
        }
    }

    /// Number of color attachments (always 1 in this model)
    pub fn color_attachment_count(&self) -> u32 {
        1
    }

    /// Number of subpasses (always 1 in this model)
    pub fn subpass_count(&self) -> u32 {
        1
    }

    /// Number of dependencies (always 1 in this model)
    pub fn dependency_count(&self) -> u32 {
        1
    }
}

#[cfg(test)]
#[path = "render_pass_tests.rs"]
mod tests;
