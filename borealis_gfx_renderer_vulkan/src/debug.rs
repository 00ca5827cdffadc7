//! Validation-layer plumbing - routes Vulkan debug messenger output into
//! the Borealis logging system

use ash::vk;
use borealis_gfx::{gfx_debug, gfx_error, gfx_trace, gfx_warn};
use std::ffi::CStr;

/// Debug messenger callback registered when validation is enabled
///
/// Maps Vulkan message severities onto the Borealis log severities and
/// always tells the driver to continue (returns VK_FALSE).
pub(crate) unsafe extern "system" fn vulkan_debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _p_user_data: *mut std::ffi::c_void,
) -> vk::Bool32 {
    let message = if p_callback_data.is_null() || (*p_callback_data).p_message.is_null() {
        String::from("<no message>")
    } else {
        CStr::from_ptr((*p_callback_data).p_message)
            .to_string_lossy()
            .into_owned()
    };

    match message_severity {
        vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE => {
            gfx_trace!("borealis::vulkan", "[{:?}] {}", message_type, message);
        }
        vk::DebugUtilsMessageSeverityFlagsEXT::INFO => {
            gfx_debug!("borealis::vulkan", "[{:?}] {}", message_type, message);
        }
        vk::DebugUtilsMessageSeverityFlagsEXT::WARNING => {
            gfx_warn!("borealis::vulkan", "[{:?}] {}", message_type, message);
        }
        _ => {
            gfx_error!("borealis::vulkan", "[{:?}] {}", message_type, message);
        }
    }

    vk::FALSE
}
