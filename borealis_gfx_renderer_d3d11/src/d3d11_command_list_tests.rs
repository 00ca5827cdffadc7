//! Unit tests for the immediate command list
//!
//! All tests run against a NULL-driver device: the context accepts every
//! call without rendering, so no GPU (and no window) is required.

use super::*;
use crate::d3d11::D3D11GraphicsDevice;
use borealis_gfx::borealis::render::{
    DepthStencilClearFlags, PrimitiveTopology, Settings, ShaderStage, Viewport,
};
use borealis_gfx::borealis::Error;
use windows::Win32::Graphics::Direct3D::D3D_DRIVER_TYPE_NULL;
use windows::Win32::Graphics::Direct3D11::{D3D11_CLEAR_DEPTH, D3D11_CLEAR_STENCIL};

fn null_device() -> D3D11GraphicsDevice {
    let settings = Settings {
        // The debug layer is not available on every test machine
        enable_validation: false,
        ..Settings::default()
    };
    D3D11GraphicsDevice::with_driver_type(D3D_DRIVER_TYPE_NULL, settings)
        .expect("NULL-driver device creation should always succeed")
}

// ============================================================================
// CLEAR GUARD TESTS
// ============================================================================

#[test]
fn test_clear_with_null_render_target_is_invalid_argument() {
    let device = null_device();
    let cmd = device.create_command_list();

    let result = cmd.clear(None, [0.0, 0.2, 0.4, 1.0]);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

// ============================================================================
// STAGE DISPATCH TESTS
// ============================================================================

#[test]
fn test_set_sampler_for_stage_none_is_a_noop() {
    let device = null_device();
    let cmd = device.create_command_list();

    // No sampler, no stage: nothing must happen, nothing must panic
    cmd.set_sampler(ShaderStage::None, None, 0);
}

#[test]
fn test_set_shader_resource_for_stage_none_is_a_noop() {
    let device = null_device();
    let cmd = device.create_command_list();

    cmd.set_shader_resource(ShaderStage::None, None, 0);
}

#[test]
fn test_unbind_sampler_on_every_dispatching_stage() {
    let device = null_device();
    let cmd = device.create_command_list();

    // Binding a null sampler is the native unbind; every stage's slot
    // family must accept it
    for stage in ShaderStage::ALL {
        cmd.set_sampler(stage, None, 0);
    }
}

#[test]
fn test_unbind_shader_resource_on_every_dispatching_stage() {
    let device = null_device();
    let cmd = device.create_command_list();

    for stage in ShaderStage::ALL {
        cmd.set_shader_resource(stage, None, 2);
    }
}

// ============================================================================
// FORWARDING TESTS
// ============================================================================

#[test]
fn test_state_setting_and_draw_calls_forward() {
    let device = null_device();
    let cmd = device.create_command_list();

    cmd.set_primitive_topology(PrimitiveTopology::TriangleList);
    cmd.set_viewport(Viewport::new(800.0, 600.0));
    cmd.set_render_targets(None, None);
    cmd.draw(3, 0);
    cmd.draw_indexed(6, 0, 0);
}

// ============================================================================
// CONVERSION TESTS
// ============================================================================

#[test]
fn test_clear_flags_to_d3d_mapping() {
    assert_eq!(
        clear_flags_to_d3d(DepthStencilClearFlags::DEPTH),
        D3D11_CLEAR_DEPTH.0 as u32
    );
    assert_eq!(
        clear_flags_to_d3d(DepthStencilClearFlags::STENCIL),
        D3D11_CLEAR_STENCIL.0 as u32
    );
    assert_eq!(
        clear_flags_to_d3d(DepthStencilClearFlags::DEPTH | DepthStencilClearFlags::STENCIL),
        D3D11_CLEAR_DEPTH.0 as u32 | D3D11_CLEAR_STENCIL.0 as u32
    );
    assert_eq!(clear_flags_to_d3d(DepthStencilClearFlags::empty()), 0);
}

#[test]
fn test_topology_to_d3d_is_exhaustive_and_distinct() {
    let all = [
        PrimitiveTopology::PointList,
        PrimitiveTopology::LineList,
        PrimitiveTopology::LineStrip,
        PrimitiveTopology::TriangleList,
        PrimitiveTopology::TriangleStrip,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(topology_to_d3d(*a), topology_to_d3d(*b));
        }
    }
}
