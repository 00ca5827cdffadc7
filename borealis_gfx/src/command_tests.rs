//! Unit tests for command.rs

use crate::command::*;

#[test]
fn test_none_stage_binds_no_native_slot() {
    assert!(!ShaderStage::None.binds_native_slot());
}

#[test]
fn test_every_other_stage_binds_a_native_slot() {
    for stage in ShaderStage::ALL {
        if stage != ShaderStage::None {
            assert!(stage.binds_native_slot(), "{:?}", stage);
        }
    }
}

#[test]
fn test_all_covers_every_stage_once() {
    assert_eq!(ShaderStage::ALL.len(), 7);
    for (i, a) in ShaderStage::ALL.iter().enumerate() {
        for b in &ShaderStage::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_viewport_new_defaults() {
    let vp = Viewport::new(1280.0, 720.0);
    assert_eq!(vp.x, 0.0);
    assert_eq!(vp.y, 0.0);
    assert_eq!(vp.width, 1280.0);
    assert_eq!(vp.height, 720.0);
    assert_eq!(vp.min_depth, 0.0);
    assert_eq!(vp.max_depth, 1.0);
}

#[test]
fn test_depth_stencil_clear_flags_combine() {
    let both = DepthStencilClearFlags::DEPTH | DepthStencilClearFlags::STENCIL;
    assert!(both.contains(DepthStencilClearFlags::DEPTH));
    assert!(both.contains(DepthStencilClearFlags::STENCIL));
    assert!(!DepthStencilClearFlags::DEPTH.contains(DepthStencilClearFlags::STENCIL));
}

#[test]
fn test_clear_value_color_roundtrip() {
    let cv = ClearValue::Color([0.0, 0.2, 0.4, 1.0]);
    match cv {
        ClearValue::Color(rgba) => assert_eq!(rgba, [0.0, 0.2, 0.4, 1.0]),
        _ => panic!("expected color clear value"),
    }
}
