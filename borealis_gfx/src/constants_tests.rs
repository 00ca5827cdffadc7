//! Unit tests for constants.rs
//!
//! Layout tests pin the cbuffer-compatible sizes; behavior tests pin the
//! transpose-on-construction convention.

use crate::constants::{DirectionalLightConstants, TransformConstants};
use glam::{Mat4, Vec3, Vec4};

// ============================================================================
// LAYOUT TESTS
// ============================================================================

#[test]
fn test_transform_constants_size() {
    // Three 4x4 float matrices
    assert_eq!(std::mem::size_of::<TransformConstants>(), 3 * 64);
    assert_eq!(std::mem::size_of::<TransformConstants>() % 16, 0);
}

#[test]
fn test_directional_light_constants_size() {
    // Vec4 + Vec3 + explicit padding float
    assert_eq!(std::mem::size_of::<DirectionalLightConstants>(), 32);
    assert_eq!(std::mem::size_of::<DirectionalLightConstants>() % 16, 0);
}

#[test]
fn test_constants_are_pod() {
    // bytemuck round-trip must preserve the raw bytes
    let light = DirectionalLightConstants::new(
        Vec4::new(1.0, 0.5, 0.25, 1.0),
        Vec3::new(0.0, -1.0, 0.0),
    );
    let bytes = bytemuck::bytes_of(&light);
    let back: &DirectionalLightConstants = bytemuck::from_bytes(bytes);
    assert_eq!(*back, light);
}

// ============================================================================
// BEHAVIOR TESTS
// ============================================================================

#[test]
fn test_transform_constants_transpose_on_construction() {
    let world = Mat4::from_cols_array(&[
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ]);
    let constants = TransformConstants::new(world, Mat4::IDENTITY, Mat4::IDENTITY);
    assert_eq!(constants.world, world.transpose());
    // Identity is its own transpose
    assert_eq!(constants.view, Mat4::IDENTITY);
    assert_eq!(constants.projection, Mat4::IDENTITY);
}

#[test]
fn test_directional_light_padding_is_zeroed() {
    let light = DirectionalLightConstants::new(Vec4::ONE, Vec3::NEG_Y);
    assert_eq!(light.padding, 0.0);
    assert_eq!(light.diffuse, Vec4::ONE);
    assert_eq!(light.direction, Vec3::NEG_Y);
}
