//! Shader constant-buffer layouts
//!
//! Plain `#[repr(C)]` structs mirroring the HLSL cbuffer declarations.
//! Matrices are stored transposed because HLSL consumes row-major data
//! by default; constructors do the transpose so call sites pass ordinary
//! column-major glam matrices.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Per-object transform constants (world/view/projection)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TransformConstants {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl TransformConstants {
    /// Build the constant block from column-major matrices, transposing
    /// each for HLSL consumption
    pub fn new(world: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            world: world.transpose(),
            view: view.transpose(),
            projection: projection.transpose(),
        }
    }
}

/// Directional-light constants
///
/// The trailing padding keeps the struct a multiple of 16 bytes, the
/// cbuffer packing granularity.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DirectionalLightConstants {
    pub diffuse: Vec4,
    pub direction: Vec3,
    pub padding: f32,
}

impl DirectionalLightConstants {
    /// Build the constant block with zeroed padding
    pub fn new(diffuse: Vec4, direction: Vec3) -> Self {
        Self {
            diffuse,
            direction,
            padding: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "constants_tests.rs"]
mod tests;
