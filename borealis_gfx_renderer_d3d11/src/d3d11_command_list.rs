//! ImmediateCommandList - stateless forwarding façade over an
//! ID3D11DeviceContext
//!
//! Every operation here is a single native call (or, for the
//! stage-keyed binders, a single call selected by stage). There is no
//! batching, no validation, and no dependency tracking between calls;
//! the caller owns ordering correctness. The only argument check in the
//! whole façade is the null-render-target guard on `clear`.

use borealis_gfx::borealis::render::{
    DepthStencilClearFlags, PrimitiveTopology, ShaderStage, Viewport,
};
use borealis_gfx::borealis::{Error, Result};
use windows::Win32::Graphics::Direct3D::{
    D3D_PRIMITIVE_TOPOLOGY, D3D_PRIMITIVE_TOPOLOGY_LINELIST, D3D_PRIMITIVE_TOPOLOGY_LINESTRIP,
    D3D_PRIMITIVE_TOPOLOGY_POINTLIST, D3D_PRIMITIVE_TOPOLOGY_TRIANGLELIST,
    D3D_PRIMITIVE_TOPOLOGY_TRIANGLESTRIP,
};
use windows::Win32::Graphics::Direct3D11::{
    ID3D11Buffer, ID3D11DepthStencilView, ID3D11DeviceContext, ID3D11InputLayout,
    ID3D11PixelShader, ID3D11RasterizerState, ID3D11RenderTargetView, ID3D11SamplerState,
    ID3D11ShaderResourceView, ID3D11VertexShader, D3D11_CLEAR_DEPTH, D3D11_CLEAR_STENCIL,
    D3D11_VIEWPORT,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_R32_UINT;

/// Convert PrimitiveTopology to the D3D topology enum
fn topology_to_d3d(topology: PrimitiveTopology) -> D3D_PRIMITIVE_TOPOLOGY {
    match topology {
        PrimitiveTopology::PointList => D3D_PRIMITIVE_TOPOLOGY_POINTLIST,
        PrimitiveTopology::LineList => D3D_PRIMITIVE_TOPOLOGY_LINELIST,
        PrimitiveTopology::LineStrip => D3D_PRIMITIVE_TOPOLOGY_LINESTRIP,
        PrimitiveTopology::TriangleList => D3D_PRIMITIVE_TOPOLOGY_TRIANGLELIST,
        PrimitiveTopology::TriangleStrip => D3D_PRIMITIVE_TOPOLOGY_TRIANGLESTRIP,
    }
}

/// Convert DepthStencilClearFlags to the native clear-flag bits
fn clear_flags_to_d3d(flags: DepthStencilClearFlags) -> u32 {
    let mut native = 0u32;
    if flags.contains(DepthStencilClearFlags::DEPTH) {
        native |= D3D11_CLEAR_DEPTH.0 as u32;
    }
    if flags.contains(DepthStencilClearFlags::STENCIL) {
        native |= D3D11_CLEAR_STENCIL.0 as u32;
    }
    native
}

/// Stateless command façade over a device context
///
/// Binding methods taking `Option<&...>` treat `None` as an unbind of
/// the slot, mirroring the native API's null semantics.
pub struct ImmediateCommandList {
    context: ID3D11DeviceContext,
}

impl ImmediateCommandList {
    /// Wrap an immediate device context
    ///
    /// The context is an explicit collaborator; clone it out of
    /// [`D3D11GraphicsDevice`](crate::D3D11GraphicsDevice) or pass any
    /// other context in directly.
    pub fn new(context: ID3D11DeviceContext) -> Self {
        Self { context }
    }

    /// Draw non-indexed geometry
    pub fn draw(&self, vertex_count: u32, start_vertex_location: u32) {
        unsafe {
            self.context.Draw(vertex_count, start_vertex_location);
        }
    }

    /// Draw indexed geometry
    pub fn draw_indexed(
        &self,
        index_count: u32,
        start_index_location: u32,
        base_vertex_location: i32,
    ) {
        unsafe {
            self.context
                .DrawIndexed(index_count, start_index_location, base_vertex_location);
        }
    }

    /// Clear a render target to the given RGBA color
    ///
    /// A null render target is rejected with `InvalidArgument` before
    /// any native call is made.
    pub fn clear(
        &self,
        render_target: Option<&ID3D11RenderTargetView>,
        color: [f32; 4],
    ) -> Result<()> {
        let render_target = render_target.ok_or_else(|| {
            Error::InvalidArgument("render target is null".to_string())
        })?;
        unsafe {
            self.context.ClearRenderTargetView(render_target, &color);
        }
        Ok(())
    }

    /// Clear the depth and/or stencil aspects of a depth-stencil view
    pub fn clear_depth_stencil(
        &self,
        view: &ID3D11DepthStencilView,
        flags: DepthStencilClearFlags,
        depth: f32,
        stencil: u8,
    ) {
        unsafe {
            self.context
                .ClearDepthStencilView(view, clear_flags_to_d3d(flags), depth, stencil);
        }
    }

    /// Bind the output-merger render target and depth-stencil view
    pub fn set_render_targets(
        &self,
        render_target: Option<&ID3D11RenderTargetView>,
        depth_stencil: Option<&ID3D11DepthStencilView>,
    ) {
        let targets = [render_target.cloned()];
        unsafe {
            self.context
                .OMSetRenderTargets(Some(&targets), depth_stencil);
        }
    }

    /// Set the input-assembler primitive topology
    pub fn set_primitive_topology(&self, topology: PrimitiveTopology) {
        unsafe {
            self.context
                .IASetPrimitiveTopology(topology_to_d3d(topology));
        }
    }

    /// Bind a vertex buffer to input slot 0
    pub fn set_vertex_buffer(&self, buffer: &ID3D11Buffer, stride: u32, offset: u32) {
        let buffers = [Some(buffer.clone())];
        unsafe {
            self.context.IASetVertexBuffers(
                0,
                1,
                Some(buffers.as_ptr()),
                Some(&stride),
                Some(&offset),
            );
        }
    }

    /// Bind a 32-bit index buffer
    pub fn set_index_buffer(&self, buffer: &ID3D11Buffer, offset: u32) {
        unsafe {
            self.context
                .IASetIndexBuffer(buffer, DXGI_FORMAT_R32_UINT, offset);
        }
    }

    /// Set the input layout
    pub fn set_input_layout(&self, input_layout: &ID3D11InputLayout) {
        unsafe {
            self.context.IASetInputLayout(input_layout);
        }
    }

    /// Set the rasterizer state
    pub fn set_rasterizer_state(&self, state: &ID3D11RasterizerState) {
        unsafe {
            self.context.RSSetState(state);
        }
    }

    /// Set the rasterizer viewport
    pub fn set_viewport(&self, viewport: Viewport) {
        let native = D3D11_VIEWPORT {
            TopLeftX: viewport.x,
            TopLeftY: viewport.y,
            Width: viewport.width,
            Height: viewport.height,
            MinDepth: viewport.min_depth,
            MaxDepth: viewport.max_depth,
        };
        unsafe {
            self.context.RSSetViewports(Some(&[native]));
        }
    }

    /// Bind the vertex shader
    pub fn set_vertex_shader(&self, shader: &ID3D11VertexShader) {
        unsafe {
            self.context.VSSetShader(shader, None);
        }
    }

    /// Bind the pixel shader
    pub fn set_pixel_shader(&self, shader: &ID3D11PixelShader) {
        unsafe {
            self.context.PSSetShader(shader, None);
        }
    }

    /// Bind a sampler to the given stage's slot family
    ///
    /// `ShaderStage::None` is a successful no-op: no native call is
    /// issued and no error is raised. `None` for the sampler unbinds the
    /// slot.
    pub fn set_sampler(
        &self,
        stage: ShaderStage,
        sampler: Option<&ID3D11SamplerState>,
        slot: u32,
    ) {
        let samplers = [sampler.cloned()];
        unsafe {
            match stage {
                ShaderStage::None => {}
                ShaderStage::Vertex => self.context.VSSetSamplers(slot, Some(&samplers)),
                ShaderStage::Pixel => self.context.PSSetSamplers(slot, Some(&samplers)),
                ShaderStage::Hull => self.context.HSSetSamplers(slot, Some(&samplers)),
                ShaderStage::Domain => self.context.DSSetSamplers(slot, Some(&samplers)),
                ShaderStage::Geometry => self.context.GSSetSamplers(slot, Some(&samplers)),
                ShaderStage::Compute => self.context.CSSetSamplers(slot, Some(&samplers)),
            }
        }
    }

    /// Bind a shader resource view to the given stage's slot family
    ///
    /// `ShaderStage::None` is a successful no-op: no native call is
    /// issued and no error is raised. `None` for the resource unbinds
    /// the slot.
    pub fn set_shader_resource(
        &self,
        stage: ShaderStage,
        resource: Option<&ID3D11ShaderResourceView>,
        slot: u32,
    ) {
        let resources = [resource.cloned()];
        unsafe {
            match stage {
                ShaderStage::None => {}
                ShaderStage::Vertex => {
                    self.context.VSSetShaderResources(slot, Some(&resources))
                }
                ShaderStage::Pixel => {
                    self.context.PSSetShaderResources(slot, Some(&resources))
                }
                ShaderStage::Hull => {
                    self.context.HSSetShaderResources(slot, Some(&resources))
                }
                ShaderStage::Domain => {
                    self.context.DSSetShaderResources(slot, Some(&resources))
                }
                ShaderStage::Geometry => {
                    self.context.GSSetShaderResources(slot, Some(&resources))
                }
                ShaderStage::Compute => {
                    self.context.CSSetShaderResources(slot, Some(&resources))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "d3d11_command_list_tests.rs"]
mod tests;
