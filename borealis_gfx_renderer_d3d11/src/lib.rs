/*!
# Borealis Graphics Layer - Direct3D 11 Backend

Direct3D 11 implementation of the Borealis command-submission path.

This crate owns device bring-up over `D3D11CreateDevice` and the
immediate command list: a stateless forwarding façade over an
`ID3D11DeviceContext` where each operation sets exactly one piece of
pipeline state or issues exactly one draw. Ordering correctness (binding
a shader before drawing, and so on) is entirely the caller's
responsibility.

The backend shares only vocabulary types with `borealis_gfx`; it is not
abstracted together with the Vulkan backend.

Compiles to an empty crate on non-Windows targets.
*/

#[cfg(windows)]
mod d3d11;
#[cfg(windows)]
mod d3d11_command_list;

#[cfg(windows)]
pub use d3d11::D3D11GraphicsDevice;
#[cfg(windows)]
pub use d3d11_command_list::ImmediateCommandList;
