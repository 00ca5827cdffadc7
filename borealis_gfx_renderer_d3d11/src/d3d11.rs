//! D3D11GraphicsDevice - device and immediate-context bring-up
//!
//! Creates the `ID3D11Device` / `ID3D11DeviceContext` pair everything in
//! this backend forwards to. The device context is handed out by clone
//! (COM interfaces are ref-counted), keeping the context an explicit
//! collaborator of the command list rather than an ambient global.

use borealis_gfx::borealis::render::Settings;
use borealis_gfx::borealis::{Error, Result};
use borealis_gfx::{gfx_error, gfx_info};
use windows::Win32::Foundation::HMODULE;
use windows::Win32::Graphics::Direct3D::{
    D3D_DRIVER_TYPE, D3D_DRIVER_TYPE_HARDWARE, D3D_FEATURE_LEVEL, D3D_FEATURE_LEVEL_11_0,
};
use windows::Win32::Graphics::Direct3D11::{
    D3D11CreateDevice, ID3D11Device, ID3D11DeviceContext, D3D11_CREATE_DEVICE_BGRA_SUPPORT,
    D3D11_CREATE_DEVICE_DEBUG, D3D11_SDK_VERSION,
};

use crate::d3d11_command_list::ImmediateCommandList;

/// Direct3D 11 graphics device
///
/// Owns the native device and its immediate context. Single-threaded:
/// the immediate context must only be driven from one thread.
pub struct D3D11GraphicsDevice {
    device: ID3D11Device,
    context: ID3D11DeviceContext,
}

impl D3D11GraphicsDevice {
    /// Create a hardware device at feature level 11.0
    ///
    /// # Arguments
    ///
    /// * `settings` - enables the debug layer when validation is on
    pub fn new(settings: Settings) -> Result<Self> {
        Self::with_driver_type(D3D_DRIVER_TYPE_HARDWARE, settings)
    }

    /// Create a device with an explicit driver type
    ///
    /// `D3D_DRIVER_TYPE_NULL` gives a context that accepts every call
    /// without rendering, which the tests use to exercise the command
    /// list without a GPU.
    pub fn with_driver_type(driver_type: D3D_DRIVER_TYPE, settings: Settings) -> Result<Self> {
        let mut flags = D3D11_CREATE_DEVICE_BGRA_SUPPORT;
        if settings.enable_validation {
            flags |= D3D11_CREATE_DEVICE_DEBUG;
        }

        let feature_levels = [D3D_FEATURE_LEVEL_11_0];
        let mut device: Option<ID3D11Device> = None;
        let mut context: Option<ID3D11DeviceContext> = None;
        let mut achieved_level: D3D_FEATURE_LEVEL = D3D_FEATURE_LEVEL_11_0;

        unsafe {
            D3D11CreateDevice(
                None,
                driver_type,
                HMODULE::default(),
                flags,
                Some(&feature_levels),
                D3D11_SDK_VERSION,
                Some(&mut device),
                Some(&mut achieved_level),
                Some(&mut context),
            )
            .map_err(|e| {
                gfx_error!("borealis::d3d11", "D3D11CreateDevice failed: {:?}", e);
                Error::InitializationFailed(format!("D3D11CreateDevice failed: {:?}", e))
            })?;
        }

        let device = device.ok_or_else(|| {
            Error::InitializationFailed("D3D11CreateDevice returned no device".to_string())
        })?;
        let context = context.ok_or_else(|| {
            Error::InitializationFailed("D3D11CreateDevice returned no device context".to_string())
        })?;

        gfx_info!(
            "borealis::d3d11",
            "Device created at feature level {:?}",
            achieved_level
        );

        Ok(Self { device, context })
    }

    /// The native device
    pub fn device(&self) -> &ID3D11Device {
        &self.device
    }

    /// The immediate device context
    pub fn immediate_context(&self) -> &ID3D11DeviceContext {
        &self.context
    }

    /// Create a command list over this device's immediate context
    pub fn create_command_list(&self) -> ImmediateCommandList {
        ImmediateCommandList::new(self.context.clone())
    }
}
