//! Unit tests for the GPU-free parts of the render-target setup
//!
//! Handle-producing paths are covered by the integration tests in the
//! core crate (run with `-- --ignored` on a machine with a GPU); here we
//! pin the extent derivation, where a width/height mix-up would
//! otherwise survive every square-window test run.

use super::framebuffer_extent;
use borealis_gfx::borealis::render::PresentationParameters;

#[test]
fn test_framebuffer_extent_matches_back_buffer() {
    let params = PresentationParameters::new(1280, 720);
    let extent = framebuffer_extent(&params);
    assert_eq!(extent.width, 1280);
    assert_eq!(extent.height, 720);
}

#[test]
fn test_framebuffer_height_comes_from_height_field_not_width() {
    // Rectangular on purpose; each axis is asserted against its own
    // source field.
    let mut params = PresentationParameters::new(1920, 1080);
    assert_eq!(framebuffer_extent(&params).height, 1080);

    params.back_buffer_height = 900;
    let extent = framebuffer_extent(&params);
    assert_eq!(extent.width, 1920, "width must track the width field");
    assert_eq!(extent.height, 900, "height must track the height field");
}

#[test]
fn test_framebuffer_width_comes_from_width_field_not_height() {
    let mut params = PresentationParameters::new(640, 480);
    params.back_buffer_width = 1024;
    let extent = framebuffer_extent(&params);
    assert_eq!(extent.width, 1024);
    assert_eq!(extent.height, 480);
}
