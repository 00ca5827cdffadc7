//! Unit tests for presentation.rs

use crate::presentation::{PresentationParameters, Settings};

#[test]
fn test_new_uses_default_settings() {
    let params = PresentationParameters::new(1280, 720);
    assert_eq!(params.back_buffer_width, 1280);
    assert_eq!(params.back_buffer_height, 720);
    assert!(params.window_handle.is_none());
    assert_eq!(params.settings, Settings::default());
}

#[test]
fn test_back_buffer_extent_is_width_then_height() {
    // Deliberately rectangular: a square back buffer would hide a
    // width/height mix-up in the extent plumbing.
    let params = PresentationParameters::new(1920, 1080);
    let (width, height) = params.back_buffer_extent();
    assert_eq!(width, 1920);
    assert_eq!(height, 1080);
    assert_ne!(width, height);
}

#[test]
fn test_extent_height_tracks_height_field_only() {
    let mut params = PresentationParameters::new(800, 600);
    params.back_buffer_height = 480;
    let (width, height) = params.back_buffer_extent();
    assert_eq!(width, 800);
    assert_eq!(height, 480);
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();
    assert!(settings.vsync);
    assert_eq!(settings.preferred_image_count, 3);
}
