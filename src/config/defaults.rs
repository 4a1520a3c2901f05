// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.

pub use crate::catalog::assets::DEFAULT_ASSETS_DIR;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;

/// Minimum window width; below this the navigation row wraps badly.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Notification Keys
// ==========================================================================

/// Warning shown when `settings.toml` exists but cannot be used.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

/// Warning shown when the configured catalog cannot be used.
pub const CATALOG_LOAD_WARNING_KEY: &str = "notification-catalog-load-error";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
