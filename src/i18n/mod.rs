// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files live in `assets/i18n/` and are embedded at compile time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available
//! - `MISSING: <key>` marker for untranslated keys

pub mod fluent;
