// SPDX-License-Identifier: MPL-2.0
//! `oh_snap` is a single-window photography portfolio built with the Iced GUI
//! framework.
//!
//! A navigation header selects a photo category, the gallery shows that
//! category's thumbnails with a zoom modal, an about section introduces the
//! photographer, and a contact form validates its fields as they are left.
//! Strings are localized with Fluent; preferences come from a TOML settings
//! file.

#![doc(html_root_url = "https://docs.rs/oh_snap/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod validation;
