// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a borrowed `ViewContext`, emits its own `Message`, and reports
//! outcomes to its owner as an `Event`.
//!
//! # Sections
//!
//! - [`navbar`] - Brand, about link, contact entry and category entries
//! - [`gallery`] - Heading and description of the selected category
//! - [`photo_list`] - Thumbnails of one category and the modal state
//! - [`modal`] - Zoomed photo overlay
//! - [`about`] - "Who am I?" section
//! - [`contact`] - Contact form and its validation state
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toasts for user feedback
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod photo_list;
pub mod styles;
pub mod theming;
