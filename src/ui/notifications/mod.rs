// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`Notification`] carries a severity and an i18n message key
//! - [`Manager`] queues toasts, caps the visible count and auto-dismisses
//! - [`Toast`] renders the overlay
//!
//! Success and info toasts last 3s, warnings 5s, errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
