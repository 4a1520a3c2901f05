// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::photo_list;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    PhotoList(photo_list::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Catalog file replacing the built-in categories and photos.
    /// Takes precedence over `portfolio.catalog_path` in settings.
    pub catalog: Option<String>,
    /// Image root (`small/`, `large/`, `cover/`).
    /// Takes precedence over `portfolio.assets_dir` in settings.
    pub assets_dir: Option<String>,
}
