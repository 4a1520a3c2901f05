// SPDX-License-Identifier: MPL-2.0
//! Application root: owns the catalog, the shared selection and the state of
//! every child component, and routes messages between them.
//!
//! Startup resolves settings, catalog and asset root from flags and the
//! settings file. Any loading failure falls back to defaults and shows a
//! warning toast instead of aborting.

mod message;
pub mod paths;
pub mod selection;
mod subscription;
pub mod title;
mod update;
pub mod view;

pub use message::{Flags, Message};
pub use update::{CONTACT_FAILED_KEY, CONTACT_SENT_KEY};

use crate::catalog::assets::AssetResolver;
use crate::catalog::{self, Catalog};
use crate::config::{self, Config, CATALOG_LOAD_WARNING_KEY};
use crate::i18n::fluent::I18n;
use crate::ui::contact::{self, ContactSink, LogSink};
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::photo_list;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use selection::Selection;
use std::fmt;
use std::path::PathBuf;
use title::WindowTitle;
use update::UpdateContext;
use view::Layout;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: Theme,
    catalog: Catalog,
    assets: AssetResolver,
    selection: Selection,
    title: WindowTitle,
    navbar: navbar::State,
    photo_list: photo_list::State,
    contact: contact::State,
    sink: Box<dyn ContactSink>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selection)
            .field("modal_open", &self.photo_list.is_open())
            .field("assets", &self.assets.root())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the root around an already loaded catalog.
    ///
    /// Registers the window title as a selection observer, so the title is
    /// the first category's name from the start.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, i18n: I18n, assets: AssetResolver) -> Self {
        let mut selection = Selection::new(&catalog);
        let title = WindowTitle::new();
        selection.subscribe(Box::new(title.clone()));

        Self {
            i18n,
            theme: ThemeMode::default().theme(),
            catalog,
            assets,
            selection,
            title,
            navbar: navbar::State::default(),
            photo_list: photo_list::State::default(),
            contact: contact::State::default(),
            sink: Box::new(LogSink),
            notifications: notifications::Manager::new(),
        }
    }

    /// Replaces the destination of contact submissions.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn ContactSink>) -> Self {
        self.sink = sink;
        self
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.portfolio.catalog_path.clone());
        let (catalog, catalog_warning) = load_catalog(catalog_path);

        let assets = AssetResolver::new(
            flags
                .assets_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| config.portfolio.assets_dir_or_default()),
        );

        tracing::info!(
            locale = %i18n.current_locale(),
            categories = catalog.categories().len(),
            photos = catalog.photos().len(),
            assets = %assets.root().display(),
            "portfolio ready"
        );

        let mut app = Self::with_catalog(catalog, i18n, assets);
        app.apply_config(&config);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(notification) = catalog_warning {
            app.notifications.push(notification);
        }

        (app, Task::none())
    }

    /// Resolves the theme once; `theme()` runs on every frame.
    fn apply_config(&mut self, config: &Config) {
        self.theme = config.general.theme_mode.theme();
    }

    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = UpdateContext {
            catalog: &self.catalog,
            selection: &mut self.selection,
            navbar: &mut self.navbar,
            photo_list: &mut self.photo_list,
            contact: &mut self.contact,
            sink: self.sink.as_ref(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::PhotoList(message) => update::handle_photo_list_message(&mut ctx, message),
            Message::Contact(message) => update::handle_contact_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, &message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            assets: &self.assets,
            layout: self.layout(),
            navbar: navbar::ViewContext {
                i18n: &self.i18n,
                state: &self.navbar,
                categories: self.catalog.categories(),
                current_category: self.selection.current_category(),
                contact_selected: self.selection.contact_selected(),
            },
            photo_list: &self.photo_list,
            contact: &self.contact,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::for_selection(self.selection.contact_selected())
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Registers another observer of category changes.
    pub fn observe_selection(&mut self, observer: Box<dyn selection::SelectionObserver>) {
        self.selection.subscribe(observer);
    }

    #[must_use]
    pub fn navbar(&self) -> &navbar::State {
        &self.navbar
    }

    #[must_use]
    pub fn photo_list(&self) -> &photo_list::State {
        &self.photo_list
    }

    #[must_use]
    pub fn contact(&self) -> &contact::State {
        &self.contact
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

/// Loads the catalog file if one is configured.
///
/// A broken file falls back to the built-in catalog together with a warning
/// notification naming the path.
fn load_catalog(path: Option<PathBuf>) -> (Catalog, Option<Notification>) {
    let Some(path) = path else {
        return (Catalog::builtin(), None);
    };

    match catalog::load_from_path(&path) {
        Ok(catalog) => {
            tracing::debug!(path = %path.display(), "catalog loaded");
            (catalog, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to built-in catalog");
            let warning = Notification::warning(CATALOG_LOAD_WARNING_KEY)
                .with_arg("path", path.display().to_string());
            (Catalog::builtin(), Some(warning))
        }
    }
}
