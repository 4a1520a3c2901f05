// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header is always on top. Below it the window shows either the
//! portfolio (gallery then about) or the contact form, never both.

use super::Message;
use crate::catalog::assets::AssetResolver;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::contact;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::photo_list;
use iced::{
    widget::{scrollable, Column, Container, Id, Stack},
    Element, Length,
};

/// Id of the scrollable holding the gallery and about sections.
pub const PORTFOLIO_SCROLLABLE: &str = "portfolio-scrollable";

/// One block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Navigation,
    Gallery,
    About,
    Contact,
}

/// Which sections are rendered, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Portfolio,
    Contact,
}

impl Layout {
    #[must_use]
    pub fn for_selection(contact_selected: bool) -> Self {
        if contact_selected {
            Layout::Contact
        } else {
            Layout::Portfolio
        }
    }

    #[must_use]
    pub fn sections(self) -> &'static [Section] {
        match self {
            Layout::Portfolio => &[Section::Navigation, Section::Gallery, Section::About],
            Layout::Contact => &[Section::Navigation, Section::Contact],
        }
    }

    #[must_use]
    pub fn contains(self, section: Section) -> bool {
        self.sections().contains(&section)
    }
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub assets: &'a AssetResolver,
    pub layout: Layout,
    pub navbar: navbar::ViewContext<'a>,
    pub photo_list: &'a photo_list::State,
    pub contact: &'a contact::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let category = ctx.navbar.current_category;
    let header = navbar::view(ctx.navbar).map(Message::Navbar);

    let gallery_ctx = gallery::ViewContext {
        i18n: ctx.i18n,
        assets: ctx.assets,
        catalog: ctx.catalog,
        category,
        photo_list: ctx.photo_list,
    };

    let body: Element<'_, Message> = match ctx.layout {
        Layout::Portfolio => {
            let sections = Column::new()
                .spacing(spacing::LG)
                .padding(spacing::LG)
                .width(Length::Fill)
                .push(gallery::view(&gallery_ctx).map(Message::PhotoList))
                .push(about::view(about::ViewContext {
                    i18n: ctx.i18n,
                    assets: ctx.assets,
                }));
            scrollable(sections)
                .id(Id::new(PORTFOLIO_SCROLLABLE))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        Layout::Contact => scrollable(
            Container::new(
                contact::view(contact::ViewContext {
                    i18n: ctx.i18n,
                    state: ctx.contact,
                })
                .map(Message::Contact),
            )
            .padding(spacing::LG)
            .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
    };

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.layout == Layout::Portfolio {
        if let Some(modal) = photo_list::view_modal(&gallery_ctx.photo_list_context()) {
            stack = stack.push(modal.map(Message::PhotoList));
        }
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
