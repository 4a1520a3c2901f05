// SPDX-License-Identifier: MPL-2.0
//! Navigation header.
//!
//! Shows the brand, an "About me" link, the "Contact" entry and one entry per
//! category. The header owns only its "About focused" flag; the current
//! category and the contact flag belong to the root and are passed down.

use crate::catalog::Category;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::validation::capitalize_first_letter;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub categories: &'a [Category],
    pub current_category: &'a Category,
    pub contact_selected: bool,
}

/// Highlight state owned by the navbar itself.
#[derive(Debug, Clone, Default)]
pub struct State {
    about_focused: bool,
}

impl State {
    /// True right after "About me" was picked, until another entry is.
    #[must_use]
    pub fn about_focused(&self) -> bool {
        self.about_focused
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(String),
    SelectAbout,
    SelectContact,
}

/// Events propagated to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CategorySelected(String),
    AboutSelected,
    ContactSelected,
}

/// One clickable entry of the header, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    About,
    Contact,
    Category(&'a str),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectCategory(name) => {
            state.about_focused = false;
            Event::CategorySelected(name)
        }
        Message::SelectAbout => {
            state.about_focused = true;
            Event::AboutSelected
        }
        Message::SelectContact => {
            state.about_focused = false;
            Event::ContactSelected
        }
    }
}

impl<'a> ViewContext<'a> {
    /// Entries in display order: About, Contact, then categories.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry<'a>> {
        let mut entries = vec![Entry::About, Entry::Contact];
        entries.extend(
            self.categories
                .iter()
                .map(|category| Entry::Category(category.name.as_str())),
        );
        entries
    }

    /// Highlight rule. "About me" is a scroll link and is never highlighted.
    #[must_use]
    pub fn is_active(&self, entry: Entry<'_>) -> bool {
        match entry {
            Entry::About => false,
            Entry::Contact => self.contact_selected,
            Entry::Category(name) => {
                name == self.current_category.name
                    && !self.contact_selected
                    && !self.state.about_focused
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand")).size(typography::TITLE_MD);

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for entry in ctx.entries() {
        links = links.push(entry_button(&ctx, entry));
    }

    let bar = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(links);

    Container::new(bar)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

fn entry_button<'a>(ctx: &ViewContext<'a>, entry: Entry<'a>) -> Element<'a, Message> {
    let (label, message) = match entry {
        Entry::About => (ctx.i18n.tr("nav-about"), Message::SelectAbout),
        Entry::Contact => (ctx.i18n.tr("nav-contact"), Message::SelectContact),
        Entry::Category(name) => (
            capitalize_first_letter(name),
            Message::SelectCategory(name.to_string()),
        ),
    };

    let style = if ctx.is_active(entry) {
        styles::button::selected
    } else {
        styles::button::nav_link
    };

    button(Text::new(label).size(typography::BODY_LG))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn context<'a>(
        i18n: &'a I18n,
        state: &'a State,
        catalog: &'a Catalog,
        current: &'a str,
        contact_selected: bool,
    ) -> ViewContext<'a> {
        ViewContext {
            i18n,
            state,
            categories: catalog.categories(),
            current_category: catalog.category(current).unwrap(),
            contact_selected,
        }
    }

    fn active_count(ctx: &ViewContext<'_>) -> usize {
        ctx.entries()
            .into_iter()
            .filter(|entry| ctx.is_active(*entry))
            .count()
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let catalog = Catalog::builtin();
        let _element = view(context(&i18n, &state, &catalog, "commercial", false));
    }

    #[test]
    fn entries_list_about_contact_then_categories() {
        let i18n = I18n::default();
        let state = State::default();
        let catalog = Catalog::builtin();
        let ctx = context(&i18n, &state, &catalog, "commercial", false);

        let entries = ctx.entries();
        assert_eq!(entries[0], Entry::About);
        assert_eq!(entries[1], Entry::Contact);
        assert_eq!(entries.len(), 2 + catalog.categories().len());
    }

    #[test]
    fn current_category_is_the_only_active_entry() {
        let i18n = I18n::default();
        let state = State::default();
        let catalog = Catalog::builtin();

        for category in catalog.categories() {
            let ctx = context(&i18n, &state, &catalog, &category.name, false);
            assert!(ctx.is_active(Entry::Category(&category.name)));
            assert_eq!(active_count(&ctx), 1);
        }
    }

    #[test]
    fn contact_is_the_only_active_entry_when_selected() {
        let i18n = I18n::default();
        let state = State::default();
        let catalog = Catalog::builtin();
        let ctx = context(&i18n, &state, &catalog, "food", true);

        assert!(ctx.is_active(Entry::Contact));
        assert!(!ctx.is_active(Entry::Category("food")));
        assert_eq!(active_count(&ctx), 1);
    }

    #[test]
    fn nothing_is_active_right_after_about() {
        let i18n = I18n::default();
        let mut state = State::default();
        let catalog = Catalog::builtin();

        assert_eq!(update(&mut state, Message::SelectAbout), Event::AboutSelected);
        let ctx = context(&i18n, &state, &catalog, "food", false);
        assert_eq!(active_count(&ctx), 0);
    }

    #[test]
    fn selecting_a_category_clears_about_focus() {
        let mut state = State::default();
        update(&mut state, Message::SelectAbout);

        let event = update(&mut state, Message::SelectCategory("food".into()));
        assert_eq!(event, Event::CategorySelected("food".into()));
        assert!(!state.about_focused());
    }

    #[test]
    fn selecting_contact_clears_about_focus() {
        let mut state = State::default();
        update(&mut state, Message::SelectAbout);

        assert_eq!(
            update(&mut state, Message::SelectContact),
            Event::ContactSelected
        );
        assert!(!state.about_focused());
    }
}
