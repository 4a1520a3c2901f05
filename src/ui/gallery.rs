// SPDX-License-Identifier: MPL-2.0
//! Gallery section for the selected category.
//!
//! Heading, description and the photo grid. Holds no state: everything comes
//! from the root through [`ViewContext`].

use crate::catalog::assets::AssetResolver;
use crate::catalog::{Catalog, Category};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::photo_list;
use crate::ui::styles;
use crate::validation::capitalize_first_letter;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetResolver,
    pub catalog: &'a Catalog,
    pub category: &'a Category,
    pub photo_list: &'a photo_list::State,
}

impl<'a> ViewContext<'a> {
    #[must_use]
    pub fn heading(&self) -> String {
        capitalize_first_letter(&self.category.name)
    }

    /// Photo list context scoped to the selected category.
    #[must_use]
    pub fn photo_list_context(&self) -> photo_list::ViewContext<'a> {
        photo_list::ViewContext {
            i18n: self.i18n,
            assets: self.assets,
            state: self.photo_list,
            category: &self.category.name,
            photos: self.catalog.photos_in(&self.category.name),
        }
    }
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, photo_list::Message> {
    let list = ctx.photo_list_context();
    let count = list.photos.len().to_string();

    let content = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(ctx.heading()).size(typography::TITLE_LG))
        .push(Text::new(ctx.category.description.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("gallery-photo-count", &[("count", count.as_str())]),
            )
            .size(typography::CAPTION),
        )
        .push(photo_list::view(&list));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_capitalized_category_name() {
        let i18n = I18n::default();
        let assets = AssetResolver::default();
        let catalog = Catalog::builtin();
        let state = photo_list::State::default();
        let ctx = ViewContext {
            i18n: &i18n,
            assets: &assets,
            catalog: &catalog,
            category: catalog.category("landscape").unwrap(),
            photo_list: &state,
        };

        assert_eq!(ctx.heading(), "Landscape");
    }

    #[test]
    fn photo_list_is_scoped_to_category() {
        let i18n = I18n::default();
        let assets = AssetResolver::default();
        let catalog = Catalog::builtin();
        let state = photo_list::State::default();
        let ctx = ViewContext {
            i18n: &i18n,
            assets: &assets,
            catalog: &catalog,
            category: catalog.category("portraits").unwrap(),
            photo_list: &state,
        };

        let list = ctx.photo_list_context();
        assert_eq!(list.category, "portraits");
        assert!(list.photos.iter().all(|p| p.category == "portraits"));
        assert_eq!(list.photos.len(), 4);
    }

    #[test]
    fn gallery_view_renders() {
        let i18n = I18n::default();
        let assets = AssetResolver::default();
        let catalog = Catalog::builtin();
        let state = photo_list::State::default();
        let ctx = ViewContext {
            i18n: &i18n,
            assets: &assets,
            catalog: &catalog,
            category: catalog.first_category(),
            photo_list: &state,
        };

        let _element = view(&ctx);
    }
}
