// SPDX-License-Identifier: MPL-2.0
//! Zoomed photo overlay.
//!
//! A pure function of the photo being shown. It takes `&CurrentPhoto`, never
//! an `Option`, so it cannot be rendered without a photo.

use crate::catalog::assets::{AssetResolver, AssetSize};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::photo_list::CurrentPhoto;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, image, opaque, Column, Container, Text},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetResolver,
    pub photo: &'a CurrentPhoto,
}

/// Renders the backdrop and card. `on_close` is emitted by the close button.
pub fn view<'a, M: Clone + 'a>(ctx: ViewContext<'a>, on_close: M) -> Element<'a, M> {
    let photo = ctx.photo;

    let title = Text::new(photo.name.as_str()).size(typography::TITLE_SM);

    let picture = image(image::Handle::from_path(ctx.assets.photo(
        AssetSize::Large,
        &photo.category,
        photo.index,
    )))
    .width(Length::Fixed(sizing::MODAL_PHOTO))
    .content_fit(ContentFit::Contain);

    let description = Text::new(photo.description.as_str()).size(typography::BODY);

    let close = button(Text::new(ctx.i18n.tr("modal-close")).size(typography::BODY))
        .on_press(on_close)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title)
            .push(picture)
            .push(description)
            .push(close),
    )
    .padding(spacing::LG)
    .max_width(sizing::MODAL_PHOTO + 2.0 * spacing::LG)
    .style(styles::container::modal_card);

    opaque(
        Container::new(card)
            .center(Length::Fill)
            .style(styles::container::modal_backdrop),
    )
}
