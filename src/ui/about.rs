// SPDX-License-Identifier: MPL-2.0
//! "Who am I?" section: heading, cover image and a short bio.
//!
//! Static content. The section emits no messages, so it is generic over the
//! caller's message type.

use crate::catalog::assets::AssetResolver;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{image, Column, Container, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetResolver,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let heading = Text::new(ctx.i18n.tr("about-heading")).size(typography::TITLE_LG);

    let cover = image(image::Handle::from_path(ctx.assets.cover()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::COVER_HEIGHT))
        .content_fit(ContentFit::Cover);

    let bio = Text::new(ctx.i18n.tr("about-bio")).size(typography::BODY_LG);

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(heading)
        .push(cover)
        .push(bio);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}
