// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of one category, plus the state of the zoom modal.
//!
//! The list filters the catalog down to one category and addresses each
//! thumbnail by its position within that filtered list. That position is
//! also the asset index, so `small/<category>/<index>.jpg` and
//! `large/<category>/<index>.jpg` belong to the same photo.

use crate::catalog::assets::{AssetResolver, AssetSize};
use crate::catalog::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::modal;
use crate::ui::styles;
use iced::{
    widget::{button, image, Row},
    ContentFit, Element, Length,
};

/// The photo shown in the modal together with its resolved index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentPhoto {
    pub name: String,
    pub category: String,
    pub description: String,
    pub index: usize,
}

impl CurrentPhoto {
    #[must_use]
    pub fn new(photo: &Photo, index: usize) -> Self {
        Self {
            name: photo.name.clone(),
            category: photo.category.clone(),
            description: photo.description.clone(),
            index,
        }
    }
}

/// Modal state. `is_open` implies `current.is_some()`.
#[derive(Debug, Clone, Default)]
pub struct State {
    current: Option<CurrentPhoto>,
    is_open: bool,
}

impl State {
    /// Records the photo and shows the modal.
    pub fn open(&mut self, photo: &Photo, index: usize) {
        self.current = Some(CurrentPhoto::new(photo, index));
        self.is_open = true;
    }

    /// Hides the modal. Closing a closed modal does nothing.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Last opened photo. Kept after closing.
    #[must_use]
    pub fn current(&self) -> Option<&CurrentPhoto> {
        self.current.as_ref()
    }

    /// The photo to draw in the modal, if the modal is open.
    #[must_use]
    pub fn open_photo(&self) -> Option<&CurrentPhoto> {
        self.current.as_ref().filter(|_| self.is_open)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail at this position of the filtered list was clicked.
    Open { index: usize },
    Close,
}

/// Applies `message`. `photos` is the filtered list the indices refer to.
pub fn update(state: &mut State, message: Message, photos: &[&Photo]) {
    match message {
        Message::Open { index } => {
            let Some(photo) = photos.get(index) else {
                tracing::debug!(index, len = photos.len(), "ignoring click on stale thumbnail");
                return;
            };
            tracing::debug!(photo = %photo.name, index, "opening photo");
            state.open(photo, index);
        }
        Message::Close => state.close(),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetResolver,
    pub state: &'a State,
    pub category: &'a str,
    pub photos: Vec<&'a Photo>,
}

/// Thumbnail grid.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let thumbnails = (0..ctx.photos.len()).map(|index| -> Element<'a, Message> {
        let thumbnail = image(image::Handle::from_path(ctx.assets.photo(
            AssetSize::Small,
            ctx.category,
            index,
        )))
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .content_fit(ContentFit::Cover);

        button(thumbnail)
            .on_press(Message::Open { index })
            .padding(spacing::XXS)
            .style(styles::button::thumbnail)
            .into()
    });

    Row::with_children(thumbnails)
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}

/// Modal overlay, present only while a photo is open.
pub fn view_modal<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    ctx.state.open_photo().map(|photo| {
        modal::view(
            modal::ViewContext {
                i18n: ctx.i18n,
                assets: ctx.assets,
                photo,
            },
            Message::Close,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn starts_closed_without_photo() {
        let state = State::default();
        assert!(!state.is_open());
        assert!(state.current().is_none());
        assert!(state.open_photo().is_none());
    }

    #[test]
    fn open_records_photo_and_index() {
        let catalog = Catalog::builtin();
        let photos = catalog.photos_in("food");
        let mut state = State::default();

        update(&mut state, Message::Open { index: 2 }, &photos);

        assert!(state.is_open());
        let current = state.current().unwrap();
        assert_eq!(current.index, 2);
        assert_eq!(current.name, photos[2].name);
        assert_eq!(current.category, "food");
    }

    #[test]
    fn close_sets_closed_and_is_idempotent() {
        let catalog = Catalog::builtin();
        let photos = catalog.photos_in("landscape");
        let mut state = State::default();
        update(&mut state, Message::Open { index: 0 }, &photos);

        update(&mut state, Message::Close, &photos);
        assert!(!state.is_open());

        update(&mut state, Message::Close, &photos);
        assert!(!state.is_open());
        assert!(state.current().is_some());
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let catalog = Catalog::builtin();
        let photos = catalog.photos_in("portraits");
        let mut state = State::default();

        update(&mut state, Message::Open { index: photos.len() }, &photos);
        assert!(!state.is_open());
    }

    #[test]
    fn reopening_replaces_current_photo() {
        let catalog = Catalog::builtin();
        let photos = catalog.photos_in("commercial");
        let mut state = State::default();

        update(&mut state, Message::Open { index: 1 }, &photos);
        update(&mut state, Message::Close, &photos);
        update(&mut state, Message::Open { index: 3 }, &photos);

        assert!(state.is_open());
        assert_eq!(state.current().unwrap().index, 3);
    }

    #[test]
    fn views_render_open_and_closed() {
        let i18n = I18n::default();
        let assets = AssetResolver::default();
        let catalog = Catalog::builtin();
        let mut state = State::default();

        {
            let ctx = ViewContext {
                i18n: &i18n,
                assets: &assets,
                state: &state,
                category: "food",
                photos: catalog.photos_in("food"),
            };
            let _grid = view(&ctx);
            assert!(view_modal(&ctx).is_none());
        }

        let photos = catalog.photos_in("food");
        state.open(photos[0], 0);
        let ctx = ViewContext {
            i18n: &i18n,
            assets: &assets,
            state: &state,
            category: "food",
            photos,
        };
        assert!(view_modal(&ctx).is_some());
    }
}
