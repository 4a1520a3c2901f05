// SPDX-License-Identifier: MPL-2.0
//! Image file resolution for portfolio photos.
//!
//! Files follow a fixed layout under an assets root:
//!
//! ```text
//! {root}/small/{category}/{index}.jpg   thumbnails
//! {root}/large/{category}/{index}.jpg   modal images
//! {root}/cover/cover-image.jpg          about section cover
//! ```
//!
//! `index` is the photo's position within its category (see
//! [`Catalog::photos_in`](super::Catalog::photos_in)). Whether a file exists is
//! not checked here; a missing file renders as an empty image.

use std::path::{Path, PathBuf};

/// Default assets root, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets/images";

const PHOTO_EXTENSION: &str = "jpg";
const COVER_IMAGE: &str = "cover/cover-image.jpg";

/// Which rendition of a photo to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSize {
    /// Gallery thumbnail.
    Small,
    /// Zoomed image shown in the modal.
    Large,
}

impl AssetSize {
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetSize::Small => "small",
            AssetSize::Large => "large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn photo(&self, size: AssetSize, category: &str, index: usize) -> PathBuf {
        self.root
            .join(size.dir_name())
            .join(category)
            .join(format!("{index}.{PHOTO_EXTENSION}"))
    }

    #[must_use]
    pub fn cover(&self) -> PathBuf {
        self.root.join(COVER_IMAGE)
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_and_large_paths_follow_layout() {
        let resolver = AssetResolver::new("/srv/portfolio");
        assert_eq!(
            resolver.photo(AssetSize::Small, "food", 2),
            PathBuf::from("/srv/portfolio/small/food/2.jpg")
        );
        assert_eq!(
            resolver.photo(AssetSize::Large, "portraits", 0),
            PathBuf::from("/srv/portfolio/large/portraits/0.jpg")
        );
    }

    #[test]
    fn cover_path_is_under_root() {
        let resolver = AssetResolver::default();
        assert_eq!(
            resolver.cover(),
            PathBuf::from("assets/images/cover/cover-image.jpg")
        );
    }
}
