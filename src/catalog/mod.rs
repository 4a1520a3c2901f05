// SPDX-License-Identifier: MPL-2.0
//! Portfolio catalog: the categories shown in the navigation and the photos
//! shown in the gallery.
//!
//! The catalog is plain configuration data. The application owns exactly one
//! [`Catalog`], built at startup either from the built-in portfolio
//! ([`Catalog::builtin`]) or from a TOML file ([`load_from_path`]), and hands
//! borrowed slices of it down to the views.
//!
//! # File format
//!
//! ```toml
//! [[categories]]
//! name = "food"
//! description = "Delicious delicacies"
//!
//! [[photos]]
//! name = "Pancakes"
//! category = "food"
//! description = "Stacked high with maple syrup"
//! ```

pub mod assets;
mod builtin;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A named grouping used to filter the gallery and label navigation entries.
///
/// `name` is the identity key: two categories never share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A single portfolio photo. `category` refers to a [`Category::name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl Photo {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Validated set of categories and photos.
///
/// Guarantees: at least one category, unique category names, and every photo
/// belongs to a known category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    photos: Vec<Photo>,
}

impl Catalog {
    /// Builds a catalog, rejecting data that breaks the catalog guarantees.
    pub fn new(categories: Vec<Category>, photos: Vec<Photo>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::Catalog("catalog has no categories".to_string()));
        }

        let mut names = HashSet::new();
        for category in &categories {
            if !names.insert(category.name.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate category `{}`",
                    category.name
                )));
            }
        }

        if let Some(orphan) = photos
            .iter()
            .find(|photo| !names.contains(photo.category.as_str()))
        {
            return Err(Error::Catalog(format!(
                "photo `{}` refers to unknown category `{}`",
                orphan.name, orphan.category
            )));
        }

        Ok(Self { categories, photos })
    }

    /// The portfolio that ships with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            categories: builtin::categories(),
            photos: builtin::photos(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// The category selected when the application starts.
    #[must_use]
    pub fn first_category(&self) -> &Category {
        // Non-empty by construction.
        &self.categories[0]
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Photos whose category is `category`, in catalog order.
    ///
    /// The position of a photo in this list is its resolved index, the key
    /// used to locate its image files (see [`assets`]).
    #[must_use]
    pub fn photos_in(&self, category: &str) -> Vec<&Photo> {
        self.photos
            .iter()
            .filter(|photo| photo.category == category)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parses a catalog from TOML text.
pub fn from_toml_str(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;
    Catalog::new(file.categories, file.photos)
}

/// Loads and validates a catalog file.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content)
}
