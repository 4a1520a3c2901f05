// SPDX-License-Identifier: MPL-2.0
//! Shared selection state: the current category and the contact flag.
//!
//! Lives at the root because the navbar, the gallery and the layout all read
//! it. Observers registered with [`Selection::subscribe`] are told about every
//! committed category change.

use crate::catalog::{Catalog, Category};
use std::fmt;

/// Notified after the current category has changed.
pub trait SelectionObserver {
    fn category_committed(&mut self, category: &Category);
}

pub struct Selection {
    categories: Vec<Category>,
    current: usize,
    contact_selected: bool,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("current_category", &self.current_category().name)
            .field("contact_selected", &self.contact_selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Selection {
    /// Starts on the first category of `catalog` with contact not selected.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            categories: catalog.categories().to_vec(),
            current: 0,
            contact_selected: false,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn current_category(&self) -> &Category {
        &self.categories[self.current]
    }

    #[must_use]
    pub fn contact_selected(&self) -> bool {
        self.contact_selected
    }

    /// Makes `name` the current category.
    ///
    /// Returns `true` if the category changed. Observers run after the new
    /// value is stored, once per change. Unknown names are ignored.
    pub fn set_current_category(&mut self, name: &str) -> bool {
        let Some(index) = self.categories.iter().position(|c| c.name == name) else {
            tracing::warn!(category = name, "ignoring unknown category");
            return false;
        };
        if index == self.current {
            return false;
        }

        self.current = index;
        tracing::debug!(category = name, "category selected");

        let category = &self.categories[self.current];
        for observer in &mut self.observers {
            observer.category_committed(category);
        }
        true
    }

    pub fn set_contact_selected(&mut self, selected: bool) {
        if self.contact_selected != selected {
            tracing::debug!(contact_selected = selected, "contact toggled");
        }
        self.contact_selected = selected;
    }

    /// Registers `observer` and immediately replays the current category.
    pub fn subscribe(&mut self, mut observer: Box<dyn SelectionObserver>) {
        observer.category_committed(self.current_category());
        self.observers.push(observer);
    }
}
