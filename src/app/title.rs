// SPDX-License-Identifier: MPL-2.0
//! Window title driven by the selected category.

use super::selection::SelectionObserver;
use crate::catalog::Category;
use crate::validation::capitalize_first_letter;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared title cell. Clones point at the same text.
///
/// The selection writes into it as an observer; iced reads it through
/// `App::title`.
#[derive(Debug, Clone, Default)]
pub struct WindowTitle(Arc<Mutex<String>>);

impl WindowTitle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> String {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, title: String) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = title;
    }
}

impl SelectionObserver for WindowTitle {
    fn category_committed(&mut self, category: &Category) {
        self.set(capitalize_first_letter(&category.name));
    }
}
