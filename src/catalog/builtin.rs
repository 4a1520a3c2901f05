// SPDX-License-Identifier: MPL-2.0
//! The portfolio shipped with the application.
//!
//! Photo order matters: within a category it decides which image file each
//! photo is paired with (`{size}/{category}/{index}.jpg`).

use super::{Category, Photo};

const PLACEHOLDER: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nunc ultricie";

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "commercial",
            "Photos of grocery stores, food trucks, and other commercial projects",
        ),
        Category::new("portraits", "Portraits of people in my life"),
        Category::new("food", "Delicious delicacies"),
        Category::new(
            "landscape",
            "Fields, farmhouses, waterfalls, and the beauty of nature",
        ),
    ]
}

pub(super) fn photos() -> Vec<Photo> {
    [
        ("Grocery aisle", "commercial"),
        ("Grocery booth", "commercial"),
        ("Building exterior", "commercial"),
        ("Restaurant table", "commercial"),
        ("Cafe interior", "commercial"),
        ("Cat green eyes", "portraits"),
        ("Green parrot", "portraits"),
        ("Yellow macaw", "portraits"),
        ("Pug smile", "portraits"),
        ("Pancakes", "food"),
        ("Burrito", "food"),
        ("Scallop pasta", "food"),
        ("Burger", "food"),
        ("Fruit bowl", "food"),
        ("Green river", "landscape"),
        ("Docks", "landscape"),
        ("Panoramic village by sea", "landscape"),
        ("Domestic landscape", "landscape"),
        ("Park bench", "landscape"),
    ]
    .into_iter()
    .map(|(name, category)| Photo::new(name, category, PLACEHOLDER))
    .collect()
}
