//! Frontend Models
//!
//! Menu items as edited in the form, and the values derived from them.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_ITEMS;
use crate::pricing::{parse_price, sanitize_price, tax_included};

/// Menu item as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    /// Digit-only price text
    pub price: String,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, price: &str) -> Self {
        Self {
            id,
            name: name.into(),
            price: sanitize_price(price),
        }
    }

    pub fn computed(&self) -> ComputedMenuItem {
        let price = parse_price(&self.price);
        ComputedMenuItem {
            id: self.id,
            name: self.name.clone(),
            price,
            tax_included: tax_included(price),
        }
    }
}

/// Read-only projection of a `MenuItem` with parsed amounts
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedMenuItem {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub tax_included: u64,
}

/// How many items the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemCount {
    One,
    #[default]
    Two,
}

impl ItemCount {
    pub const ALL: [ItemCount; 2] = [ItemCount::One, ItemCount::Two];

    pub fn get(self) -> usize {
        match self {
            ItemCount::One => 1,
            ItemCount::Two => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemCount::One => "1品",
            ItemCount::Two => "2品",
        }
    }
}

/// Items seeded on startup, with ids assigned in order from 1
pub fn default_items() -> Vec<MenuItem> {
    DEFAULT_ITEMS
        .iter()
        .zip(1u32..)
        .map(|((name, price), id)| MenuItem::new(id, *name, price))
        .collect()
}

/// Computed projections of the items the page should render
pub fn visible_items(items: &[MenuItem], count: ItemCount) -> Vec<ComputedMenuItem> {
    items.iter().take(count.get()).map(MenuItem::computed).collect()
}
