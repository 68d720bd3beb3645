//! Per-visitor cart state and the commands that update it.
//!
//! Card actions never mutate state directly. They return a [`CartCommand`]
//! and the host applies it to its stored [`CartState`].

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Wishlist counter and compare list for one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    /// Items added to the wishlist this session; `None` means none yet.
    #[serde(default)]
    pub wishlist: Option<u32>,
    /// Products queued for comparison, in insertion order.
    #[serde(default)]
    pub compare: Vec<ProductId>,
}

/// A state update returned by a card action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    /// Replace the wishlist counter.
    UpdateWishlist(u32),
    /// Replace the compare list.
    UpdateComparelist(Vec<ProductId>),
}

impl CartState {
    /// Wishlist count with an absent counter read as zero.
    #[must_use]
    pub fn wishlist_count(&self) -> u32 {
        self.wishlist.unwrap_or(0)
    }

    /// Apply a command, replacing the affected field.
    pub fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::UpdateWishlist(count) => self.wishlist = Some(count),
            CartCommand::UpdateComparelist(list) => self.compare = list,
        }
    }
}
