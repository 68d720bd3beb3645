//! Card actions: wishlist and compare.
//!
//! Each action takes read-only snapshots and returns an [`ActionOutcome`]:
//! the notice to show and, when state should change, the [`CartCommand`]
//! the host must apply.

pub mod compare;
pub mod notice;
pub mod wishlist;

pub use compare::add_to_compare;
pub use notice::{Notice, NoticeLevel};
pub use wishlist::{WishlistApi, WishlistRequest, WishlistResponse, add_to_wishlist};

use crate::cart::CartCommand;

/// Result of a card action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Message for the user.
    pub notice: Notice,
    /// State change to apply, if any.
    pub command: Option<CartCommand>,
}

impl ActionOutcome {
    /// An outcome that only informs the user.
    #[must_use]
    pub const fn notice(notice: Notice) -> Self {
        Self {
            notice,
            command: None,
        }
    }

    /// An outcome that informs the user and updates state.
    #[must_use]
    pub const fn with_command(notice: Notice, command: CartCommand) -> Self {
        Self {
            notice,
            command: Some(command),
        }
    }
}
