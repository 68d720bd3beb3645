//! Compare list action.

use crate::cart::CartCommand;
use crate::types::ProductId;

use super::ActionOutcome;
use super::notice::{COMPARE_ADDED, COMPARE_EXISTS, Notice};

/// Queue a product for comparison.
///
/// A product already in the list produces a warning and no command. Otherwise
/// the returned command replaces the list with a copy that has `product_id`
/// appended last.
#[must_use]
pub fn add_to_compare(current: &[ProductId], product_id: &ProductId) -> ActionOutcome {
    if current.contains(product_id) {
        return ActionOutcome::notice(Notice::warning(COMPARE_EXISTS));
    }

    let mut list = Vec::with_capacity(current.len() + 1);
    list.extend_from_slice(current);
    list.push(product_id.clone());

    ActionOutcome::with_command(
        Notice::success(COMPARE_ADDED),
        CartCommand::UpdateComparelist(list),
    )
}
