//! Translation lookup for card labels.
//!
//! Only English ships today. Unknown keys are returned unchanged so a missing
//! translation shows up in the page instead of failing the render.

/// Translate a label key.
#[must_use]
pub fn t(key: &str) -> &str {
    match key {
        "buy_now" => "Buy Now",
        "out_of_stock" => "Out of Stock",
        "add_to_cart" => "Add to cart",
        "add_to_wishlist" => "Add to wishlist",
        "add_to_compare" => "Add to compare",
        "view_details" => "View product details",
        "remove" => "Remove",
        "reviews" => "reviews",
        _ => key,
    }
}

/// Labels used by the card templates, resolved once per render.
#[derive(Debug, Clone, Copy)]
pub struct CardLabels {
    pub buy_now: &'static str,
    pub out_of_stock: &'static str,
    pub add_to_cart: &'static str,
    pub add_to_wishlist: &'static str,
    pub add_to_compare: &'static str,
    pub view_details: &'static str,
    pub remove: &'static str,
    pub reviews: &'static str,
}

impl Default for CardLabels {
    fn default() -> Self {
        Self {
            buy_now: t("buy_now"),
            out_of_stock: t("out_of_stock"),
            add_to_cart: t("add_to_cart"),
            add_to_wishlist: t("add_to_wishlist"),
            add_to_compare: t("add_to_compare"),
            view_details: t("view_details"),
            remove: t("remove"),
            reviews: t("reviews"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(t("buy_now"), "Buy Now");
        assert_eq!(t("out_of_stock"), "Out of Stock");
        assert_eq!(t("checkout"), "checkout");
    }
}
