//! Listing grid product card.

use askama::Template;

use bazaar_core::card::{CardState, CardView};
use bazaar_core::{Product, Settings};

use crate::i18n::CardLabels;

/// Listing card: image, name, unit, price and an "Add to cart" gallery link.
#[derive(Template)]
#[template(path = "components/product_card.html")]
pub struct ProductCardTemplate {
    pub card: CardView,
    pub labels: CardLabels,
}

impl ProductCardTemplate {
    /// Build the template for a product, or `None` if it cannot be rendered.
    #[must_use]
    pub fn for_product(product: &Product, settings: &Settings) -> Option<Self> {
        CardState::listing(product, settings)
            .into_view()
            .map(|card| Self {
                card,
                labels: CardLabels::default(),
            })
    }
}

/// Render a listing card; products without a slug render as an empty string.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_product_card(product: &Product, settings: &Settings) -> askama::Result<String> {
    ProductCardTemplate::for_product(product, settings)
        .map_or_else(|| Ok(String::new()), |template| template.render())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use bazaar_core::Image;

    fn tea() -> Product {
        let mut product = Product::new("p1", Decimal::from(200), Decimal::from(150));
        product.slug = Some("green-tea".to_string());
        product.name = Some("Green Tea".to_string());
        product.images = vec![Image {
            url: "/img/tea.png".to_string(),
        }];
        product
    }

    #[test]
    fn test_missing_slug_renders_nothing() {
        let mut product = tea();
        product.slug = None;
        assert_eq!(render_product_card(&product, &Settings::default()).unwrap(), "");
    }

    #[test]
    fn test_discounted_card_shows_both_prices() {
        let html = render_product_card(&tea(), &Settings::default()).unwrap();
        assert!(html.contains(r#"<span class="price">Tk150</span>"#));
        assert!(html.contains(r#"<span class="original_price">Tk200</span>"#));
        assert!(html.contains(r#"href="/product/green-tea""#));
        assert!(html.contains(r#"hx-get="/?slug=green-tea""#));
        assert!(html.contains("Add to cart"));
    }

    #[test]
    fn test_undiscounted_card_shows_single_price() {
        let mut product = tea();
        product.discount = Decimal::from(200);
        let html = render_product_card(&product, &Settings::with_symbol("$")).unwrap();
        assert!(html.contains(r#"<span class="price">$200</span>"#));
        assert!(!html.contains("original_price"));
    }

    #[test]
    fn test_unit_label_rendered_only_when_present() {
        let html = render_product_card(&tea(), &Settings::default()).unwrap();
        assert!(!html.contains("p_company"));

        let mut product = tea();
        product.unit = Some("g".to_string());
        product.unit_value = Some(bazaar_core::UnitValue::Text("500".to_string()));
        let html = render_product_card(&product, &Settings::default()).unwrap();
        assert!(html.contains(r#"<span class="p_company">500 g</span>"#));
    }
}
