//! Shop grid product card with hover actions and a stock-gated buy button.

use askama::Template;

use bazaar_core::card::{CardState, CardView};
use bazaar_core::stock::StockCheck;
use bazaar_core::{Product, Settings};

use crate::i18n::CardLabels;

/// Grid column classes used when no layout is given.
pub const DEFAULT_LAYOUT: &str = "col-lg-3 col-md-4 col-6";

/// Presentation options for a shop card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Render the buy-now / out-of-stock call-to-action.
    pub show_button: bool,
    /// Replaces the gallery URL used by the quick-view and buy controls.
    pub link: Option<String>,
    /// Adds a remove control posting to this URL.
    pub remove_url: Option<String>,
    /// Grid column classes; [`DEFAULT_LAYOUT`] when unset.
    pub layout: Option<String>,
    pub border: bool,
    /// Hide the quick-view control.
    pub hide_link: bool,
    /// Extra classes on the card wrapper.
    pub css_class: Option<String>,
}

impl CardOptions {
    /// Options for a card with the call-to-action shown.
    #[must_use]
    pub fn with_button() -> Self {
        Self {
            show_button: true,
            ..Self::default()
        }
    }

    /// Grid column classes for the wrapper.
    #[must_use]
    pub fn layout_class(&self) -> &str {
        self.layout
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LAYOUT)
    }

    /// Extra wrapper classes, empty when unset.
    #[must_use]
    pub fn extra_class(&self) -> &str {
        self.css_class.as_deref().unwrap_or_default()
    }
}

/// Shop card: hover controls, discount badge, reviews and price block.
#[derive(Template)]
#[template(path = "components/shop_card.html")]
pub struct ShopCardTemplate {
    pub card: CardView,
    pub options: CardOptions,
    pub labels: CardLabels,
}

impl ShopCardTemplate {
    /// Build the template for a product, or `None` if it cannot be rendered.
    #[must_use]
    pub fn for_product(
        product: &Product,
        settings: &Settings,
        options: CardOptions,
        stock: &(impl StockCheck + ?Sized),
    ) -> Option<Self> {
        CardState::shop(product, settings, options.link.as_deref(), stock)
            .into_view()
            .map(|card| Self {
                card,
                options,
                labels: CardLabels::default(),
            })
    }
}

/// Render a shop card; products without a slug render as an empty string.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_shop_card(
    product: &Product,
    settings: &Settings,
    options: CardOptions,
    stock: &(impl StockCheck + ?Sized),
) -> askama::Result<String> {
    ShopCardTemplate::for_product(product, settings, options, stock)
        .map_or_else(|| Ok(String::new()), |template| template.render())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use bazaar_core::stock::InventoryStock;
    use bazaar_core::{Image, ProductId, Review};

    fn tea() -> Product {
        let mut product = Product::new("p1", Decimal::from(200), Decimal::from(150));
        product.slug = Some("green-tea".to_string());
        product.name = Some("Green Tea".to_string());
        product.quantity = Some(3);
        product.images = vec![Image {
            url: "/img/tea.png".to_string(),
        }];
        product
    }

    fn render(product: &Product, options: CardOptions) -> String {
        render_shop_card(product, &Settings::default(), options, &InventoryStock).unwrap()
    }

    #[test]
    fn test_missing_slug_renders_nothing() {
        let mut product = tea();
        product.slug = None;
        assert_eq!(render(&product, CardOptions::with_button()), "");
    }

    #[test]
    fn test_discount_badge_and_prices() {
        let html = render(&tea(), CardOptions::default());
        assert!(html.contains(r#"<div class="discount">-25%</div>"#));
        assert!(html.contains(r#"<p class="price">Tk150</p>"#));
        assert!(html.contains(r#"<p class="price_ori">Tk200</p>"#));
    }

    #[test]
    fn test_no_badge_without_discount() {
        let mut product = tea();
        product.discount = Decimal::from(250);
        let html = render(&product, CardOptions::default());
        assert!(!html.contains("class=\"discount\""));
        assert!(!html.contains("price_ori"));
        assert!(html.contains(r#"<p class="price">Tk200</p>"#));
    }

    #[test]
    fn test_buy_button_in_stock() {
        let html = render(&tea(), CardOptions::with_button());
        assert!(html.contains("Buy Now"));
        assert!(html.contains(r#"hx-get="/gallery?slug=green-tea""#));
        assert!(html.contains(r#"hx-push-url="/product/green-tea""#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_out_of_stock_renders_disabled_button() {
        let mut product = tea();
        product.quantity = Some(0);
        let html = render(&product, CardOptions::with_button());
        assert!(html.contains(r#"<button class="button" disabled>Out of Stock</button>"#));
        assert!(!html.contains("Buy Now"));
    }

    #[test]
    fn test_button_hidden_by_default() {
        let html = render(&tea(), CardOptions::default());
        assert!(!html.contains("Buy Now"));
        assert!(!html.contains("Out of Stock"));
    }

    #[test]
    fn test_hover_controls() {
        let html = render(&tea(), CardOptions::default());
        assert!(html.contains(r#"hx-post="/wishlist""#));
        assert!(html.contains(r#"hx-post="/compare""#));
        assert!(html.contains(r#"<input type="hidden" name="pid" value="p1">"#));
        assert!(html.contains(r#"hx-include="closest .hover_buttons""#));
        assert!(html.contains("quick-view"));

        let options = CardOptions {
            hide_link: true,
            remove_url: Some("/compare/remove".to_string()),
            ..CardOptions::default()
        };
        let html = render(&tea(), options);
        assert!(!html.contains("quick-view"));
        assert!(html.contains(r#"hx-post="/compare/remove""#));
    }

    #[test]
    fn test_product_id_is_escaped_in_form_value() {
        let mut product = tea();
        product.id = ProductId::new(r#"p1", "x": "y"#);
        let html = render(&product, CardOptions::default());
        assert!(html.contains(r#"name="pid" value="p1&#34;, &#34;x&#34;: &#34;y">"#));
        assert!(!html.contains(r#""x": "y""#));
    }

    #[test]
    fn test_layout_and_classes() {
        let html = render(&tea(), CardOptions::default());
        assert!(html.contains(DEFAULT_LAYOUT));

        let options = CardOptions {
            layout: Some("col-12".to_string()),
            border: true,
            css_class: Some("featured".to_string()),
            ..CardOptions::default()
        };
        let html = render(&tea(), options);
        assert!(html.contains("col-12"));
        assert!(!html.contains(DEFAULT_LAYOUT));
        assert!(html.contains("card border"));
        assert!(html.contains("featured"));
    }

    #[test]
    fn test_review_summary_and_fallbacks() {
        let mut product = tea();
        product.name = None;
        product.reviews = vec![
            Review {
                rating: Decimal::from(5),
            },
            Review {
                rating: Decimal::from(4),
            },
        ];
        let html = render(&product, CardOptions::default());
        assert!(html.contains(r#"alt="Product image""#));
        assert!(html.contains("(2 reviews)"));
        assert!(html.contains("4.5"));
    }
}
