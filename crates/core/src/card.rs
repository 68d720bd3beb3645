//! Display state for product cards.
//!
//! [`CardState`] is the one place where a raw [`Product`] is checked: a
//! product without a slug becomes [`CardState::Empty`] and renders nothing,
//! everything else is resolved into a fully populated [`CardView`] so the
//! templates never deal with missing fields.

use rust_decimal::Decimal;

use crate::stock::StockCheck;
use crate::types::{PriceDisplay, Product, ProductId, Review, Settings, discount_percent};
use crate::urls::{GalleryRoute, product_url};

/// Name shown when a product has none.
pub const FALLBACK_NAME: &str = "Product";

/// Image alt text on shop cards when a product has no name.
pub const FALLBACK_IMAGE_ALT: &str = "Product image";

/// Outcome of checking a product for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    /// All display values resolved.
    Renderable(Box<CardView>),
    /// The product cannot be rendered; output nothing.
    Empty,
}

/// Everything a card template needs, with no optional product fields left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub product_id: ProductId,
    pub slug: String,
    /// `/product/{slug}`.
    pub product_url: String,
    /// Shallow gallery view URL.
    pub gallery_url: String,
    pub name: String,
    /// First image URL, empty when the product has no images.
    pub image_url: String,
    pub image_alt: String,
    /// "{unitValue} {unit}".
    pub unit_label: Option<String>,
    pub price: PriceDisplay,
    /// Percentage off, present only when the product is discounted.
    pub discount_percent: Option<Decimal>,
    pub reviews: ReviewSummary,
    /// Listing cards are not stock gated and always report `true`.
    pub in_stock: bool,
}

impl CardState {
    /// Resolve a product for the listing grid card.
    #[must_use]
    pub fn listing(product: &Product, settings: &Settings) -> Self {
        Self::derive(
            product,
            settings,
            &GalleryRoute::Home,
            FALLBACK_NAME,
            &|_: &Product| true,
        )
    }

    /// Resolve a product for the shop card.
    ///
    /// `link` overrides the gallery URL; `stock` gates the buy-now action.
    #[must_use]
    pub fn shop(
        product: &Product,
        settings: &Settings,
        link: Option<&str>,
        stock: &(impl StockCheck + ?Sized),
    ) -> Self {
        let gallery = link.map_or(GalleryRoute::Gallery, |url| {
            GalleryRoute::Custom(url.to_string())
        });
        Self::derive(product, settings, &gallery, FALLBACK_IMAGE_ALT, stock)
    }

    fn derive(
        product: &Product,
        settings: &Settings,
        gallery: &GalleryRoute,
        alt_fallback: &str,
        stock: &(impl StockCheck + ?Sized),
    ) -> Self {
        let Some(slug) = product.slug() else {
            return Self::Empty;
        };

        let name = product.name.as_deref().filter(|n| !n.is_empty());
        let price = PriceDisplay::new(product.price, product.discount, settings.currency_symbol());
        let discount_percent = matches!(price, PriceDisplay::Discounted { .. })
            .then(|| discount_percent(product.price, product.discount));

        Self::Renderable(Box::new(CardView {
            product_id: product.id.clone(),
            slug: slug.to_string(),
            product_url: product_url(slug),
            gallery_url: gallery.url(slug),
            name: name.unwrap_or(FALLBACK_NAME).to_string(),
            image_url: product.primary_image_url().unwrap_or_default().to_string(),
            image_alt: name.unwrap_or(alt_fallback).to_string(),
            unit_label: product.unit_label(),
            price,
            discount_percent,
            reviews: ReviewSummary::from_reviews(&product.reviews),
            in_stock: stock.in_stock(product),
        }))
    }

    /// The resolved view, if renderable.
    #[must_use]
    pub fn view(&self) -> Option<&CardView> {
        match self {
            Self::Renderable(view) => Some(view.as_ref()),
            Self::Empty => None,
        }
    }

    /// Consume into the resolved view, if renderable.
    #[must_use]
    pub fn into_view(self) -> Option<CardView> {
        match self {
            Self::Renderable(view) => Some(*view),
            Self::Empty => None,
        }
    }
}

/// Review count and average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewSummary {
    pub count: usize,
    /// Average rating rounded to one decimal, absent with no reviews.
    pub average: Option<Decimal>,
}

impl ReviewSummary {
    /// Summarize a review list.
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }

        let total: Decimal = reviews.iter().map(|r| r.rating).sum();
        let average = total / Decimal::from(reviews.len());
        Self {
            count: reviews.len(),
            average: Some(average.round_dp(1).normalize()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::stock::InventoryStock;
    use crate::types::Image;

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
    fn test_missing_slug_is_empty() {
        let mut product = tea();
        product.slug = None;
        let settings = Settings::default();

        assert_eq!(CardState::listing(&product, &settings), CardState::Empty);
        assert_eq!(
            CardState::shop(&product, &settings, None, &InventoryStock),
            CardState::Empty
        );

        product.slug = Some(String::new());
        assert_eq!(CardState::listing(&product, &settings), CardState::Empty);
    }

    #[test]
    fn test_listing_card_urls() {
        let view = CardState::listing(&tea(), &Settings::default())
            .into_view()
            .unwrap();
        assert_eq!(view.product_url, "/product/green-tea");
        assert_eq!(view.gallery_url, "/?slug=green-tea");
        assert!(view.in_stock);
    }

    #[test]
    fn test_shop_card_urls_and_link_override() {
        let settings = Settings::default();
        let view = CardState::shop(&tea(), &settings, None, &InventoryStock)
            .into_view()
            .unwrap();
        assert_eq!(view.gallery_url, "/gallery?slug=green-tea");

        let view = CardState::shop(&tea(), &settings, Some("/compare"), &InventoryStock)
            .into_view()
            .unwrap();
        assert_eq!(view.gallery_url, "/compare");
    }

    #[test]
    fn test_discount_derivation() {
        let view = CardState::listing(&tea(), &Settings::with_symbol("$"))
            .into_view()
            .unwrap();
        assert_eq!(view.discount_percent, Some(Decimal::from(25)));
        assert_eq!(view.price.current().to_string(), "$150");

        let mut product = tea();
        product.discount = product.price;
        let view = CardState::listing(&product, &Settings::default())
            .into_view()
            .unwrap();
        assert_eq!(view.discount_percent, None);
        assert_eq!(view.price.value_count(), 1);
    }

    #[test]
    fn test_fallbacks() {
        let mut product = tea();
        product.name = None;
        product.images.clear();

        let listing = CardState::listing(&product, &Settings::default())
            .into_view()
            .unwrap();
        assert_eq!(listing.name, "Product");
        assert_eq!(listing.image_alt, "Product");
        assert_eq!(listing.image_url, "");

        let shop = CardState::shop(&product, &Settings::default(), None, &InventoryStock)
            .into_view()
            .unwrap();
        assert_eq!(shop.image_alt, "Product image");
    }

    #[test]
    fn test_stock_is_read_from_predicate() {
        let mut product = tea();
        product.quantity = Some(100);
        let out = |_: &Product| false;
        let view = CardState::shop(&product, &Settings::default(), None, &out)
            .into_view()
            .unwrap();
        assert!(!view.in_stock);
    }

    #[test]
    fn test_review_summary() {
        assert_eq!(ReviewSummary::from_reviews(&[]), ReviewSummary::default());

        let summary = ReviewSummary::from_reviews(&[
            Review {
                rating: Decimal::from(5),
            },
            Review {
                rating: Decimal::from(4),
            },
            Review {
                rating: Decimal::from(4),
            },
        ]);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, Some("4.3".parse().unwrap()));

        let summary = ReviewSummary::from_reviews(&[
            Review {
                rating: Decimal::new(45, 1),
            },
            Review {
                rating: Decimal::from(5),
            },
        ]);
        assert_eq!(summary.average, Some("4.8".parse().unwrap()));
    }
}
