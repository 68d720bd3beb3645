//! Gallery (quick view) fragment opened by the card's shallow navigation.

use askama::Template;
use askama_web::WebTemplate;

use bazaar_core::card::{CardState, CardView};
use bazaar_core::stock::StockCheck;
use bazaar_core::{Product, Settings};

use crate::i18n::CardLabels;

/// Product images, price block and buy action for one product.
#[derive(Template, WebTemplate)]
#[template(path = "partials/gallery.html")]
pub struct GalleryTemplate {
    pub card: CardView,
    /// All image URLs, in backend order.
    pub images: Vec<String>,
    pub labels: CardLabels,
}

impl GalleryTemplate {
    /// Build the gallery for a product, or `None` if it has no slug.
    #[must_use]
    pub fn for_product(
        product: &Product,
        settings: &Settings,
        stock: &(impl StockCheck + ?Sized),
    ) -> Option<Self> {
        let card = CardState::shop(product, settings, None, stock).into_view()?;
        Some(Self {
            card,
            images: product.images.iter().map(|i| i.url.clone()).collect(),
            labels: CardLabels::default(),
        })
    }
}
