//! Storefront URL scheme for product cards.

/// Full product detail page.
#[must_use]
pub fn product_url(slug: &str) -> String {
    format!("/product/{}", urlencoding::encode(slug))
}

/// Where the shallow gallery view of a product is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryRoute {
    /// `/?slug={slug}`, used by listing cards on the home grid.
    #[default]
    Home,
    /// `/gallery?slug={slug}`, used by shop cards.
    Gallery,
    /// Caller-supplied URL used verbatim.
    Custom(String),
}

impl GalleryRoute {
    /// Resolve the gallery URL for a product slug.
    #[must_use]
    pub fn url(&self, slug: &str) -> String {
        match self {
            Self::Home => format!("/?slug={}", urlencoding::encode(slug)),
            Self::Gallery => format!("/gallery?slug={}", urlencoding::encode(slug)),
            Self::Custom(url) => url.clone(),
        }
    }
}
