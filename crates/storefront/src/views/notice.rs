//! Toast and badge fragments returned by the card actions.

use askama::Template;
use askama_web::WebTemplate;

use bazaar_core::actions::Notice;

/// Toast fragment swapped into the notice area.
#[derive(Template, WebTemplate)]
#[template(path = "partials/notice.html")]
pub struct NoticeTemplate {
    pub notice: Notice,
}

/// Wishlist/compare count badge (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/count_badge.html")]
pub struct CountBadgeTemplate {
    /// `wishlist` or `compare`.
    pub list: &'static str,
    pub count: u32,
}
