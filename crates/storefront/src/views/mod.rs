//! Product card views.
//!
//! Each card is an Askama template over a resolved
//! [`CardView`](bazaar_core::card::CardView). The render helpers return an
//! empty string for products that resolve to
//! [`CardState::Empty`](bazaar_core::card::CardState::Empty).

pub mod gallery;
pub mod notice;
pub mod product_card;
pub mod shop_card;

pub use gallery::GalleryTemplate;
pub use notice::{CountBadgeTemplate, NoticeTemplate};
pub use product_card::{ProductCardTemplate, render_product_card};
pub use shop_card::{CardOptions, ShopCardTemplate, render_shop_card};
