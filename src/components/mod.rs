//! UI Components
//!
//! Reusable Leptos components.

mod booking_form;
mod confirm_button;
mod entity_cards;
mod favorite_button;
mod footer;
mod image_gallery;
mod navbar;
mod pagination_bar;
mod review_section;
mod star_rating;
mod status;
mod toast_host;
mod unit_card;

pub use booking_form::BookingForm;
pub use confirm_button::ConfirmButton;
pub use entity_cards::{CompoundCard, DeveloperCard};
pub use favorite_button::FavoriteButton;
pub use footer::Footer;
pub use image_gallery::ImageGallery;
pub use navbar::Navbar;
pub use pagination_bar::PaginationBar;
pub use review_section::ReviewSection;
pub use star_rating::StarRating;
pub use status::{EmptyState, ErrorState, Loading, Remote};
pub use toast_host::ToastHost;
pub use unit_card::{UnitCard, UnitGrid};
