//! Pages
//!
//! One component per route. Each page fetches its own data.

mod auth;
mod compounds;
mod contact;
mod developers;
mod faq;
mod favorites;
mod home;
mod not_found;
mod profile;
mod testimonials;
mod unit_detail;
mod units;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

pub use auth::{ForgotPasswordPage, ResetPasswordPage, SignInPage, SignUpPage};
pub use compounds::{CompoundDetailPage, CompoundsPage};
pub use contact::ContactPage;
pub use developers::{DeveloperDetailPage, DevelopersPage};
pub use faq::FaqPage;
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use testimonials::TestimonialsPage;
pub use unit_detail::UnitDetailPage;
pub use units::UnitsPage;

/// `:id` route parameter; anything non-numeric is `None`
fn use_id_param() -> Memo<Option<u64>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| id.parse().ok()))
}

/// `?page=` query parameter, at least 1
fn use_page_param() -> Memo<u32> {
    let query = use_query_map();
    Memo::new(move |_| {
        query
            .with(|q| q.get("page"))
            .and_then(|p| p.parse::<u32>().ok())
            .unwrap_or(1)
            .max(1)
    })
}
