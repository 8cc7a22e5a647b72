//! Fetch Status Views
//!
//! Loading / error / empty placeholders shared by every page.

use leptos::prelude::*;

/// Lifecycle of one page-level fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}

#[component]
pub fn ErrorState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="state-card state-error">
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="state-card state-empty">
            <p>{message}</p>
        </div>
    }
}
