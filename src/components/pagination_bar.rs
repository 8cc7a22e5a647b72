//! Pagination Bar
//!
//! Prev / next links plus a page indicator. Links are plain URLs so the
//! page number lives in the query string.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Pagination;

#[component]
pub fn PaginationBar(
    pagination: Option<Pagination>,
    /// Builds the URL for a page number
    #[prop(into)] href_for: Callback<u32, String>,
) -> impl IntoView {
    let Some(p) = pagination.filter(|p| p.last_page > 1) else {
        return view! { <nav class="pagination hidden"></nav> }.into_any();
    };

    let prev = p.has_prev().then(|| href_for.run(p.current_page - 1));
    let next = p.has_next().then(|| href_for.run(p.current_page + 1));

    view! {
        <nav class="pagination">
            {prev.map(|href| view! { <A href=href attr:class="page-link">"‹ Prev"</A> })}
            <span class="page-indicator">
                {format!("Page {} of {} ({} results)", p.current_page, p.last_page, p.total)}
            </span>
            {next.map(|href| view! { <A href=href attr:class="page-link">"Next ›"</A> })}
        </nav>
    }
    .into_any()
}
