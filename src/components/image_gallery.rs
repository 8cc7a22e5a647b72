//! Image Gallery
//!
//! Main image plus clickable thumbnails.

use leptos::prelude::*;

#[component]
pub fn ImageGallery(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    if images.is_empty() {
        return view! { <div class="gallery"><div class="image-placeholder large"></div></div> }.into_any();
    }

    let (selected, set_selected) = signal(0usize);
    let images = StoredValue::new(images);
    let main_src = move || images.with_value(|all| all.get(selected.get()).cloned().unwrap_or_default());

    view! {
        <div class="gallery">
            <img class="gallery-main" src=main_src alt=alt />
            <div class="gallery-thumbs">
                {images.get_value().into_iter().enumerate().map(|(i, src)| view! {
                    <button
                        class=move || if selected.get() == i { "gallery-thumb active" } else { "gallery-thumb" }
                        on:click=move |_| set_selected.set(i)
                    >
                        <img src=src alt="" loading="lazy" />
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}
