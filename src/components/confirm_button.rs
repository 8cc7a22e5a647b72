//! Confirm Button
//!
//! Guards an irreversible account action (cancelling a booking, deleting
//! the account) behind a second click.

use leptos::prelude::*;

/// Button that asks before running `on_confirm`.
///
/// The first click swaps the button for `prompt` with Yes / No choices;
/// Escape or No backs out. Yes runs the callback once and folds back.
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into, default = "Are you sure?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        asking.set(true);
    };
    let answer = move |ev: web_sys::MouseEvent, yes: bool| {
        ev.stop_propagation();
        asking.set(false);
        if yes {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button type="button" class=button_class.clone() on:click=ask>
                    {label.clone()}
                </button>
            }
        >
            <span
                class="confirm-inline"
                role="alertdialog"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        asking.set(false);
                    }
                }
            >
                <span class="confirm-text">{prompt.clone()}</span>
                <button type="button" class="confirm-btn" on:click=move |ev| answer(ev, true)>"Yes"</button>
                <button type="button" class="cancel-btn" on:click=move |ev| answer(ev, false)>"No"</button>
            </span>
        </Show>
    }
}
