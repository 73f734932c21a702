use leptos::prelude::*;

use crate::shared::crud_page::{Flash, FlashKind};

/// Success / error banner with a dismiss button
#[component]
pub fn FlashBanner(
    #[prop(into)] flash: Signal<Option<Flash>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        flash.get().map(|f| {
            let class = match f.kind {
                FlashKind::Success => "alert alert-success",
                FlashKind::Error => "alert alert-error",
            };
            view! {
                <div class=class role="alert">
                    <span class="alert__text">{f.text}</span>
                    <button
                        class="alert__close"
                        title="Dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
