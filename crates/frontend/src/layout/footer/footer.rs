use leptos::prelude::*;

use crate::shared::config::AppConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let api_url = use_context::<AppConfig>()
        .map(|c| c.api.base_url)
        .unwrap_or_default();

    view! {
        <footer class="app-footer">
            <p>"Products & Attendants - CRUD client"</p>
            <p class="app-footer__api">"API: " {api_url}</p>
        </footer>
    }
}
