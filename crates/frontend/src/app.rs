use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::http::{ApiClient, GlooTransport};

#[component]
pub fn App() -> impl IntoView {
    // Resolved once; pages read both from context.
    let config = load_config();
    provide_context(ApiClient::new(GlooTransport::from_config(&config.api)));
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
