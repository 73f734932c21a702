use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;

/// Title bar and navigation links; the link of the current page is highlighted
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| AppRoute::from_path(&location.pathname.get()));

    view! {
        <header class="app-header">
            <h1>"Product & Attendant Manager"</h1>
            <p>"Rust + Leptos client for the inventory REST API"</p>
        </header>
        <nav class="navbar">
            {AppRoute::NAV
                .iter()
                .map(|route| {
                    let route = *route;
                    view! {
                        <A href=route.path() attr:class=move || {
                            if current.get() == route { "nav-link nav-link--active" } else { "nav-link" }
                        }>
                            {route.label()}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
