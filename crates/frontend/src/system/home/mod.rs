//! Welcome page with the backend connection indicator

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::shared::api_utils::test_connection;
use crate::shared::components::page_header::PageHeader;
use crate::shared::http::{ApiClient, GlooTransport};

#[derive(Clone, Debug, PartialEq, Eq)]
enum ConnectionStatus {
    Testing,
    Connected(String),
    Disconnected(String),
}

#[component]
pub fn HomePage() -> impl IntoView {
    let client =
        use_context::<ApiClient<GlooTransport>>().expect("ApiClient not found in context");
    let status = RwSignal::new(ConnectionStatus::Testing);

    let check = move || {
        status.set(ConnectionStatus::Testing);
        let client = client.clone();
        spawn_local(async move {
            let result = test_connection(&client).await;
            status.try_set(if result.success {
                ConnectionStatus::Connected(result.message)
            } else {
                ConnectionStatus::Disconnected(result.message)
            });
        });
    };
    check();

    let retry = {
        let check = check.clone();
        move |_: MouseEvent| check()
    };

    view! {
        <div class="page-container">
            <div class="welcome-card">
                <h1 class="welcome-title">"Product & Attendant Manager"</h1>
                <p class="welcome-text">"Inventory and staff records backed by a REST API"</p>
            </div>

            {move || match status.get() {
                ConnectionStatus::Testing => view! {
                    <div class="alert alert-info">
                        <strong>"Testing backend connection..."</strong>
                        <div class="loading-spinner"></div>
                    </div>
                }
                .into_any(),
                ConnectionStatus::Connected(message) => view! {
                    <div class="alert alert-success">
                        <strong>"✓ Backend Connected"</strong>
                        " - "
                        {message}
                    </div>
                }
                .into_any(),
                ConnectionStatus::Disconnected(message) => view! {
                    <div class="alert alert-error">
                        <strong>"✗ Backend Disconnected"</strong>
                        " - "
                        {message}
                        <br />
                        <button class="btn btn-secondary" on:click=retry.clone()>
                            "Test Connection Again"
                        </button>
                    </div>
                }
                .into_any(),
            }}

            <PageHeader
                title="Application Overview"
                description="Create, view, update and delete products and attendants. Every change is sent to the server and the list is reloaded afterwards."
            />

            <div class="features-grid">
                <div class="feature-card">
                    <h3>"📦 Products"</h3>
                    <p>"Prices, categories and stock levels, with low stock alerts."</p>
                    <A href=AppRoute::Products.path() attr:class="btn btn-primary">
                        "Manage Products"
                    </A>
                </div>
                <div class="feature-card">
                    <h3>"👥 Attendants"</h3>
                    <p>"Staff contact details and notes."</p>
                    <A href=AppRoute::Attendants.path() attr:class="btn btn-primary">
                        "Manage Attendants"
                    </A>
                </div>
            </div>
        </div>
    }
}
