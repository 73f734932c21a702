pub mod footer;
pub mod header;

use leptos::prelude::*;

use footer::Footer;
use header::Header;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |          Header + navigation             |
/// +------------------------------------------+
/// |            routed page                   |
/// +------------------------------------------+
/// |               Footer                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="main-content">{children()}</main>
            <Footer />
        </div>
    }
}
