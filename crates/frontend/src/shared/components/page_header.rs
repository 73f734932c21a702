use leptos::prelude::*;

/// PageHeader component - title and short description of a page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional description under the title
    #[prop(optional, into)]
    description: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {move || description.get().map(|d| view! {
                <p class="page-header__description">{d}</p>
            })}
        </div>
    }
}
