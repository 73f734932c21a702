use leptos::prelude::*;

/// One figure of a statistics panel
#[component]
pub fn StatCard(
    /// Label displayed under the value
    #[prop(into)]
    label: String,
    /// Value, recomputed when the list changes
    #[prop(into)]
    value: Signal<String>,
    /// Modifier class, e.g. "stat-card--warning"
    #[prop(optional, into)]
    variant: Option<String>,
) -> impl IntoView {
    let class = match variant {
        Some(v) => format!("stat-card {}", v),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            <strong class="stat-card__value">{move || value.get()}</strong>
            <p class="stat-card__label">{label}</p>
        </div>
    }
}
