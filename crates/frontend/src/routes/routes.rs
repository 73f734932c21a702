use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::a001_product::ui::ProductPage;
use crate::domain::a002_attendant::ui::AttendantPage;
use crate::layout::Shell;
use crate::system::home::HomePage;

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Products,
    Attendants,
    NotFound,
}

impl AppRoute {
    pub const NAV: [AppRoute; 3] = [AppRoute::Home, AppRoute::Products, AppRoute::Attendants];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Products => "/products",
            AppRoute::Attendants => "/attendants",
            AppRoute::NotFound => "/404",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Home => "🏠 Home",
            AppRoute::Products => "📦 Products",
            AppRoute::Attendants => "👥 Attendants",
            AppRoute::NotFound => "Not Found",
        }
    }

    /// Match a location path; a trailing slash is ignored
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => AppRoute::Home,
            "/products" => AppRoute::Products,
            "/attendants" => AppRoute::Attendants,
            _ => AppRoute::NotFound,
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductPage />
                    <Route path=path!("/attendants") view=AttendantPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <h1 class="page-title">"404 - Page Not Found"</h1>
            <p class="page-description">"The page you're looking for doesn't exist."</p>
            <div class="page-actions">
                <A href=AppRoute::Home.path() attr:class="btn btn-primary">
                    "Return to Home"
                </A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/products"), AppRoute::Products);
        assert_eq!(AppRoute::from_path("/products/"), AppRoute::Products);
        assert_eq!(AppRoute::from_path("/attendants?tab=1"), AppRoute::Attendants);
        assert_eq!(AppRoute::from_path("/orders"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/products/7"), AppRoute::NotFound);
    }

    #[test]
    fn test_nav_paths_resolve_to_themselves() {
        for route in AppRoute::NAV {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
    }
}
