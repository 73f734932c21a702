use contracts::domain::a001_product::Product;
use leptos::prelude::*;

use super::details::ProductDetails;
use super::list::ProductList;
use crate::domain::a001_product::api::ProductService;
use crate::shared::components::flash_banner::FlashBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::crud_page::CrudPageViewModel;
use crate::shared::http::{ApiClient, GlooTransport};

#[component]
pub fn ProductPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let client =
        use_context::<ApiClient<GlooTransport>>().expect("ApiClient not found in context");

    let vm = CrudPageViewModel::<Product>::new(
        ProductService::new(client),
        config.ui.message_timeout_ms,
    );
    vm.load();

    let state = vm.state;
    let dismiss = {
        let vm = vm.clone();
        Callback::new(move |_| vm.dismiss_flash())
    };

    view! {
        <div class="page-container">
            <PageHeader
                title="Product Management"
                description="Manage your product inventory. Add new products, update existing ones, and maintain stock levels."
            />
            <FlashBanner
                flash=Signal::derive(move || state.with(|s| s.flash.clone()))
                on_dismiss=dismiss
            />
            <ProductDetails vm=vm.clone() />
            <ProductList vm=vm />
        </div>
    }
}
