use contracts::domain::a002_attendant::Attendant;
use leptos::prelude::*;

use super::details::AttendantDetails;
use super::list::AttendantList;
use crate::domain::a002_attendant::api::AttendantService;
use crate::shared::components::flash_banner::FlashBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::crud_page::CrudPageViewModel;
use crate::shared::http::{ApiClient, GlooTransport};

#[component]
pub fn AttendantPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let client =
        use_context::<ApiClient<GlooTransport>>().expect("ApiClient not found in context");

    let vm = CrudPageViewModel::<Attendant>::new(
        AttendantService::new(client),
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
                title="Attendant Management"
                description="Manage staff attendants and their information. Keep track of contact details and additional notes."
            />
            <FlashBanner
                flash=Signal::derive(move || state.with(|s| s.flash.clone()))
                on_dismiss=dismiss
            />
            <AttendantDetails vm=vm.clone() />
            <AttendantList vm=vm />
        </div>
    }
}
