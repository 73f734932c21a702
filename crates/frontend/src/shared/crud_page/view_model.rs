use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::Arc;

use super::state::{CrudEntity, CrudPageState};
use crate::shared::http::{GlooTransport, Transport};
use crate::shared::resource::ResourceService;

pub type ConfirmFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;
pub type TimerFn = Arc<dyn Fn(u32, Box<dyn FnOnce() + Send>) + Send + Sync>;

/// Browser interactions used by the view model
#[derive(Clone)]
pub struct BrowserHooks {
    /// Yes/no question before a delete
    pub confirm: ConfirmFn,
    /// Run a callback once after the given number of milliseconds
    pub set_timeout: TimerFn,
}

impl BrowserHooks {
    /// `window.confirm` and `setTimeout`
    pub fn browser() -> Self {
        Self {
            confirm: Arc::new(browser_confirm),
            set_timeout: Arc::new(|ms: u32, callback: Box<dyn FnOnce() + Send>| {
                gloo_timers::callback::Timeout::new(ms, callback).forget();
            }),
        }
    }
}

/// ViewModel shared by the product and attendant pages
///
/// Commands read and write `state` synchronously and run requests with
/// `spawn_local`; the signal is never held across an `.await`.
pub struct CrudPageViewModel<E: CrudEntity, T = GlooTransport> {
    pub state: RwSignal<CrudPageState<E>>,
    pub search: RwSignal<String>,
    /// Value of the list filter control, empty when the full list is shown
    pub filter: RwSignal<String>,
    service: ResourceService<E, T>,
    message_timeout_ms: u32,
    hooks: BrowserHooks,
}

impl<E: CrudEntity, T: Clone> Clone for CrudPageViewModel<E, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            search: self.search,
            filter: self.filter,
            service: self.service.clone(),
            message_timeout_ms: self.message_timeout_ms,
            hooks: self.hooks.clone(),
        }
    }
}

impl<E: CrudEntity, T: Transport + Clone + 'static> CrudPageViewModel<E, T> {
    pub fn new(service: ResourceService<E, T>, message_timeout_ms: u32) -> Self {
        Self::with_hooks(service, message_timeout_ms, BrowserHooks::browser())
    }

    pub fn with_hooks(
        service: ResourceService<E, T>,
        message_timeout_ms: u32,
        hooks: BrowserHooks,
    ) -> Self {
        Self {
            state: RwSignal::new(CrudPageState::new()),
            search: RwSignal::new(String::new()),
            filter: RwSignal::new(String::new()),
            service,
            message_timeout_ms,
            hooks,
        }
    }

    pub fn service(&self) -> &ResourceService<E, T> {
        &self.service
    }

    /// Reload the full collection, clearing keyword and filter
    pub fn load(&self) {
        spawn_local(self.load_task());
    }

    fn load_task(&self) -> impl Future<Output = ()> + 'static {
        self.search.set(String::new());
        self.filter.set(String::new());
        let service = self.service.clone();
        self.fetch_task(async move { service.list_all().await })
    }

    /// Server-side search; an empty keyword reloads everything
    pub fn run_search(&self) {
        let keyword = self.search.get_untracked().trim().to_string();
        if keyword.is_empty() {
            self.load();
            return;
        }
        self.filter.set(String::new());
        let service = self.service.clone();
        self.load_with(async move { service.search(&keyword).await });
    }

    pub fn clear_search(&self) {
        self.load();
    }

    /// Show the records matching the filter value `value`, fetched by `fetch`
    pub fn apply_filter<F>(&self, value: String, fetch: F)
    where
        F: Future<Output = Result<Vec<E>, ApiError>> + 'static,
    {
        self.search.set(String::new());
        self.filter.set(value);
        self.load_with(fetch);
    }

    /// Replace the list with the result of `fetch`
    pub fn load_with<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<E>, ApiError>> + 'static,
    {
        spawn_local(self.fetch_task(fetch));
    }

    fn fetch_task<F>(&self, fetch: F) -> impl Future<Output = ()> + 'static
    where
        F: Future<Output = Result<Vec<E>, ApiError>> + 'static,
    {
        let ticket = self.state.try_update(|s| s.begin_load());
        let vm = self.clone();
        async move {
            let Some(ticket) = ticket else {
                return;
            };
            let result = fetch.await;
            vm.state.try_update(|s| s.finish_load(ticket, result));
            vm.schedule_flash_clear();
        }
    }

    pub fn edit(&self, record: E) {
        self.state.update(|s| s.start_edit(&record));
    }

    pub fn cancel(&self) {
        self.state.update(|s| s.cancel_edit());
    }

    /// Validate, then create or update, then reload
    pub fn submit(&self) {
        if let Some(task) = self.submit_task() {
            spawn_local(task);
        }
    }

    fn submit_task(&self) -> Option<impl Future<Output = ()> + 'static> {
        let Some(submission) = self.state.try_update(|s| s.prepare_submit()).flatten() else {
            self.schedule_flash_clear();
            return None;
        };
        let vm = self.clone();
        Some(async move {
            let result = vm.service.submit(&submission).await;
            let reload = vm
                .state
                .try_update(|s| s.finish_submit(&submission, result))
                .unwrap_or(false);
            vm.schedule_flash_clear();
            if reload {
                vm.load_task().await;
            }
        })
    }

    /// Delete after confirmation; declining does nothing
    pub fn delete(&self, record: E) {
        if let Some(task) = self.delete_task(&record) {
            spawn_local(task);
        }
    }

    fn delete_task(&self, record: &E) -> Option<impl Future<Output = ()> + 'static> {
        let confirm = self.hooks.confirm.clone();
        let id = CrudPageState::<E>::confirm_delete(record, |text| confirm(text))?;
        Some(self.delete_by_id_task(id))
    }

    fn delete_by_id_task(&self, id: EntityId) -> impl Future<Output = ()> + 'static {
        let vm = self.clone();
        async move {
            let result = vm.service.delete(id).await;
            let reload = vm
                .state
                .try_update(|s| s.finish_delete(result))
                .unwrap_or(false);
            vm.schedule_flash_clear();
            if reload {
                vm.load_task().await;
            }
        }
    }

    pub fn dismiss_flash(&self) {
        if let Some(id) = self.state.with_untracked(|s| s.flash_id()) {
            self.state.update(|s| s.dismiss_flash(id));
        }
    }

    /// Clear the current banner after the configured delay, unless a newer
    /// one replaced it meanwhile
    fn schedule_flash_clear(&self) {
        let Some(id) = self.state.try_with_untracked(|s| s.flash_id()).flatten() else {
            return;
        };
        let state = self.state;
        (self.hooks.set_timeout)(
            self.message_timeout_ms,
            Box::new(move || {
                state.try_update(|s| s.dismiss_flash(id));
            }),
        );
    }
}

fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::api::ProductService;
    use crate::domain::a001_product::form::ProductForm;
    use crate::shared::crud_page::{FlashKind, PagePhase};
    use crate::shared::http::fake::FakeApi;
    use crate::shared::http::{ApiClient, Method};
    use contracts::domain::a001_product::{Product, ProductCategory};
    use futures::executor::block_on;
    use serde_json::json;
    use std::sync::Mutex;

    type PendingTimers = Arc<Mutex<Vec<(u32, Box<dyn FnOnce() + Send>)>>>;

    struct Harness {
        api: FakeApi,
        vm: CrudPageViewModel<Product, FakeApi>,
        prompts: Arc<Mutex<Vec<String>>>,
        timers: PendingTimers,
    }

    impl Harness {
        fn new(confirm_answer: bool) -> Self {
            let api = FakeApi::new();
            let prompts = Arc::new(Mutex::new(Vec::new()));
            let timers: PendingTimers = Arc::new(Mutex::new(Vec::new()));
            let hooks = BrowserHooks {
                confirm: {
                    let prompts = prompts.clone();
                    Arc::new(move |text: &str| {
                        prompts.lock().unwrap().push(text.to_string());
                        confirm_answer
                    })
                },
                set_timeout: {
                    let timers = timers.clone();
                    Arc::new(move |ms: u32, callback: Box<dyn FnOnce() + Send>| {
                        timers.lock().unwrap().push((ms, callback));
                    })
                },
            };
            let vm = CrudPageViewModel::with_hooks(
                ProductService::new(ApiClient::new(api.clone())),
                5000,
                hooks,
            );
            Self {
                api,
                vm,
                prompts,
                timers,
            }
        }

        fn seed(&self, name: &str) -> i64 {
            self.api.seed(
                "products",
                json!({"name": name, "price": 1.0, "category": "Other", "stock": 1}),
            )
        }

        fn load(&self) {
            block_on(self.vm.load_task());
        }

        fn ids(&self) -> Vec<i64> {
            self.vm.state.with_untracked(|s| s.items.iter().map(|p| p.id).collect())
        }

        fn flash_text(&self) -> Option<String> {
            self.vm
                .state
                .with_untracked(|s| s.flash.as_ref().map(|f| f.text.clone()))
        }

        fn fire_timers(&self) -> Vec<u32> {
            let pending: Vec<_> = self.timers.lock().unwrap().drain(..).collect();
            pending
                .into_iter()
                .map(|(ms, callback)| {
                    callback();
                    ms
                })
                .collect()
        }
    }

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "A".into(),
            price: "1.5".into(),
            category: "Books".into(),
            stock: "5".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_submit_creates_then_reloads() {
        let h = Harness::new(true);
        h.load();
        h.vm.state.update(|s| s.form = filled_form());

        block_on(h.vm.submit_task().expect("form is valid"));

        let methods: Vec<Method> = h.api.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Get, Method::Post, Method::Get]);
        h.vm.state.with_untracked(|s| {
            assert_eq!(s.items.len(), 1);
            assert_eq!(s.items[0].category, ProductCategory::Books);
            assert_eq!(s.form, ProductForm::default());
            assert_eq!(s.phase(), PagePhase::Ready);
        });
        assert_eq!(h.flash_text().as_deref(), Some("Product created successfully!"));
    }

    #[test]
    fn test_invalid_submit_sends_nothing() {
        let h = Harness::new(true);
        h.load();
        h.vm.state.update(|s| s.form = ProductForm::default());

        assert!(h.vm.submit_task().is_none());

        assert!(h.api.mutations().is_empty());
        let kind = h.vm.state.with_untracked(|s| s.flash.as_ref().map(|f| f.kind));
        assert_eq!(kind, Some(FlashKind::Error));
    }

    #[test]
    fn test_confirmed_delete_reloads_without_record() {
        let h = Harness::new(true);
        let keep = h.seed("Keep");
        h.seed("Gone");
        h.load();

        let record = h.vm.state.with_untracked(|s| s.items[1].clone());
        block_on(h.vm.delete_task(&record).expect("confirmed"));

        assert_eq!(h.ids(), vec![keep]);
        assert_eq!(h.api.mutations().len(), 1);
        assert_eq!(h.api.mutations()[0].method, Method::Delete);
        assert!(h.prompts.lock().unwrap()[0].contains("\"Gone\""));
        assert_eq!(h.flash_text().as_deref(), Some("Product deleted successfully!"));
    }

    #[test]
    fn test_delete_with_text_reply_still_reloads() {
        let h = Harness::new(true);
        let keep = h.seed("Keep");
        let gone = h.seed("Gone");
        h.api.reply_to_deletes_with(json!("Product deleted successfully"));
        h.load();

        let record = h.vm.state.with_untracked(|s| {
            s.items.iter().find(|p| p.id == gone).cloned().unwrap()
        });
        block_on(h.vm.delete_task(&record).expect("confirmed"));

        assert_eq!(h.ids(), vec![keep]);
        assert_eq!(h.flash_text().as_deref(), Some("Product deleted successfully!"));
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let h = Harness::new(false);
        h.seed("Keep");
        h.load();
        let before = h.api.requests().len();

        let record = h.vm.state.with_untracked(|s| s.items[0].clone());
        assert!(h.vm.delete_task(&record).is_none());

        assert_eq!(h.prompts.lock().unwrap().len(), 1);
        assert_eq!(h.api.requests().len(), before);
        assert_eq!(h.ids().len(), 1);
        assert!(h.flash_text().is_none());
    }

    #[test]
    fn test_flash_cleared_after_configured_delay() {
        let h = Harness::new(true);
        h.load();
        h.vm.state.update(|s| s.form = filled_form());
        block_on(h.vm.submit_task().expect("form is valid"));
        assert!(h.flash_text().is_some());

        let delays = h.fire_timers();

        assert!(!delays.is_empty());
        assert!(delays.iter().all(|ms| *ms == 5000));
        assert!(h.flash_text().is_none());
    }

    #[test]
    fn test_old_timer_keeps_newer_flash() {
        let h = Harness::new(true);
        h.vm.state.update(|s| s.form = ProductForm::default());
        assert!(h.vm.submit_task().is_none());
        let first: Vec<_> = h.timers.lock().unwrap().drain(..).collect();

        h.vm.state.update(|s| {
            s.show_success("Newer");
        });
        for (_, callback) in first {
            callback();
        }

        assert_eq!(h.flash_text().as_deref(), Some("Newer"));
    }

    #[test]
    fn test_reload_after_mutation_clears_search_and_filter() {
        let h = Harness::new(true);
        h.seed("Lamp");
        h.load();
        h.vm.search.set("lamp".into());
        h.vm.filter.set("Books".into());
        h.vm.state.update(|s| s.form = filled_form());

        block_on(h.vm.submit_task().expect("form is valid"));

        assert_eq!(h.vm.search.get_untracked(), "");
        assert_eq!(h.vm.filter.get_untracked(), "");
        assert_eq!(h.ids().len(), 2);
    }
}
