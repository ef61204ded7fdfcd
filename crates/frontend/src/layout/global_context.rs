//! Console context shared through Leptos context.
//!
//! Wraps the [`ViewController`] in a signal and runs loads with `spawn_local`.
//! Results always go back through `commit*`, so a late response for a view the
//! user already left never lands.

use contracts::domain::a001_equipment::aggregate::EquipmentItem;
use contracts::domain::common::EquipmentId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_equipment::cart::SharedSubmitter;
use crate::domain::a001_equipment::filter::CategorySelector;
use crate::layout::view_controller::ViewController;
use crate::shared::api_utils::HttpTransport;
use crate::shared::config::ConsoleConfig;
use crate::shared::date_utils::today;
use crate::shared::loader::ViewDataLoader;

#[derive(Clone, Copy)]
pub struct ConsoleContext {
    pub state: RwSignal<ViewController>,
    pub employee_name: RwSignal<String>,
    pub notifications: RwSignal<u32>,
    loader: StoredValue<ViewDataLoader<HttpTransport>>,
    submitter: StoredValue<Option<SharedSubmitter>>,
}

impl ConsoleContext {
    pub fn new(config: &ConsoleConfig, submitter: Option<SharedSubmitter>) -> Self {
        Self {
            state: RwSignal::new(ViewController::new(config)),
            employee_name: RwSignal::new("Employee User".to_string()),
            notifications: RwSignal::new(0),
            loader: StoredValue::new(ViewDataLoader::new(HttpTransport::new(
                config.api.clone(),
            ))),
            submitter: StoredValue::new(submitter),
        }
    }

    /// Sidebar click
    pub fn select_menu(&self, label: &str) {
        let ticket = match self.state.try_update(|vc| vc.select_menu(label)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("{}", e);
                return;
            }
            None => return,
        };
        let this = *self;
        spawn_local(async move {
            let loader = this.loader.get_value();
            let result = loader.load(&ticket).await;
            this.state.try_update(|vc| vc.commit(&ticket, result));
        });
    }

    /// Category tile click
    pub fn select_category(&self, selector: CategorySelector) {
        let Some(ticket) = self.state.try_update(|vc| vc.select_category(selector)) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let loader = this.loader.get_value();
            let result = loader.load_equipment(&ticket).await;
            this.state.try_update(|vc| vc.commit_inventory(&ticket, result));
        });
    }

    pub fn open_pendings(&self) {
        if let Some(Err(e)) = self.state.try_update(|vc| vc.open_pendings()) {
            log::warn!("{}", e);
        }
    }

    pub fn close_pendings(&self) {
        self.state.update(|vc| vc.close_pendings());
    }

    pub fn add_to_cart(&self, item: &EquipmentItem) {
        self.state.update(|vc| vc.add_to_cart(item));
    }

    pub fn increment(&self, id: EquipmentId) {
        self.state.update(|vc| vc.cart_mut().increment(id));
    }

    pub fn decrement(&self, id: EquipmentId) {
        self.state.update(|vc| vc.cart_mut().decrement(id));
    }

    pub fn cancel_request(&self) {
        self.state.update(|vc| vc.cart_mut().cancel_request());
    }

    pub fn can_submit(&self) -> bool {
        self.submitter.with_value(Option::is_some)
    }

    /// "Request" button: hand the cart to the submitter. The cart stays as it
    /// is until the outcome comes back.
    pub fn submit_request(&self) {
        let Some(submitter) = self.submitter.get_value() else {
            log::warn!("no submission endpoint configured, request kept in cart");
            return;
        };
        let request = match self.state.try_update(|vc| vc.begin_submission(today())) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("{}", e);
                return;
            }
            None => return,
        };
        let this = *self;
        spawn_local(async move {
            let outcome = submitter.submit(&request).await;
            this.state
                .try_update(|vc| vc.finish_submission(request.client_ref, outcome));
        });
    }

    /// Cancel everything in flight (component teardown)
    pub fn teardown(&self) {
        self.state.try_update(|vc| vc.teardown());
    }
}

pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>().expect("ConsoleContext not found in context")
}
