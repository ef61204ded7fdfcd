//! View controller
//!
//! Single owner of the console state: menu selection, Pendings overlay, the
//! live [`LoadState`], the inventory filter and the request cart. Loads are
//! issued as tickets and their results come back through `commit*`, which is
//! the only place fetched data enters the state.

use chrono::NaiveDate;
use contracts::domain::a001_equipment::aggregate::EquipmentItem;
use contracts::domain::a004_transaction::aggregate::Transaction;
use contracts::domain::a005_returned_item::aggregate::ReturnedItem;
use contracts::usecases::u501_submit_request::request::RequestSubmission;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::a001_equipment::cart::{HandoffError, HandoffOutcome, RequestCart};
use crate::domain::a001_equipment::filter::{CategorySelector, InventoryFilter};
use crate::domain::a004_transaction::summary::{PendingsSummary, TransactionStats};
use crate::shared::config::ConsoleConfig;
use crate::shared::loader::{
    CancelToken, HomeData, InventoryTicket, LoadError, LoadState, LoadTicket, ViewData,
    ViewSelection,
};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data";
pub const CATEGORY_LOAD_FAILED_MESSAGE: &str = "Failed to load equipment for category";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Unknown menu item: {0}")]
    UnknownMenu(String),

    #[error("Pendings are only available from Transaction (current view: {0})")]
    PendingsUnavailable(ViewSelection),
}

/// Which render path is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Home,
    Transaction,
    Pendings,
    ReturnedItems,
}

#[derive(Debug, Clone)]
struct InFlight {
    generation: u64,
    token: CancelToken,
}

impl InFlight {
    fn matches(&self, generation: u64, token: &CancelToken) -> bool {
        self.generation == generation && !token.is_cancelled()
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    selection: ViewSelection,
    pendings_open: bool,
    load: LoadState<ViewData>,

    filter: InventoryFilter,
    inventory_loading: bool,
    inventory_error: Option<String>,

    cart: RequestCart,
    submitting: Option<Uuid>,

    preview_limit: usize,
    window_days: i64,

    generation: u64,
    view_in_flight: Option<InFlight>,
    inventory_in_flight: Option<InFlight>,
}

impl ViewController {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            selection: ViewSelection::Home,
            pendings_open: false,
            load: LoadState::Idle,
            filter: InventoryFilter::new(config.inventory.per_page),
            inventory_loading: false,
            inventory_error: None,
            cart: RequestCart::new(),
            submitting: None,
            preview_limit: config.inventory.preview_limit,
            window_days: config.request.window_days,
            generation: 0,
            view_in_flight: None,
            inventory_in_flight: None,
        }
    }

    fn next_in_flight(&mut self) -> InFlight {
        self.generation += 1;
        InFlight {
            generation: self.generation,
            token: CancelToken::new(),
        }
    }

    fn cancel_view_load(&mut self) {
        if let Some(prev) = self.view_in_flight.take() {
            log::debug!("cancelling load #{}", prev.generation);
            prev.token.cancel();
        }
    }

    fn cancel_inventory_load(&mut self) {
        if let Some(prev) = self.inventory_in_flight.take() {
            log::debug!("cancelling equipment fetch #{}", prev.generation);
            prev.token.cancel();
        }
        self.inventory_loading = false;
    }

    // === Menu ===

    /// Sidebar click by label ("Home", "Transaction", "Returned Items")
    pub fn select_menu(&mut self, label: &str) -> Result<LoadTicket, ViewError> {
        let selection = ViewSelection::from_label(label)
            .ok_or_else(|| ViewError::UnknownMenu(label.to_string()))?;
        Ok(self.select(selection))
    }

    /// Switch view and issue its load. Any in-flight load is cancelled and the
    /// Pendings overlay is closed, also when re-selecting the current view.
    pub fn select(&mut self, selection: ViewSelection) -> LoadTicket {
        self.cancel_view_load();
        self.cancel_inventory_load();
        self.inventory_error = None;
        self.selection = selection;
        self.pendings_open = false;
        self.load = LoadState::Loading;

        let in_flight = self.next_in_flight();
        let ticket = LoadTicket {
            generation: in_flight.generation,
            selection,
            equipment_query: self.filter.current_query(),
            token: in_flight.token.clone(),
        };
        self.view_in_flight = Some(in_flight);
        log::info!("view -> {} (load #{})", selection, ticket.generation);
        ticket
    }

    /// Apply a finished load. Returns `false` when the result was discarded
    /// because a newer load superseded it or it was cancelled.
    pub fn commit(&mut self, ticket: &LoadTicket, result: Result<ViewData, LoadError>) -> bool {
        let current = self
            .view_in_flight
            .as_ref()
            .is_some_and(|f| f.matches(ticket.generation, &ticket.token));
        if !current {
            log::debug!(
                "discarding stale result of load #{} ({})",
                ticket.generation,
                ticket.selection
            );
            return false;
        }

        match result {
            Err(LoadError::Cancelled) => return false,
            Ok(data) if data.selection() != ticket.selection => {
                log::warn!(
                    "load #{} returned {} data for {}",
                    ticket.generation,
                    data.selection(),
                    ticket.selection
                );
                self.load = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
            Ok(data) => {
                log::info!("load #{} ({}) committed", ticket.generation, ticket.selection);
                self.load = LoadState::Loaded(data);
            }
            Err(LoadError::Transport(e)) => {
                log::warn!("load #{} ({}) failed: {}", ticket.generation, ticket.selection, e);
                self.load = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.view_in_flight = None;
        true
    }

    // === Pendings overlay ===

    pub fn open_pendings(&mut self) -> Result<(), ViewError> {
        if self.selection != ViewSelection::Transaction {
            return Err(ViewError::PendingsUnavailable(self.selection));
        }
        self.pendings_open = true;
        Ok(())
    }

    pub fn close_pendings(&mut self) {
        self.pendings_open = false;
    }

    // === Inventory ===

    /// Category tile click: select it and issue the equipment re-fetch
    pub fn select_category(&mut self, selector: impl Into<CategorySelector>) -> InventoryTicket {
        self.cancel_inventory_load();
        let query = self.filter.filter_by_category(selector);
        self.inventory_loading = true;
        self.inventory_error = None;

        let in_flight = self.next_in_flight();
        let ticket = InventoryTicket {
            generation: in_flight.generation,
            query,
            token: in_flight.token.clone(),
        };
        self.inventory_in_flight = Some(in_flight);
        ticket
    }

    /// Apply a finished equipment re-fetch; the list is replaced wholesale
    pub fn commit_inventory(
        &mut self,
        ticket: &InventoryTicket,
        result: Result<Vec<EquipmentItem>, LoadError>,
    ) -> bool {
        let current = self
            .inventory_in_flight
            .as_ref()
            .is_some_and(|f| f.matches(ticket.generation, &ticket.token));
        if !current {
            log::debug!("discarding stale equipment fetch #{}", ticket.generation);
            return false;
        }

        match result {
            Err(LoadError::Cancelled) => return false,
            Ok(items) => match &mut self.load {
                LoadState::Loaded(ViewData::Home(home)) => {
                    log::debug!("equipment fetch #{}: {} items", ticket.generation, items.len());
                    home.equipment = items;
                }
                _ => {
                    log::debug!("equipment fetch #{} arrived without a Home view", ticket.generation);
                }
            },
            Err(LoadError::Transport(e)) => {
                log::warn!("equipment fetch #{} failed: {}", ticket.generation, e);
                self.inventory_error = Some(CATEGORY_LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.inventory_in_flight = None;
        self.inventory_loading = false;
        true
    }

    /// Component teardown: nothing in flight may land afterwards
    pub fn teardown(&mut self) {
        self.cancel_view_load();
        self.cancel_inventory_load();
    }

    // === Cart ===

    pub fn add_to_cart(&mut self, item: &EquipmentItem) {
        self.cart.add(item);
    }

    pub fn cart(&self) -> &RequestCart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut RequestCart {
        &mut self.cart
    }

    /// Build the payload for the submission collaborator (request window
    /// starts `today`). Only one submission may be outstanding at a time.
    pub fn begin_submission(&mut self, today: NaiveDate) -> Result<RequestSubmission, HandoffError> {
        if self.submitting.is_some() {
            return Err(HandoffError::InProgress);
        }
        let request = self.cart.submission(today, self.window_days)?;
        log::info!("request {} handed off: {} units", request.client_ref, request.total_units());
        self.submitting = Some(request.client_ref);
        Ok(request)
    }

    /// Apply the collaborator's outcome. Returns `false` when `client_ref` is
    /// not the outstanding submission.
    pub fn finish_submission(&mut self, client_ref: Uuid, outcome: HandoffOutcome) -> bool {
        if self.submitting != Some(client_ref) {
            log::debug!("ignoring outcome of request {}", client_ref);
            return false;
        }
        self.submitting = None;
        self.cart.acknowledge(outcome);
        true
    }

    pub fn submitting(&self) -> bool {
        self.submitting.is_some()
    }

    // === Read model ===

    pub fn selection(&self) -> ViewSelection {
        self.selection
    }

    pub fn pendings_open(&self) -> bool {
        self.pendings_open
    }

    pub fn active_view(&self) -> ActiveView {
        match self.selection {
            ViewSelection::Home => ActiveView::Home,
            ViewSelection::Transaction if self.pendings_open => ActiveView::Pendings,
            ViewSelection::Transaction => ActiveView::Transaction,
            ViewSelection::ReturnedItems => ActiveView::ReturnedItems,
        }
    }

    pub fn load_state(&self) -> &LoadState<ViewData> {
        &self.load
    }

    pub fn filter(&self) -> &InventoryFilter {
        &self.filter
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.filter.selected_label()
    }

    pub fn inventory_loading(&self) -> bool {
        self.inventory_loading
    }

    pub fn inventory_error(&self) -> Option<&str> {
        self.inventory_error.as_deref()
    }

    pub fn home(&self) -> Option<&HomeData> {
        match &self.load {
            LoadState::Loaded(ViewData::Home(home)) => Some(home),
            _ => None,
        }
    }

    /// Items shown in the Home equipment panel
    pub fn equipment_preview(&self) -> &[EquipmentItem] {
        self.home()
            .map(|home| {
                let end = home.equipment.len().min(self.preview_limit);
                &home.equipment[..end]
            })
            .unwrap_or(&[])
    }

    pub fn transactions(&self) -> &[Transaction] {
        match &self.load {
            LoadState::Loaded(ViewData::Transaction(rows)) => rows.as_slice(),
            _ => &[],
        }
    }

    pub fn returned_items(&self) -> &[ReturnedItem] {
        match &self.load {
            LoadState::Loaded(ViewData::ReturnedItems(rows)) => rows.as_slice(),
            _ => &[],
        }
    }

    pub fn transaction_stats(&self) -> TransactionStats {
        TransactionStats::from_transactions(self.transactions())
    }

    pub fn pendings_summary(&self) -> PendingsSummary {
        PendingsSummary::from_transactions(self.transactions())
    }
}
