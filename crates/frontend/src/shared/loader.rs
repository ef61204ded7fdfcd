//! View data loader
//!
//! Every load runs under a [`CancelToken`] handed out by the view controller.
//! The loader checks the token around each fetch so a superseded load stops
//! early, but the authoritative check happens when the controller commits the
//! result: a result whose ticket is no longer current is dropped there.

use contracts::domain::a001_equipment::aggregate::EquipmentItem;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_employee::aggregate::Employee;
use contracts::domain::a004_transaction::aggregate::Transaction;
use contracts::domain::a005_returned_item::aggregate::ReturnedItem;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::a001_equipment::filter::EquipmentQuery;
use crate::shared::api_utils::{Transport, TransportError};
use crate::shared::normalizer::normalize;

pub const EMPLOYEES_PATH: &str = "/employees";
pub const CATEGORIES_PATH: &str = "/categories";
pub const CURRENT_HOLDERS_PATH: &str = "/employees/current-holders";
pub const VERIFY_RETURNS_PATH: &str = "/employees/verify-returns";

#[derive(Debug, Error)]
pub enum LoadError {
    /// Superseded by a newer load; never shown to the user
    #[error("load cancelled")]
    Cancelled,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl LoadError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}

/// Shared cancellation flag of one load invocation
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn check(&self) -> Result<(), LoadError> {
        if self.is_cancelled() {
            Err(LoadError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewSelection {
    Home,
    Transaction,
    ReturnedItems,
}

impl ViewSelection {
    pub const ALL: [ViewSelection; 3] = [
        ViewSelection::Home,
        ViewSelection::Transaction,
        ViewSelection::ReturnedItems,
    ];

    /// Menu label as shown in the sidebar
    pub fn label(&self) -> &'static str {
        match self {
            ViewSelection::Home => "Home",
            ViewSelection::Transaction => "Transaction",
            ViewSelection::ReturnedItems => "Returned Items",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for ViewSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeData {
    pub employees: Vec<Employee>,
    pub categories: Vec<Category>,
    pub equipment: Vec<EquipmentItem>,
}

/// Data of the live view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewData {
    Home(HomeData),
    Transaction(Vec<Transaction>),
    ReturnedItems(Vec<ReturnedItem>),
}

impl ViewData {
    pub fn selection(&self) -> ViewSelection {
        match self {
            ViewData::Home(_) => ViewSelection::Home,
            ViewData::Transaction(_) => ViewSelection::Transaction,
            ViewData::ReturnedItems(_) => ViewSelection::ReturnedItems,
        }
    }
}

/// One view load invocation
#[derive(Debug, Clone)]
pub struct LoadTicket {
    pub generation: u64,
    pub selection: ViewSelection,
    /// Equipment query used by the Home load
    pub equipment_query: EquipmentQuery,
    pub token: CancelToken,
}

/// One equipment re-fetch triggered by the category filter
#[derive(Debug, Clone)]
pub struct InventoryTicket {
    pub generation: u64,
    pub query: EquipmentQuery,
    pub token: CancelToken,
}

#[derive(Debug, Clone)]
pub struct ViewDataLoader<T> {
    transport: T,
}

impl<T: Transport> ViewDataLoader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch_list<R: DeserializeOwned>(
        &self,
        path: &str,
        token: &CancelToken,
    ) -> Result<Vec<R>, LoadError> {
        token.check()?;
        let payload = self.transport.get_json(path).await;
        token.check()?;
        let payload = payload.map_err(|e| {
            log::warn!("GET {} failed: {}", path, e);
            e
        })?;
        Ok(normalize(payload))
    }

    /// Fetch everything the ticket's view needs.
    ///
    /// Home issues its three fetches concurrently and fails as a whole if any
    /// of them fails.
    pub async fn load(&self, ticket: &LoadTicket) -> Result<ViewData, LoadError> {
        let token = &ticket.token;
        log::debug!("load #{}: {}", ticket.generation, ticket.selection);
        match ticket.selection {
            ViewSelection::Home => {
                let equipment_path = ticket.equipment_query.path();
                let (employees, categories, equipment) = tokio::try_join!(
                    self.fetch_list::<Employee>(EMPLOYEES_PATH, token),
                    self.fetch_list::<Category>(CATEGORIES_PATH, token),
                    self.fetch_list::<EquipmentItem>(&equipment_path, token),
                )?;
                Ok(ViewData::Home(HomeData {
                    employees,
                    categories,
                    equipment,
                }))
            }
            ViewSelection::Transaction => self
                .fetch_list(CURRENT_HOLDERS_PATH, token)
                .await
                .map(ViewData::Transaction),
            ViewSelection::ReturnedItems => self
                .fetch_list(VERIFY_RETURNS_PATH, token)
                .await
                .map(ViewData::ReturnedItems),
        }
    }

    pub async fn load_equipment(
        &self,
        ticket: &InventoryTicket,
    ) -> Result<Vec<EquipmentItem>, LoadError> {
        self.fetch_list(&ticket.query.path(), &ticket.token).await
    }
}
