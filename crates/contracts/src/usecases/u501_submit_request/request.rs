//! Cart to submission handoff payload.
//!
//! The console only builds this payload; sending it and reporting the outcome
//! is up to the submission collaborator.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::EquipmentId;

/// Default checkout window in days
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// One requested item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLine {
    pub item_id: EquipmentId,
    pub quantity: u32,
}

/// Заявка на выдачу оборудования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSubmission {
    /// Client-side reference so a retried handoff can be recognised
    pub client_ref: Uuid,
    pub items: Vec<RequestLine>,
    pub start_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl RequestSubmission {
    pub fn new(items: Vec<RequestLine>, start_date: NaiveDate, window_days: i64) -> Self {
        Self {
            client_ref: Uuid::new_v4(),
            items,
            start_date,
            return_date: start_date + Duration::days(window_days),
        }
    }

    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
