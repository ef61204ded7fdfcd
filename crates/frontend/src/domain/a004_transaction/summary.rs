use contracts::domain::a004_transaction::aggregate::{Transaction, TransactionStatus};

use crate::shared::date_utils::format_us_date_or_na;

/// Counters for the Transaction summary cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionStats {
    pub pending: usize,
    pub approved: usize,
    pub denied: usize,
    pub returned: usize,
}

impl TransactionStats {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut stats, t| {
                match t.status {
                    TransactionStatus::Pending => stats.pending += 1,
                    TransactionStatus::Approved => stats.approved += 1,
                    TransactionStatus::Denied => stats.denied += 1,
                    TransactionStatus::Returned => stats.returned += 1,
                    TransactionStatus::Unknown => {}
                }
                stats
            })
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.denied + self.returned
    }
}

/// Data behind the Pendings overlay, derived from the loaded transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingsSummary {
    pub pending: Vec<Transaction>,
    pub denied_count: usize,
}

impl PendingsSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            pending: transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Pending)
                .cloned()
                .collect(),
            denied_count: transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Denied)
                .count(),
        }
    }
}

/// Table row for a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub equipment: String,
    pub status: &'static str,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id,
            date: format_us_date_or_na(t.created_at.as_deref()),
            equipment: t.equipment_label().to_string(),
            status: t.status.label(),
        }
    }
}
