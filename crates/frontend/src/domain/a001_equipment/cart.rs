//! Request cart
//!
//! Ordered, in-memory collection of requested equipment. A line exists only
//! while its quantity is at least one; every operation that would bring it to
//! zero or below removes the line instead.

use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::domain::a001_equipment::aggregate::EquipmentItem;
use contracts::domain::common::EquipmentId;
use contracts::usecases::u501_submit_request::request::{RequestLine, RequestSubmission};
use std::num::NonZeroU32;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoffError {
    #[error("Cannot submit an empty request")]
    EmptyCart,

    #[error("A request is already being submitted")]
    InProgress,
}

/// Result reported back by the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffOutcome {
    Accepted,
    Rejected(String),
}

/// Submission collaborator: sends the request and reports how it went.
///
/// Implementations never touch the cart; the outcome is applied by the caller.
#[async_trait(?Send)]
pub trait RequestSubmitter {
    async fn submit(&self, request: &RequestSubmission) -> HandoffOutcome;
}

pub type SharedSubmitter = Arc<dyn RequestSubmitter + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item: EquipmentItem,
    quantity: NonZeroU32,
}

impl CartLine {
    pub fn item(&self) -> &EquipmentItem {
        &self.item
    }

    pub fn id(&self) -> EquipmentId {
        self.item.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    pub fn display_name(&self) -> &str {
        self.item.display_name()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCart {
    lines: Vec<CartLine>,
}

impl RequestCart {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, item_id: EquipmentId) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == item_id)
    }

    /// Add one unit of `item`, merging with an existing line for the same id
    pub fn add(&mut self, item: &EquipmentItem) {
        match self.position(item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                log::debug!("cart: {} -> {}", item.id, line.quantity);
            }
            None => {
                self.lines.push(CartLine {
                    item: item.clone(),
                    quantity: NonZeroU32::MIN,
                });
                log::debug!("cart: added {}", item.id);
            }
        }
    }

    /// Set the quantity of an existing line; `n <= 0` removes it.
    ///
    /// Unknown ids are ignored: a line can only be created through [`add`].
    ///
    /// [`add`]: RequestCart::add
    pub fn set_quantity(&mut self, item_id: EquipmentId, n: i64) {
        let Some(index) = self.position(item_id) else {
            return;
        };
        let clamped = u32::try_from(n.max(0)).unwrap_or(u32::MAX);
        match NonZeroU32::new(clamped) {
            Some(quantity) => self.lines[index].quantity = quantity,
            None => {
                self.lines.remove(index);
                log::debug!("cart: {} dropped at quantity {}", item_id, n);
            }
        }
    }

    /// "+" control
    pub fn increment(&mut self, item_id: EquipmentId) {
        if let Some(current) = self.quantity_of(item_id) {
            self.set_quantity(item_id, i64::from(current) + 1);
        }
    }

    /// "-" control; removes the line when it reaches zero
    pub fn decrement(&mut self, item_id: EquipmentId) {
        if let Some(current) = self.quantity_of(item_id) {
            self.set_quantity(item_id, i64::from(current) - 1);
        }
    }

    pub fn remove(&mut self, item_id: EquipmentId) {
        if let Some(index) = self.position(item_id) {
            self.lines.remove(index);
            log::debug!("cart: removed {}", item_id);
        }
    }

    pub fn quantity_of(&self, item_id: EquipmentId) -> Option<u32> {
        self.position(item_id).map(|i| self.lines[i].quantity())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Summed in `u64`: lines are each capped at `u32::MAX`, the total is not
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// (display name, quantity) pairs in insertion order.
    ///
    /// Borrowing iterator: call again (or clone it) to enumerate once more.
    pub fn summary_lines(&self) -> SummaryLines<'_> {
        SummaryLines {
            inner: self.lines.iter(),
        }
    }

    /// User pressed "Cancel" on the request summary
    pub fn cancel_request(&mut self) {
        log::info!("cart: request cancelled ({} lines)", self.lines.len());
        self.lines.clear();
    }

    /// Serialize the cart into a submission payload. The cart is left untouched
    /// until [`acknowledge`](RequestCart::acknowledge) reports the outcome.
    pub fn submission(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Result<RequestSubmission, HandoffError> {
        if self.is_empty() {
            return Err(HandoffError::EmptyCart);
        }
        let items = self
            .lines
            .iter()
            .map(|line| RequestLine {
                item_id: line.id(),
                quantity: line.quantity(),
            })
            .collect();
        Ok(RequestSubmission::new(items, today, window_days))
    }

    pub fn acknowledge(&mut self, outcome: HandoffOutcome) {
        match outcome {
            HandoffOutcome::Accepted => {
                log::info!("cart: request accepted, clearing {} lines", self.lines.len());
                self.lines.clear();
            }
            HandoffOutcome::Rejected(reason) => {
                log::warn!("cart: request rejected ({}), keeping cart", reason);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryLines<'a> {
    inner: std::slice::Iter<'a, CartLine>,
}

impl<'a> Iterator for SummaryLines<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|line| (line.display_name(), line.quantity()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SummaryLines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dell() -> EquipmentItem {
        EquipmentItem::new(9, "Dell", 3)
    }

    fn assert_invariants(cart: &RequestCart) {
        let sum: u64 = cart.lines().iter().map(|l| u64::from(l.quantity())).sum();
        assert_eq!(cart.total_units(), sum);
        assert!(cart.lines().iter().all(|l| l.quantity() >= 1));
    }

    #[test]
    fn test_add_twice_merges() {
        let mut cart = RequestCart::new();
        cart.add(&dell());
        cart.add(&dell());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(EquipmentId(9)), Some(2));
        assert_eq!(cart.total_units(), 2);
    }

    #[test]
    fn test_set_quantity_zero_empties_cart() {
        let mut cart = RequestCart::new();
        cart.add(&dell());
        cart.set_quantity(EquipmentId(9), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total_units(), 0);

        cart.add(&dell());
        cart.set_quantity(EquipmentId(9), -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = RequestCart::new();
        cart.add(&dell());
        let before = cart.clone();
        cart.remove(EquipmentId(404));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_unknown_id_does_not_create_line() {
        let mut cart = RequestCart::new();
        cart.set_quantity(EquipmentId(1), 5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let mut cart = RequestCart::new();
        cart.add(&dell());
        cart.increment(EquipmentId(9));
        assert_eq!(cart.quantity_of(EquipmentId(9)), Some(2));
        cart.decrement(EquipmentId(9));
        cart.decrement(EquipmentId(9));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_scenario_add_add_set_one() {
        let mut cart = RequestCart::new();
        cart.add(&dell());
        cart.add(&dell());
        cart.set_quantity(EquipmentId(9), 1);
        let lines: Vec<_> = cart.summary_lines().collect();
        assert_eq!(lines, vec![("Dell", 1)]);
        assert_eq!(cart.total_units(), 1);
    }

    #[test]
    fn test_summary_is_ordered_and_restartable() {
        let mut cart = RequestCart::new();
        let mut mouse = EquipmentItem::new(2, "Logitech", 10);
        mouse.name = Some("MX Master".into());
        cart.add(&dell());
        cart.add(&mouse);
        cart.add(&dell());

        let summary = cart.summary_lines();
        assert_eq!(summary.len(), 2);
        let first: Vec<_> = summary.clone().collect();
        let second: Vec<_> = summary.collect();
        assert_eq!(first, vec![("Dell", 2), ("MX Master", 1)]);
        assert_eq!(first, second);
        assert_eq!(cart.summary_lines().count(), 2);
    }

    #[test]
    fn test_mixed_operations_keep_invariants() {
        let items: Vec<_> = (1..=4).map(|i| EquipmentItem::new(i, "Item", 1)).collect();
        let mut cart = RequestCart::new();
        let ops: [(usize, i64); 12] = [
            (0, 99),
            (1, 99),
            (0, 99),
            (2, 3),
            (1, 0),
            (3, 99),
            (2, -1),
            (3, 7),
            (0, 1),
            (1, 99),
            (3, -100),
            (1, 2),
        ];
        for (index, op) in ops {
            let id = items[index].id;
            match op {
                99 => cart.add(&items[index]),
                n if n < 0 && n != -1 => cart.remove(id),
                n => cart.set_quantity(id, n),
            }
            assert_invariants(&cart);
        }
        let lines: Vec<_> = cart.lines().iter().map(|l| (l.id().value(), l.quantity())).collect();
        assert_eq!(lines, vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_submission_leaves_cart_until_acknowledged() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 23).unwrap();
        let mut cart = RequestCart::new();
        assert_eq!(cart.submission(today, 7), Err(HandoffError::EmptyCart));

        cart.add(&dell());
        cart.add(&dell());
        let request = cart.submission(today, 7).unwrap();
        assert_eq!(
            request.items,
            vec![RequestLine {
                item_id: EquipmentId(9),
                quantity: 2
            }]
        );
        assert_eq!(request.return_date, NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
        assert_eq!(cart.total_units(), 2);

        cart.acknowledge(HandoffOutcome::Rejected("HTTP 500".into()));
        assert_eq!(cart.total_units(), 2);

        cart.acknowledge(HandoffOutcome::Accepted);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cancel_request_clears() {
        let mut cart = RequestCart::new();
        cart.add(&dell());
        cart.cancel_request();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_large_quantities_do_not_overflow_total() {
        let mut cart = RequestCart::new();
        cart.add(&dell());
        cart.add(&EquipmentItem::new(10, "HP", 1));
        cart.set_quantity(EquipmentId(9), 3_000_000_000);
        cart.set_quantity(EquipmentId(10), 3_000_000_000);
        assert_eq!(cart.total_units(), 6_000_000_000);
        assert_invariants(&cart);

        cart.set_quantity(EquipmentId(9), i64::MAX);
        assert_eq!(cart.quantity_of(EquipmentId(9)), Some(u32::MAX));
        assert_eq!(cart.total_units(), u64::from(u32::MAX) + 3_000_000_000);
        assert_eq!(
            cart.submission(NaiveDate::from_ymd_opt(2025, 9, 23).unwrap(), 7)
                .unwrap()
                .total_units(),
            cart.total_units()
        );
    }
}
