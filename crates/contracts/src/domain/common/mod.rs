//! Common types and helpers shared by all records

pub mod lenient;
pub mod record_id;

// Re-exports
pub use record_id::{CategoryId, EquipmentId, RecordId};
