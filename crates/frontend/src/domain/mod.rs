pub mod a001_equipment;
pub mod a004_transaction;
