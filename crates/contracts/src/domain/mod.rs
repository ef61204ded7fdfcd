pub mod a001_equipment;
pub mod a002_category;
pub mod a003_employee;
pub mod a004_transaction;
pub mod a005_returned_item;
pub mod common;
