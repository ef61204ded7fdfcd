pub mod cart;
pub mod filter;
