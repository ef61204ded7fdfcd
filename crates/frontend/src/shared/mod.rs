pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod format;
pub mod loader;
pub mod normalizer;

#[cfg(test)]
pub mod test_support;
