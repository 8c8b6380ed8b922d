pub mod frontend;
pub mod key_fetcher;
pub mod param_store;
