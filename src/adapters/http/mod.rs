pub mod fetch_task;
pub mod github_key_fetcher;
