pub mod alert;
pub mod fetch_outcome;
pub mod link_state;
pub mod linked_account;
