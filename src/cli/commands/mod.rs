pub mod authorized_keys;
pub mod link;
pub mod panel;
pub mod status;
pub mod unlink;
