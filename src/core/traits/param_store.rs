use crate::core::errors::Result;

/// Port for the persistent key-value store holding the linked account.
pub trait ParamStore {
    /// Read a value. Absent keys read as an empty string.
    fn get(&self, key: &str) -> Result<String>;

    /// Write a value, replacing any previous one.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
