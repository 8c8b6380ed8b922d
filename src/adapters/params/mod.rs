pub mod file_param_store;
#[cfg(test)]
pub mod memory_param_store;
