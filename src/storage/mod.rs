pub mod file;
#[cfg(test)]
pub mod memory;
pub mod repository;
