pub mod factory;
pub mod memory;
pub mod storage;
