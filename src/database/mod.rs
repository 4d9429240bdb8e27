pub mod connection;
pub mod memory;
pub mod postgres;
pub mod store;
