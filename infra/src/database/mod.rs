//! Database access layer: connection pool management and the MySQL
//! repository implementations.

pub mod connection;
pub mod mysql;

pub use connection::create_pool;
