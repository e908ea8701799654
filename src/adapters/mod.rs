//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `mysql` - Stored-procedure data gateway over a MySQL pool
//! - `memory` - In-memory gateway for tests and local development
//! - `session_file` - JSON file session persistence

pub mod memory;
pub mod mysql;
pub mod session_file;

pub use memory::InMemoryDataGateway;
pub use mysql::MySqlDataGateway;
pub use session_file::FileSessionStore;
