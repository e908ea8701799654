//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DataGateway` - Typed stored-procedure operations over the store
//! - `SessionStore` - Persistence for the authenticated session

mod data_gateway;
mod session_store;

pub use data_gateway::DataGateway;
pub use session_store::SessionStore;
