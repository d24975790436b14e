//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod document_store;

pub use clock::Clock;
pub use document_store::{DocumentStore, StoreError};
