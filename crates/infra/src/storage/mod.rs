//! Durable edit-state storage

mod session_store;

pub use session_store::FileSessionStore;
