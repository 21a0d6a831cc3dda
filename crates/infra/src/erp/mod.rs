//! ERP integration

mod client;

pub use client::{ErpClientConfig, ErpRestClient};
