//! Attestation Collector integration
//!
//! `client` talks to the collector, `poller` keeps the status cache fresh.

pub mod client;
pub mod poller;

pub use client::CollectorClient;
pub use poller::Poller;
