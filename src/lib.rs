//! zookeepr - A small JSON-backed HTTP API for an animal registry
//!
//! The collection is held in memory and rewritten to a single JSON document
//! on every append. Reads are linear scans.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod schema;
pub mod storage;
