//! # zookeepr HTTP Server Module
//!
//! JSON over HTTP for the animal store, built on Axum.
//!
//! # Endpoints
//!
//! - `/` - Landing page
//! - `/health` - Health check
//! - `/api/animals` - List (filtered) and create animals
//! - `/api/animals/:id` - Fetch one animal

pub mod animal_routes;
pub mod config;
pub mod errors;
pub mod server;
pub mod site_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, NOT_PROPERLY_FORMATTED};
pub use server::HttpServer;
