//! Observability for zookeepr
//!
//! Structured logging only. Each log line is a single JSON object.
//!
//! ```ignore
//! use zookeepr::observability::Logger;
//!
//! Logger::info("ANIMAL_APPENDED", &[("id", "5")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
