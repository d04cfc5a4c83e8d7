//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate this selection" or "price this bundle".

pub mod bundle_service;

pub use bundle_service::{BundleService, PriceQuote};
