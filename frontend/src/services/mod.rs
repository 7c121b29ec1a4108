//! Browser-facing services.
//!
//! # Services
//!
//! - [`upload`] - report upload to the analysis endpoint
//! - [`notify`] - transient notification banners

pub mod upload;
pub mod notify;

pub use upload::*;
pub use notify::*;
