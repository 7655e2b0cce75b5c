//! Alumnet Observability
//!
//! - Tracing subscriber setup (compact console or JSON lines)
//! - HTTP request/response logging middleware
//!
//! # Examples
//!
//! ```no_run
//! use alumnet_observability::init_tracing;
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//! }
//! ```

pub mod logging;

pub use logging::{LogFormat, init_tracing, logging_middleware};
