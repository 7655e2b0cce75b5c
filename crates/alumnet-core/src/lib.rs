//! # Alumnet Core
//!
//! Core types, errors, and utilities for the Alumnet API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Listing parameters and page results
//! - [`query`]: Whitelist-driven, parameterized listing query plans
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use alumnet_core::errors::AppError;
//! use alumnet_core::pagination::PaginationRequest;
//! use alumnet_core::query::build;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Alumni not found"));
//!
//! let page = PaginationRequest::default().normalize();
//! let plan = build(&page, &ALUMNI_QUERY);
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod query;

pub use errors::{AppError, ErrorKind};
pub use pagination::{PageRequest, PageResult, PaginationRequest};
pub use password::{hash_password, verify_dummy, verify_password};
pub use query::{EntityQuerySpec, ListingPlan, SortDirection, SortSpec};
