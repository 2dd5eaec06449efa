//! Domain layer containing the request lifecycle and form rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, generation token, status state machine, errors)
//! - `lifecycle` - Form state, request status and the lifecycle aggregate
//! - `query` - Question flow values and validation
//! - `signup` - Signup form validation

pub mod foundation;
pub mod lifecycle;
pub mod query;
pub mod signup;
