//! Query construction and execution.
//!
//! - `request.rs`: `QueryRequest`, the closed set of query kinds
//! - `executor.rs`: dispatch of a request against `UsersStorage`
//! - `injection.rs`: appends adversarial clauses before execution

pub mod executor;
pub mod injection;
pub mod request;

pub use executor::{execute, run_query};
pub use injection::{INJECTION_SUFFIXES, InjectionAttempt, inject, run_query_injection};
pub use request::QueryRequest;
