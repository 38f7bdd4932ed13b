//! Request plumbing shared by the black-box tests of the Categories service.
//!
//! The service under test is external; this crate only holds the typed client
//! and models the integration tests in `tests/` are written against.

pub mod client;
pub mod config;
pub mod models;

pub use client::CategoriesClient;
