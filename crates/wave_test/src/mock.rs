//! HTTP mocking for SDK tests.
//!
//! Re-exported so test code pulls its mock server and method constants from
//! one place, independent of the underlying crate.

pub use httpmock::{
    Method::{DELETE, GET, PATCH, POST, PUT},
    Mock, MockServer,
};
