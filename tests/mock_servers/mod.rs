//! Mock servers for integration testing
//!
//! These mock servers simulate the BookMeHere backend so the API client,
//! sessions and booking flow can be exercised without a real deployment.

pub mod bookmehere;

pub use bookmehere::MockBookMeHere;
