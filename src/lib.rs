//! BookMeHere web frontend
//!
//! Customer and admin UI for the BookMeHere service-booking platform.
//!
//! This library provides:
//! - A typed client for the BookMeHere REST API
//! - The booking wizard state machine
//! - Browser-side sessions and route guarding
//! - The Dioxus fullstack UI (SSR + client hydration)

pub mod api;
pub mod app;
pub mod booking;
pub mod config;
pub mod display;
pub mod models;
pub mod session;
