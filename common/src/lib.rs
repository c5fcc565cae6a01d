//! Shared types and client-side logic for the Scloro scholarship portal.
//!
//! Everything here is free of browser bindings so it can be unit tested
//! natively. The `frontend` crate drives these types from Yew components and
//! performs the actual HTTP calls.
//!
//! - `model`: wire shapes returned by the scholarship service.
//! - `requests`: payloads sent to it and the envelopes it answers with.
//! - `api`: endpoint paths and response classification.
//! - `workflow`, `table`, `cache`, `feed`: view-models behind the dashboards.
//! - `routing`, `session`: role claims, destinations and navigation.

pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
pub mod feed;
pub mod generation;
pub mod model;
pub mod requests;
pub mod routing;
pub mod session;
pub mod table;
pub mod workflow;
