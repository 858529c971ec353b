//! Canned fixtures for the external APIs the backend talks to.
//!
//! Each fixture module declares the path it answers for, a pure lookup
//! from query to response, and the axum route wrapping the two.
//! [`crate::rest::router`] mounts them all.

pub mod binance_explorer;
