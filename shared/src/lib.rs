//! Shared data models for the Cafe API
//!
//! Row types and request payloads shared between the server and API
//! consumers (integration tests, clients). DB row types gate their
//! `sqlx::FromRow` derive behind the `db` feature so that pure clients
//! never pull in sqlx.

pub mod models;

pub use models::*;
