//! vibOS API Library Crate
//!
//! This library contains the session broker behind the voice agent page:
//! configuration, the upstream session provider, the HTTP handler and
//! routing. The `api` binary is a thin wrapper around this library.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod router;
pub mod state;
