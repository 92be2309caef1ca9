//! Paraíso Matero Admin library.
//!
//! The admin panel as a library: product CRUD against the hosted
//! backend, gated behind a login against the hosted auth service.
//! Exposed as a library so the CLI can reuse the backend client.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
