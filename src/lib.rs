//! # Dashbuilder Transfer Service
//!
//! REST service for a dashboard-authoring application: full application-state
//! export as a zip archive, and permission-filtered access to stored page
//! ("perspective") layout templates.
//!
//! The HTTP layer is deliberately thin. Every operation of consequence lives
//! behind an injected collaborator trait (see [`services`]): export artifact
//! generation, file access, the perspective catalog, permission resolution,
//! and the user directory. Handlers resolve the caller, consult the
//! collaborators, and map outcomes to HTTP responses.
//!
//! ## Module Organization
//!
//! - [`config`] - Layered configuration (TOML file + environment)
//! - [`error`] - Collaborator-level error taxonomy
//! - [`models`] - Layout templates, permission sets, export scopes
//! - [`services`] - Collaborator traits and their filesystem-backed implementations
//! - [`web`] - Router, state, middleware, and request handlers
//! - [`logging`] - Structured tracing bootstrap

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod web;

/// Crate version, surfaced by the health endpoints.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
