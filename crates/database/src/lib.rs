//! # Deportes Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database holding sports, teams, players and statistics.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The rest of the application talks to
//!   the `SportsRepository` trait and the domain types of `core-types`.
//! - **Pooled:** One `PgPool` is created at startup and shared by every
//!   request for the lifetime of the process.
//! - **One kind per player:** Players are stored in a single table with a
//!   `tipo_jugador` column guarded by a check constraint, and mapped to the
//!   `PlayerKind` sum type on the way out.
//!
//! ## Public API
//!
//! - `connect`: establishes the database connection pool.
//! - `run_migrations`: applies the embedded migrations.
//! - `SportsRepository`: the data access trait.
//! - `DbRepository`: its PostgreSQL implementation.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod rows;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_options, run_migrations};
pub use error::DbError;
pub use repository::{DbRepository, SportsRepository};
