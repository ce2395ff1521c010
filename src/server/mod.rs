//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the inventory service:
//! servers, the datacenters hosting them, and the switches they are wired to. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, integrity checks and transaction orchestration
//! - **Validation Layer** (`validation/`) - Pure payload normalization and configuration bounds
//! - **Data Layer** (`data/`) - Database operations and partial-update construction
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - Console and file sinks for `tracing`
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database pool creation and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A write request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts the raw JSON body and calls the service
//! 3. **Service** validates the payload before touching the database
//! 4. **Service** opens a transaction, locates the row and checks referenced rows
//! 5. **Data** builds and executes a parameterized statement, then re-reads the row
//! 6. **Service** commits, or rolls back on any error
//! 7. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
