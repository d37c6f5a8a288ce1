//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `POST /cache` - Store a key-value pair (201)
//! - `GET /cache/:key` - Retrieve a value by key (200 / 404)
//! - `DELETE /cache/:key` - Delete a key (204 / 404)
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
