//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers, DTOs and middleware
//! - Link header construction for paginated lists

pub mod api_rest;
