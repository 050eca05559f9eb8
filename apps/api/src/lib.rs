//! Resume persistence service: one JSON document per user id behind a small
//! HTTP surface (`/api/health`, `/api/pingdb`, `/api/resume/:id`).

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
