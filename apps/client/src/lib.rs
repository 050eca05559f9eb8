//! Client side of resume persistence: a stable per-profile user id, a local
//! cache of the working resume, and remote load/save against the resume API.

pub mod api;
pub mod config;
pub mod local_store;
pub mod sync;
pub mod user_id;
