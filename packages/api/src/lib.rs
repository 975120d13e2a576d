//! # API crate: client side of the users backend
//!
//! The backend is an external REST service exposing three endpoints. This
//! crate is everything the front ends need to talk to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`service`] | The [`UserService`] trait and response parsing |
//! | [`http`] | [`HttpUserService`], the `reqwest` implementation (native and wasm32) |
//! | [`memory`] | [`MemoryUserService`], an in-memory implementation that logs every call |
//! | [`backend`] | [`Backend`], the runtime choice between the two |
//! | [`flow`] | Load and save round trips, logged, with display-text errors |
//! | [`error`] | [`ApiError`] |
//!
//! ## Endpoints
//!
//! - `POST /user` with `{name, username, email}`
//! - `GET /user/{id}`
//! - `PUT /user/{id}` with `{name, username, email}`
//!
//! Any non-2xx status is a generic failure. There is no timeout, retry or
//! authentication.

pub mod backend;
pub mod error;
pub mod flow;
pub mod http;
pub mod memory;
pub mod service;

pub use backend::Backend;
pub use error::ApiError;
pub use flow::{load, save, send};
pub use http::HttpUserService;
pub use memory::{Call, MemoryUserService};
pub use service::{parse_saved, StoredUser, UserService};
