//! Core library for the shopfront command line application.
//!
//! Products live in a single [`model::ProductStore`]; the roles in [`roles`]
//! refer to them by handle. Flat-file adapters live under [`io`], the console
//! listing in [`listing`], and the interactive workflow in [`session`].

pub mod catalog;
pub mod error;
pub mod io;
pub mod listing;
pub mod logging;
pub mod model;
pub mod roles;
pub mod session;

pub use catalog::Catalog;
pub use error::{Result, ToolError};
