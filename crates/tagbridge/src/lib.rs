//! tagbridge is a small REST façade over a live process-data tag source.
//!
//! Tags are named variables with a current value, addressable by id. The
//! API layer here decides what is allowed (per-operation permission gates),
//! how failures surface, and what shape responses take. The tag store
//! itself lives behind the [`tag_source::TagSource`] capability trait;
//! adapters for concrete data-acquisition protocols plug in there.
//!
//! # Routes
//!
//! | Method | Path        | Gate         |
//! |--------|-------------|--------------|
//! | GET    | /tags       | —            |
//! | POST   | /tag        | allow_add    |
//! | GET    | /tag/{id}   | —            |
//! | PUT    | /tag/{id}   | allow_write  |
//! | DELETE | /tag/{id}   | allow_remove |

#![forbid(unsafe_code)]

pub mod app;
pub mod prelude;
pub mod routes;
pub mod tag;
pub mod webserver;

pub use crate::app::{App, AppBuilder, AppBuilderOpts, AppState};
pub use tagbridge_types::error;
pub use tagbridge_types::tag_source;
pub use tagbridge_types::types;

// vim: ts=4
