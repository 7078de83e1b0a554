//! Shared types, the source capability trait, and error types for tagbridge.
//!
//! This crate contains everything that is shared between the API layer and
//! source adapter implementations. Extracting these into a separate crate
//! lets adapters compile without pulling in the webserver.

pub mod error;
pub mod prelude;
pub mod tag_source;
pub mod types;

// vim: ts=4
