//! Domain logic of the LIMS master-data console.
//!
//! Entity catalog, field schemas, validation, payload shaping, form state
//! and list search/pagination. No I/O: the backend client and the HTTP
//! service build on these types.

pub mod entity;
pub mod error;
pub mod form;
pub mod listing;
pub mod payload;
pub mod record;
pub mod roles;
pub mod schema;
pub mod search;
pub mod types;
pub mod validation;
