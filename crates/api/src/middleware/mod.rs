//! Session and access-control extractors.
//!
//! - [`session::ConsoleSession`] -- Bearer token and role type of the caller.
//! - [`rbac::RequireEntityAccess`] -- Resolves the `{entity}` path segment
//!   and enforces that entity's role gate.

pub mod rbac;
pub mod session;
