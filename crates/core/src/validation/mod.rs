//! Form validation engine.
//!
//! Provides rule types and a pure-logic evaluator that checks raw form
//! values against an entity schema before anything is sent to the backend.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate, evaluate_field};
pub use rules::{FieldViolation, Rule, ValidationResult};
