//! Column value generators.

pub mod uuid;
