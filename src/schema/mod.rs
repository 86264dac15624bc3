//! Field Resolver.
//!
//! Source CSVs name the same concept in many ways (`City`, `listed_in(city)`,
//! `Aggregate rating`, `rate`, ...). A [`FieldRoleMap`] is built once from a file's
//! header and then used for every row of that file, so resolution is never repeated
//! per row.

pub mod resolver;

#[cfg(test)]
mod tests;

pub use resolver::{FieldRole, FieldRoleMap, ResolvedColumn};
