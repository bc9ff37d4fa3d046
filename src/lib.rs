//! A set of distinct integers with union, intersection and difference,
//! plus the console text format used to read and print sets.

pub mod console;
pub mod demo;
pub mod error;
pub mod expr_parser;
pub mod set_algebra;

pub use error::EmptySetError;
pub use set_algebra::{
    dedup::deduplicate,
    ops::{difference, intersection, union},
    set::Set,
};
