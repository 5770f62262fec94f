//! Cross-module test suites: field tower algebra, group laws, and the
//! pairing properties the crate guarantees.

mod field;
mod groups;
#[cfg(feature = "alloc")]
mod pairings;
