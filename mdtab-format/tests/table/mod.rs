//! Table formatter tests
//!
//! End-to-end behavior of `TableFormatter` over line slices.

mod cursor;
mod format;
