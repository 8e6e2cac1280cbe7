//! Parser tests.

mod errors;
