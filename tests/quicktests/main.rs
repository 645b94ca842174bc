//! Property tests for `array_bst::Tree` against `std::collections::BTreeSet`.

#[path = "../common/mod.rs"]
mod common;

mod set;
