//! Crate-wide utilities (macros must be declared before use)

#[macro_use]
pub mod utils;
