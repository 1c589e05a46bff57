//! Wire types and pure domain rules shared by the storefront backend and the
//! WASM frontend.

pub mod domain;
pub mod shared;
