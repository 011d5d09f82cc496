//! `gangway-guest` — WASM guest shim for the gangway bridge.
//!
//! Compiles to a `cdylib` for `wasm32-wasip1`. This crate is the thin layer
//! that only makes sense inside an instantiated module:
//!
//! - `imports` — raw host import declarations (`gangway_sdk`, `gangway_dl`)
//! - [`WasmHost`] — zero-sized [`gangway_abi::HostCalls`] over those imports
//! - `exports` — C-ABI `dlopen`/`dlsym`/`dlclose`/`dlerror` for foreign code
//!   linked into the same module
//!
//! The surrounding execution model is single-threaded with strictly nested
//! calls; nothing here suspends or runs in the background.

mod exports;
mod host;
mod imports;

// Re-export the exported functions so the linker sees them.
// They are already #[no_mangle] pub extern "C" in exports.rs.
pub use exports::{dlclose, dlerror, dlopen, dlsym};
pub use host::WasmHost;
