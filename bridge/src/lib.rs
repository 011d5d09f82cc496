//! `gangway-bridge` — syscall bridge and dynamic symbol resolver.
//!
//! Two independent pipelines over the [`gangway_abi::HostCalls`] import
//! surface:
//!
//! - [`Bridge`] — storage read/write, balance queries, and the opaque
//!   outbound call, each translating the host's bare status into a value or
//!   a structured failure
//! - [`Resolver`] — `dlopen`/`dlsym`/`dlclose`/`dlerror` semantics over
//!   host-backed symbol lookup, with generation-checked handles
//!
//! Both are generic over the host so they run unchanged against the WASM
//! import table (guest crate) or the in-memory [`mock::MockHost`] (tests).
//! Everything here is single-threaded and synchronous: one call in flight at
//! a time, strictly nested, no buffer retained past the call boundary.

pub mod error;
pub mod mock;
pub mod resolver;
pub mod syscall;

pub use error::{BridgeError, ResolverError};
pub use resolver::{LibHandle, Resolver};
pub use syscall::Bridge;
