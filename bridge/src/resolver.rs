//! Dynamic symbol resolution over the host symbol table.
//!
//! There is no real library file: "opening" a library only remembers its
//! name long enough to qualify later symbol lookups, and all linking
//! semantics stay on the host side. The open/resolve/close/last-error shape
//! matches the classic dynamic-loading API so unmodified loading code works
//! on top, while underneath every lookup is one host call.

use core::ffi::c_void;

use gangway_abi::HostCalls;
use log::debug;

use crate::error::ResolverError;

/// Opaque handle to an open symbol table.
///
/// Handles are generation-checked: one that has been closed, or that names
/// a reused arena slot, is detected as stale instead of reaching released
/// state. Only [`Resolver::open`] constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LibHandle {
    index: u32,
    generation: u32,
}

/// One arena slot. `name` is `Some` while a handle is live; the generation
/// advances on every close so stale handles never match.
#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    name: Option<Vec<u8>>,
}

/// Emulates `dlopen`/`dlsym`/`dlclose`/`dlerror` over host-backed lookup.
///
/// The last-error slot is owned by the instance, not process-global. It
/// retains at most the latest failure message; read-and-clear via
/// [`Resolver::last_error`].
pub struct Resolver<H> {
    host: H,
    slots: Vec<Slot>,
    free: Vec<u32>,
    last_error: Option<String>,
}

impl<H: HostCalls> Resolver<H> {
    /// Create a resolver over the given host.
    pub fn new(host: H) -> Self {
        Self {
            host,
            slots: Vec::new(),
            free: Vec::new(),
            last_error: None,
        }
    }

    /// Shared access to the underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the underlying host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Open a library by name.
    ///
    /// Copies the name's bytes into a fresh arena entry; the stored length is
    /// the byte length of the input, with no terminator. On allocation
    /// failure nothing is leaked and [`ResolverError::OutOfMemory`] is
    /// returned with the last-error slot set.
    pub fn open(&mut self, name: &[u8]) -> Result<LibHandle, ResolverError> {
        let mut copied = Vec::new();
        if copied.try_reserve_exact(name.len()).is_err() {
            return Err(self.fail(ResolverError::OutOfMemory, "out of memory"));
        }
        copied.extend_from_slice(name);

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                if self.slots.try_reserve(1).is_err() {
                    // `copied` drops here; no partial entry remains.
                    return Err(self.fail(ResolverError::OutOfMemory, "out of memory"));
                }
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.name = Some(copied);
        debug!("opened library {:?}", String::from_utf8_lossy(name));
        Ok(LibHandle {
            index,
            generation: slot.generation,
        })
    }

    /// Resolve `symbol` against an open library.
    ///
    /// Delegates to the host with the stored library name and its length and
    /// returns the host's answer verbatim — including null, which the caller
    /// must treat as "symbol not found". `None` (the null handle) and stale
    /// handles fail with [`ResolverError::InvalidHandle`] and set the
    /// last-error slot.
    pub fn resolve(
        &mut self,
        handle: Option<LibHandle>,
        symbol: &[u8],
    ) -> Result<*mut c_void, ResolverError> {
        let Some(handle) = handle else {
            return Err(self.fail(ResolverError::InvalidHandle, "library handle is null"));
        };
        match self.slots.get(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => match slot.name.as_ref() {
                Some(name) => Ok(self.host.resolve_symbol(name, symbol)),
                None => Err(self.fail(ResolverError::InvalidHandle, "library handle is stale")),
            },
            _ => Err(self.fail(ResolverError::InvalidHandle, "library handle is stale")),
        }
    }

    /// Close a library handle.
    ///
    /// `None` is a no-op; so is a stale handle (the arena detects the double
    /// close instead of releasing twice). Live handles release the name
    /// bytes and retire the slot's generation. Always succeeds.
    pub fn close(&mut self, handle: Option<LibHandle>) {
        let Some(handle) = handle else { return };
        if let Some(slot) = self.slots.get_mut(handle.index as usize) {
            if slot.generation == handle.generation && slot.name.is_some() {
                slot.name = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(handle.index);
            }
        }
    }

    /// Take the most recent error message, clearing the slot.
    ///
    /// Only the latest failure is retained; earlier messages are overwritten
    /// before anyone reads them.
    pub fn last_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    fn fail(&mut self, err: ResolverError, message: &str) -> ResolverError {
        self.last_error = Some(message.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockHost;

    fn resolver() -> Resolver<MockHost> {
        Resolver::new(MockHost::new())
    }

    #[test]
    fn test_open_close_leaves_no_state() {
        let mut r = resolver();
        let handle = r.open(b"libfoo.so").unwrap();
        r.close(Some(handle));
        assert_eq!(r.last_error(), None);

        // A later open works exactly as before
        let again = r.open(b"libfoo.so").unwrap();
        r.close(Some(again));
    }

    #[test]
    fn test_close_null_is_noop() {
        let mut r = resolver();
        r.close(None);
        assert_eq!(r.last_error(), None);
    }

    #[test]
    fn test_resolve_null_handle_fails() {
        let mut r = resolver();
        let err = r.resolve(None, b"symbol").unwrap_err();
        assert_eq!(err, ResolverError::InvalidHandle);

        let message = r.last_error().unwrap();
        assert!(!message.is_empty());
    }

    #[test]
    fn test_last_error_reads_and_clears() {
        let mut r = resolver();
        r.resolve(None, b"symbol").unwrap_err();
        assert!(r.last_error().is_some());
        assert_eq!(r.last_error(), None);
    }

    #[test]
    fn test_resolve_delegates_name_and_symbol() {
        let mut r = resolver();
        let handle = r.open(b"libm.so").unwrap();
        r.resolve(Some(handle), b"sqrt").unwrap();

        assert_eq!(r.host().lookups(), [(b"libm.so".to_vec(), b"sqrt".to_vec())]);
    }

    #[test]
    fn test_resolve_returns_host_answer_verbatim() {
        let mut r = resolver();
        r.host_mut().define_symbol(b"libm.so", b"sqrt", 0x1000);
        let handle = r.open(b"libm.so").unwrap();

        let found = r.resolve(Some(handle), b"sqrt").unwrap();
        assert_eq!(found as usize, 0x1000);

        // Unknown symbols come back null with no resolver-level failure
        let missing = r.resolve(Some(handle), b"cbrt").unwrap();
        assert!(missing.is_null());
        assert_eq!(r.last_error(), None);
    }

    #[test]
    fn test_resolve_after_close_is_stale() {
        let mut r = resolver();
        let handle = r.open(b"libfoo.so").unwrap();
        r.close(Some(handle));

        let err = r.resolve(Some(handle), b"symbol").unwrap_err();
        assert_eq!(err, ResolverError::InvalidHandle);
        assert!(r.last_error().is_some());
    }

    #[test]
    fn test_double_close_is_detected_noop() {
        let mut r = resolver();
        let handle = r.open(b"libfoo.so").unwrap();
        r.close(Some(handle));
        r.close(Some(handle));
        assert_eq!(r.last_error(), None);
    }

    #[test]
    fn test_slot_reuse_gets_fresh_generation() {
        let mut r = resolver();
        let first = r.open(b"liba.so").unwrap();
        r.close(Some(first));

        let second = r.open(b"libb.so").unwrap();
        assert_ne!(first, second);

        // The stale handle must not see the new occupant
        let err = r.resolve(Some(first), b"symbol").unwrap_err();
        assert_eq!(err, ResolverError::InvalidHandle);

        // The live handle resolves against the new name
        r.last_error();
        r.resolve(Some(second), b"symbol").unwrap();
        assert_eq!(r.host().lookups(), [(b"libb.so".to_vec(), b"symbol".to_vec())]);
    }

    #[test]
    fn test_open_empty_name() {
        let mut r = resolver();
        let handle = r.open(b"").unwrap();
        r.resolve(Some(handle), b"symbol").unwrap();
        assert_eq!(r.host().lookups(), [(Vec::new(), b"symbol".to_vec())]);
    }
}
