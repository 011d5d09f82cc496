//! Host status codes and their translation into structured failures.
//!
//! Every host import returns a bare `u32` status: `0` is success, and the
//! seven nonzero codes below are the only ones the host interface defines.
//! Translation is total: a raw value outside the table becomes
//! [`StatusCode::Unknown`] rather than a crash or a silent success.
//!
//! [`check`] must run on every import's return value before any result is
//! trusted or exposed to the caller.

use core::fmt;

/// Raw status integer as returned by every host import.
pub type RawStatus = u32;

/// Status code returned by a host import.
///
/// The numeric values are fixed by the host ABI and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Success,
    Overflow,
    InvalidArgument,
    Fault,
    IllegalSequence,
    Io,
    Forbidden,
    InsufficientBalance,
    /// Any raw value outside the defined table.
    Unknown(RawStatus),
}

impl StatusCode {
    /// Translate a raw host status. Total: out-of-table values map to
    /// [`StatusCode::Unknown`].
    pub fn from_raw(raw: RawStatus) -> Self {
        match raw {
            0 => Self::Success,
            1 => Self::Overflow,
            2 => Self::InvalidArgument,
            3 => Self::Fault,
            4 => Self::IllegalSequence,
            5 => Self::Io,
            6 => Self::Forbidden,
            7 => Self::InsufficientBalance,
            other => Self::Unknown(other),
        }
    }

    /// The raw integer value of this status.
    pub fn raw(self) -> RawStatus {
        match self {
            Self::Success => 0,
            Self::Overflow => 1,
            Self::InvalidArgument => 2,
            Self::Fault => 3,
            Self::IllegalSequence => 4,
            Self::Io => 5,
            Self::Forbidden => 6,
            Self::InsufficientBalance => 7,
            Self::Unknown(raw) => raw,
        }
    }

    /// The canonical host-ABI name for this status.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Overflow => "overflow",
            Self::InvalidArgument => "inval",
            Self::Fault => "fault",
            Self::IllegalSequence => "ilseq",
            Self::Io => "io",
            Self::Forbidden => "forbidden",
            Self::InsufficientBalance => "inbalance",
            Self::Unknown(_) => "<unknown>",
        }
    }

    /// Returns true for the success status.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure raised when a host import reports a nonzero status.
///
/// Carries the raw code and its canonical name. Never retried at this layer;
/// retry policy belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}: {}", .status.raw(), .status.name())]
pub struct HostStatus {
    status: StatusCode,
}

impl HostStatus {
    /// The translated status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw integer code the host returned.
    pub fn code(&self) -> RawStatus {
        self.status.raw()
    }

    /// The canonical name for the code.
    pub fn name(&self) -> &'static str {
        self.status.name()
    }
}

/// Check a raw host status: `0` is success, anything else a structured failure.
pub fn check(raw: RawStatus) -> Result<(), HostStatus> {
    match StatusCode::from_raw(raw) {
        StatusCode::Success => Ok(()),
        status => Err(HostStatus { status }),
    }
}
