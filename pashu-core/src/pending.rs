// Pending-operation bookkeeping

use std::fmt;

/// The two operations that suspend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingKind {
    Login,
    Recognition,
}

impl fmt::Display for PendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PendingKind::Login => "login",
            PendingKind::Recognition => "recognition",
        })
    }
}

/// Proof that an operation was started, stamped with the navigation epoch.
///
/// A ticket is only honoured while it is still the flow's pending ticket;
/// any screen entry, `try_again`, new image, logout or cancel retires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTicket {
    pub(crate) id: u64,
    pub(crate) kind: PendingKind,
    pub(crate) epoch: u64,
}

impl PendingTicket {
    pub fn kind(&self) -> PendingKind {
        self.kind
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// What happened to a finished operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome was successful and applied.
    Applied,
    /// The outcome was a failure; it was reported and nothing else changed.
    Rejected,
    /// The ticket was stale; the outcome was dropped unseen.
    Discarded,
}
