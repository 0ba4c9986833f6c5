use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredStatus {
    Pending,
    Fired,
    Cancelled,
}

/// One-shot deadline polled by the host loop.
///
/// Fallback for hosts that cannot guarantee an animation-complete callback:
/// the deadline is `scheduled_at + delay` and fires at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredReadiness {
    due_at: Instant,
    status: DeferredStatus,
}

impl DeferredReadiness {
    #[must_use]
    pub fn schedule(scheduled_at: Instant, delay: Duration) -> Self {
        Self {
            due_at: scheduled_at + delay,
            status: DeferredStatus::Pending,
        }
    }

    #[must_use]
    pub fn due_at(&self) -> Instant {
        self.due_at
    }

    #[must_use]
    pub fn status(&self) -> DeferredStatus {
        self.status
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == DeferredStatus::Pending
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.status != DeferredStatus::Pending || now < self.due_at {
            return false;
        }
        self.status = DeferredStatus::Fired;
        true
    }

    /// Returns `true` if a pending deadline was cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.status != DeferredStatus::Pending {
            return false;
        }
        self.status = DeferredStatus::Cancelled;
        true
    }
}
