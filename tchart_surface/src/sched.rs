// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repaint coalescing.

/// A single-slot repaint token.
///
/// Any number of [`request`] calls while a token is pending coalesce into
/// one; the host's frame driver calls [`take`] once per frame and paints
/// when it returns `true`. Tests drive this synchronously, with no timer or
/// platform frame callback involved.
///
/// [`request`]: FrameScheduler::request
/// [`take`]: FrameScheduler::take
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameScheduler {
    pending: bool,
}

impl FrameScheduler {
    /// Creates a scheduler with no pending token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a repaint. Idempotent while a token is pending.
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Consumes the pending token, if any.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Whether a token is pending without consuming it.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn requests_coalesce_into_one_token() {
        let mut sched = FrameScheduler::new();
        assert!(!sched.take());

        sched.request();
        sched.request();
        sched.request();

        assert!(sched.is_pending());
        assert!(sched.take());
        // One paint consumed them all.
        assert!(!sched.take());
    }
}
