// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic sink for caller-misuse reports.
//!
//! ## Overview
//!
//! The controller never fails at runtime; the one misuse it can detect —
//! an open-style call with no usable anchor — is advisory. Reports go to an
//! injected [`DiagSink`] owned by the controller instance, so there is no
//! process-wide mutable flag. [`NoDiag`] drops reports; [`WarnOnce`] forwards
//! the first report to a host callback and suppresses the rest, which keeps
//! a misbehaving caller from flooding the host's logs.

/// Receiver for misuse diagnostics emitted by the state controller.
///
/// Supplied at construction via
/// [`PopupState::with_diag`](crate::state::PopupState::with_diag). Sinks may
/// keep their own suppression state; the controller reports every occurrence.
pub trait DiagSink {
    /// An open-style call could not resolve a usable anchor.
    fn missing_anchor(&mut self);
}

/// A sink that ignores all diagnostics. The default.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDiag;

impl DiagSink for NoDiag {
    #[inline]
    fn missing_anchor(&mut self) {}
}

/// A sink that notifies on the first report only, then stays silent.
///
/// The one-shot flag lives in the sink instance, so independent controllers
/// warn independently and tests can reset by constructing a fresh sink.
pub struct WarnOnce<F: FnMut()> {
    fired: bool,
    notify: F,
}

impl<F: FnMut()> WarnOnce<F> {
    /// Create a sink that calls `notify` on the first report.
    pub fn new(notify: F) -> Self {
        Self {
            fired: false,
            notify,
        }
    }

    /// Whether a report has been received.
    pub fn fired(&self) -> bool {
        self.fired
    }
}

impl<F: FnMut()> DiagSink for WarnOnce<F> {
    fn missing_anchor(&mut self) {
        if self.fired {
            return;
        }
        self.fired = true;
        (self.notify)();
    }
}

impl<F: FnMut()> core::fmt::Debug for WarnOnce<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WarnOnce")
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}
