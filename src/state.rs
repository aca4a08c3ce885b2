// View state machine for the fetch-and-render cycle.
use crate::error::Error;

use std::sync::atomic::{AtomicBool, Ordering};

/// What the page shows. Each request settles into exactly one of these and
/// is rendered by the matching template.
#[derive(Debug, PartialEq)]
pub enum ViewState {
    Idle,
    Busy,
    Done { html: String },
    Failed { error: Error },
}

impl ViewState {
    /// A submit is accepted from any settled state. While a cycle is
    /// already running the new submit is dropped, not queued.
    pub fn submit(self) -> Option<ViewState> {
        match self {
            ViewState::Busy => None,
            _ => Some(ViewState::Busy),
        }
    }

    /// Settles a running cycle. States other than `Busy` are unchanged.
    pub fn finish(self, outcome: Result<String, Error>) -> ViewState {
        match self {
            ViewState::Busy => match outcome {
                Ok(html) => ViewState::Done { html },
                Err(error) => ViewState::Failed { error },
            },
            other => other,
        }
    }

    pub fn reset(self) -> ViewState {
        ViewState::Idle
    }
}

/// One flag shared by all workers; set while a fetch cycle runs.
#[derive(Default)]
pub struct InFlight(AtomicBool);

pub struct InFlightGuard<'a>(&'a AtomicBool);

impl InFlight {
    /// Claims the flag for one cycle. `None` means a cycle is already
    /// running and this submit should be dropped.
    pub fn begin(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| InFlightGuard(&self.0))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
