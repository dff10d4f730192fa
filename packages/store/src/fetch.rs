//! # Request tracking for page loads
//!
//! Every page load goes through a [`Fetch`]. Starting a load bumps a
//! generation counter and hands out a [`Request`] carrying a [`Ticket`] for that
//! generation; only the response presenting the latest ticket is applied.
//! Anything older was superseded (the user flipped pages, or retried) and is
//! dropped, so responses arriving out of order can never overwrite newer
//! state.
//!
//! ```text
//!            begin(p)              settle(ok)
//!   Idle ─────────────▶ Loading(p) ───────────▶ Loaded(p)
//!                          │  ▲                     │
//!               settle(err)│  │begin(q) / retry     │begin(q)
//!                          ▼  │                     │
//!                      Failed(p, e) ◀───────────────┘
//! ```

use crate::error::ApiError;

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// A load the caller should now perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request<P> {
    pub ticket: Ticket,
    pub params: P,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase<P> {
    Idle,
    Loading(P),
    Loaded(P),
    Failed(P, ApiError),
}

impl<P> Default for Phase<P> {
    fn default() -> Self {
        Phase::Idle
    }
}

impl<P> Phase<P> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading(_))
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Phase::Failed(_, err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetch<P> {
    phase: Phase<P>,
    generation: u64,
}

impl<P> Default for Fetch<P> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
        }
    }
}

impl<P: Clone> Fetch<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase<P> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.phase.error()
    }

    /// Parameters of the latest request, whatever its outcome.
    pub fn params(&self) -> Option<&P> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Loading(p) | Phase::Loaded(p) | Phase::Failed(p, _) => Some(p),
        }
    }

    /// Start a load, superseding any request still in flight.
    pub fn begin(&mut self, params: P) -> Request<P> {
        self.generation += 1;
        self.phase = Phase::Loading(params.clone());
        Request {
            ticket: Ticket {
                generation: self.generation,
            },
            params,
        }
    }

    /// Reissue the latest request. `None` before the first load.
    pub fn retry(&mut self) -> Option<Request<P>> {
        let params = self.params()?.clone();
        Some(self.begin(params))
    }

    /// Apply a response. Returns the payload when `ticket` is current and the
    /// load succeeded; stale responses and failures yield `None`.
    pub fn settle<T>(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Option<T> {
        if ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!(
                "discarding response for generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return None;
        }
        let Phase::Loading(params) = std::mem::take(&mut self.phase) else {
            return None;
        };
        match result {
            Ok(value) => {
                self.phase = Phase::Loaded(params);
                Some(value)
            }
            Err(err) => {
                tracing::warn!("load failed: {err}");
                self.phase = Phase::Failed(params, err);
                None
            }
        }
    }
}
