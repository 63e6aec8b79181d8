//! Planning Use Case
//!
//! Drives a consolidation session from a list of order ids: resolves each id
//! through the order catalog, admits the orders one at a time, then applies
//! any requested stop moves. Every step is recorded so callers can report
//! partial success.

use std::sync::Arc;

use crate::domain::ports::{CatalogError, NoopEventSink, OrderCatalog, PlanningEventSink};
use crate::domain::rejection::Rejection;
use crate::domain::services::InvariantViolation;
use crate::domain::value_objects::OrderId;

use super::session::{CandidateVerdict, ConsolidationSession, SessionError};
use super::snapshot::Snapshot;

/// A planning run: orders to admit in sequence, then stop moves
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    pub shipment_id: String,
    pub order_ids: Vec<OrderId>,
    /// `(from, to)` stop moves, applied after every order is processed
    pub moves: Vec<(usize, usize)>,
}

impl PlanRequest {
    pub fn new(shipment_id: impl Into<String>) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            ..Default::default()
        }
    }

    pub fn with_orders<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OrderId>,
    {
        self.order_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_move(mut self, from: usize, to: usize) -> Self {
        self.moves.push((from, to));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    Add(OrderId),
    Move { from: usize, to: usize },
}

impl std::fmt::Display for PlanStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStep::Add(id) => write!(f, "add {}", id),
            PlanStep::Move { from, to } => write!(f, "move {} -> {}", from, to),
        }
    }
}

/// Why a step did not change the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFailure {
    /// The order could not be resolved
    Catalog(String),
    Rejected(Rejection),
    Internal(InvariantViolation),
}

impl std::fmt::Display for StepFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepFailure::Catalog(message) => write!(f, "{}", message),
            StepFailure::Rejected(rejection) => write!(f, "{}", rejection),
            StepFailure::Internal(violation) => write!(f, "internal error: {}", violation),
        }
    }
}

impl From<SessionError> for StepFailure {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Rejected(rejection) => StepFailure::Rejected(rejection),
            SessionError::Internal(violation) => StepFailure::Internal(violation),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: PlanStep,
    /// Session version after the step
    pub result: Result<u64, StepFailure>,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of a planning run
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub snapshot: Arc<Snapshot>,
    pub steps: Vec<StepOutcome>,
}

impl PlanOutcome {
    /// Steps that left the session unchanged
    pub fn rejected_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_ok()).count()
    }

    pub fn has_internal_error(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s.result, Err(StepFailure::Internal(_))))
    }
}

/// Result of a what-if check against a base shipment
#[derive(Debug, Clone)]
pub struct PreviewOutcome {
    pub base: Arc<Snapshot>,
    pub candidates: Vec<CandidateVerdict>,
}

/// Planning use case - resolves orders and feeds them to a session
pub struct PlanningUseCase<C>
where
    C: OrderCatalog,
{
    catalog: C,
    events: Arc<dyn PlanningEventSink>,
}

impl<C> PlanningUseCase<C>
where
    C: OrderCatalog,
{
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Sessions started by this use case report to `events`
    pub fn with_events(mut self, events: Arc<dyn PlanningEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn start_session(&self, id: impl Into<String>) -> ConsolidationSession {
        ConsolidationSession::new(id).with_events(Arc::clone(&self.events))
    }

    /// Execute a planning run; rejected steps are recorded, not fatal
    pub fn run(&self, request: &PlanRequest) -> PlanOutcome {
        let session = self.start_session(request.shipment_id.clone());
        let mut steps = Vec::with_capacity(request.order_ids.len() + request.moves.len());

        for id in &request.order_ids {
            let result = match self.catalog.fetch_order(id) {
                Ok(order) => session
                    .add_order(order)
                    .map(|snap| snap.version)
                    .map_err(StepFailure::from),
                Err(e) => Err(StepFailure::Catalog(e.to_string())),
            };
            if let Err(failure) = &result {
                tracing::info!(order = %id, "order not added: {}", failure);
            }
            steps.push(StepOutcome {
                step: PlanStep::Add(id.clone()),
                result,
            });
        }

        for &(from, to) in &request.moves {
            let result = session
                .reorder_stops(from, to)
                .map(|snap| snap.version)
                .map_err(StepFailure::from);
            if let Err(failure) = &result {
                tracing::info!(from, to, "stop move refused: {}", failure);
            }
            steps.push(StepOutcome {
                step: PlanStep::Move { from, to },
                result,
            });
        }

        PlanOutcome {
            snapshot: session.snapshot(),
            steps,
        }
    }

    /// Check candidate orders against a shipment built from `base_ids`.
    ///
    /// Base orders that are refused are skipped with a log line; the
    /// preview is taken against whatever was admitted.
    pub fn preview(
        &self,
        base_ids: &[OrderId],
        candidate_ids: &[OrderId],
    ) -> Result<PreviewOutcome, CatalogError> {
        let base_orders = self.catalog.fetch_all(base_ids)?;
        let candidates = self.catalog.fetch_all(candidate_ids)?;

        let session = ConsolidationSession::new("preview");
        for order in base_orders {
            let id = order.id.clone();
            if let Err(e) = session.add_order(order) {
                tracing::warn!(order = %id, "base order skipped: {}", e);
            }
        }

        Ok(PreviewOutcome {
            candidates: session.preview(&candidates),
            base: session.snapshot(),
        })
    }
}
