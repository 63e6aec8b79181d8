//! Consolidation Session
//!
//! The stateful aggregate behind one shipment being planned. Every mutation
//! goes through the compatibility policy, the stop deriver and the sequencer,
//! is checked against the session invariants, and is then published as a new
//! immutable `Snapshot`.
//!
//! ## Concurrency
//!
//! Writers are serialized by a per-session lock. Readers only clone the
//! currently published `Arc<Snapshot>`, so they never wait for a mutation to
//! finish and never see one half-applied. Separate sessions share nothing.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use thiserror::Error;

use crate::domain::entities::{Order, Stop};
use crate::domain::policies::{CompatibilityPolicy, Verdict};
use crate::domain::ports::{NoopEventSink, PlanningEvent, PlanningEventSink};
use crate::domain::rejection::Rejection;
use crate::domain::services::{InvariantViolation, Invariants, Sequencer, StopDeriver};
use crate::domain::value_objects::OrderId;

use super::snapshot::Snapshot;

/// Failure of a session operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Expected business-rule failure; the session is unchanged
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// Engine bug; the session is unchanged and the change was discarded
    #[error("internal planning error: {0}")]
    Internal(#[from] InvariantViolation),
}

impl SessionError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            SessionError::Rejected(rejection) => Some(rejection),
            SessionError::Internal(_) => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, SessionError::Internal(_))
    }
}

pub type SessionResult = Result<Arc<Snapshot>, SessionError>;

/// A mutation request, for callers that batch or replay edits
#[derive(Debug, Clone, PartialEq)]
pub enum PlanningCommand {
    AddOrder(Order),
    RemoveOrder(OrderId),
    ReorderStops { from: usize, to: usize },
    Clear,
}

/// Speculative verdict for one candidate order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateVerdict {
    pub order_id: OrderId,
    pub verdict: Verdict,
}

pub struct ConsolidationSession {
    id: String,
    writer: Mutex<()>,
    published: RwLock<Arc<Snapshot>>,
    events: Arc<dyn PlanningEventSink>,
}

impl ConsolidationSession {
    /// Create an empty session
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            published: RwLock::new(Arc::new(Snapshot::empty(id.clone()))),
            id,
            writer: Mutex::new(()),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report session activity to `events`
    pub fn with_events(mut self, events: Arc<dyn PlanningEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current state; never blocks on a writer
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.published.read())
    }

    pub fn version(&self) -> u64 {
        self.snapshot().version
    }

    pub fn add_order(&self, order: Order) -> SessionResult {
        self.apply(PlanningCommand::AddOrder(order), None)
    }

    pub fn remove_order(&self, order_id: &OrderId) -> SessionResult {
        self.apply(PlanningCommand::RemoveOrder(order_id.clone()), None)
    }

    pub fn reorder_stops(&self, from: usize, to: usize) -> SessionResult {
        self.apply(PlanningCommand::ReorderStops { from, to }, None)
    }

    /// Remove every order; the version only moves if something was removed
    pub fn clear(&self) -> SessionResult {
        self.apply(PlanningCommand::Clear, None)
    }

    /// Would `order` be admitted right now? Does not touch the session.
    pub fn check(&self, order: &Order) -> Verdict {
        match admission(order, &self.snapshot().orders) {
            Ok(()) => Verdict::Admit,
            Err(rejection) => Verdict::Reject(rejection),
        }
    }

    /// Speculative verdicts for a list of candidate orders
    pub fn preview(&self, candidates: &[Order]) -> Vec<CandidateVerdict> {
        let current = self.snapshot();
        candidates
            .iter()
            .map(|order| CandidateVerdict {
                order_id: order.id.clone(),
                verdict: match admission(order, &current.orders) {
                    Ok(()) => Verdict::Admit,
                    Err(rejection) => Verdict::Reject(rejection),
                },
            })
            .collect()
    }

    /// Apply `command`, optionally only if the session is still at `expected_version`
    pub fn apply(&self, command: PlanningCommand, expected_version: Option<u64>) -> SessionResult {
        let _writer = self.writer.lock();
        let current = self.snapshot();

        if let Some(expected) = expected_version.filter(|&v| v != current.version) {
            return Err(self.rejected(
                &command,
                Rejection::StaleVersion {
                    expected,
                    actual: current.version,
                },
            ));
        }

        let outcome = match &command {
            PlanningCommand::AddOrder(order) => self.admit(&current, order),
            PlanningCommand::RemoveOrder(order_id) => self.withdraw(&current, order_id),
            PlanningCommand::ReorderStops { from, to } => self.resequence(&current, *from, *to),
            PlanningCommand::Clear => self.clear_all(&current),
        };

        match outcome {
            Ok(snapshot) => Ok(snapshot),
            Err(SessionError::Rejected(rejection)) => Err(self.rejected(&command, rejection)),
            Err(internal) => {
                tracing::error!(session = %self.id, error = %internal, "planning change discarded");
                Err(internal)
            }
        }
    }

    fn admit(&self, current: &Snapshot, order: &Order) -> SessionResult {
        admission(order, &current.orders)?;

        let mut orders = current.orders.clone();
        orders.push(order.clone());
        let stops = Sequencer::reconcile(&current.stops, StopDeriver::derive(&orders));
        let snapshot = self.publish(current, orders, stops)?;

        tracing::debug!(session = %self.id, order = %order.id, version = snapshot.version, "order admitted");
        self.events.on_event(PlanningEvent::OrderAdmitted {
            session: self.id.clone(),
            order_id: order.id.clone(),
            version: snapshot.version,
            stop_count: snapshot.stops.len(),
        });
        Ok(snapshot)
    }

    fn withdraw(&self, current: &Snapshot, order_id: &OrderId) -> SessionResult {
        if !current.contains_order(order_id) {
            return Err(Rejection::OrderNotFound {
                order_id: order_id.clone(),
            }
            .into());
        }

        let orders: Vec<Order> = current
            .orders
            .iter()
            .filter(|o| &o.id != order_id)
            .cloned()
            .collect();
        let stops = Sequencer::reconcile(&current.stops, StopDeriver::derive(&orders));
        let snapshot = self.publish(current, orders, stops)?;

        tracing::debug!(session = %self.id, order = %order_id, version = snapshot.version, "order removed");
        self.events.on_event(PlanningEvent::OrderRemoved {
            session: self.id.clone(),
            order_id: order_id.clone(),
            version: snapshot.version,
            stop_count: snapshot.stops.len(),
        });
        Ok(snapshot)
    }

    fn resequence(&self, current: &Arc<Snapshot>, from: usize, to: usize) -> SessionResult {
        let stops = Sequencer::reorder(&current.stops, from, to)?;
        if from == to {
            return Ok(Arc::clone(current));
        }
        let snapshot = self.publish(current, current.orders.clone(), stops)?;

        self.events.on_event(PlanningEvent::StopsReordered {
            session: self.id.clone(),
            from,
            to,
            version: snapshot.version,
        });
        Ok(snapshot)
    }

    fn clear_all(&self, current: &Arc<Snapshot>) -> SessionResult {
        if current.is_empty() {
            return Ok(Arc::clone(current));
        }
        let snapshot = self.publish(current, Vec::new(), Vec::new())?;

        self.events.on_event(PlanningEvent::SessionCleared {
            session: self.id.clone(),
            removed: current.orders.len(),
            version: snapshot.version,
        });
        Ok(snapshot)
    }

    /// Verify and swap in the next state. Caller holds the writer lock.
    fn publish(&self, current: &Snapshot, orders: Vec<Order>, stops: Vec<Stop>) -> SessionResult {
        Invariants::check(&orders, &stops)?;

        let next = Arc::new(Snapshot {
            session_id: self.id.clone(),
            version: current.version + 1,
            orders,
            stops,
        });
        *self.published.write() = Arc::clone(&next);
        Ok(next)
    }

    fn rejected(&self, command: &PlanningCommand, rejection: Rejection) -> SessionError {
        tracing::debug!(session = %self.id, reason = rejection.code(), "planning change rejected");

        if self.events.wants_rejections() {
            let session = self.id.clone();
            let event = match command {
                PlanningCommand::AddOrder(order) => Some(PlanningEvent::OrderRejected {
                    session,
                    order_id: order.id.clone(),
                    rejection: rejection.clone(),
                }),
                PlanningCommand::RemoveOrder(order_id) => Some(PlanningEvent::RemovalRejected {
                    session,
                    order_id: order_id.clone(),
                    rejection: rejection.clone(),
                }),
                PlanningCommand::ReorderStops { from, to } => {
                    Some(PlanningEvent::ReorderRejected {
                        session,
                        from: *from,
                        to: *to,
                        rejection: rejection.clone(),
                    })
                }
                PlanningCommand::Clear => None,
            };
            if let Some(event) = event {
                self.events.on_event(event);
            }
        }

        SessionError::Rejected(rejection)
    }
}

/// Validation plus compatibility rules for a candidate
fn admission(order: &Order, current: &[Order]) -> Result<(), Rejection> {
    order.validate().map_err(|e| Rejection::InvalidOrder {
        order_id: order.id.clone(),
        reason: e.to_string(),
    })?;
    CompatibilityPolicy::evaluate(order, current).into_result()
}
