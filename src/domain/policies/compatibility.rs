//! Compatibility Policy
//!
//! Decides whether a candidate order may join the orders already consolidated
//! into a shipment. Rules are checked in a fixed order and the first failing
//! rule wins:
//!
//! 1. Equipment match
//! 2. Full-truckload exclusivity
//! 3. Duplicate order
//!
//! The policy is a pure function over its arguments, so it is safe for
//! speculative "can this order go here" previews.

use crate::domain::entities::Order;
use crate::domain::rejection::Rejection;

/// Outcome of a compatibility evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Admit,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_admit(&self) -> bool {
        matches!(self, Verdict::Admit)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Admit => None,
            Verdict::Reject(rejection) => Some(rejection),
        }
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Verdict::Admit => Ok(()),
            Verdict::Reject(rejection) => Err(rejection),
        }
    }
}

pub struct CompatibilityPolicy;

impl CompatibilityPolicy {
    /// Evaluate `candidate` against the orders currently in the shipment
    pub fn evaluate(candidate: &Order, current: &[Order]) -> Verdict {
        if let Some(existing) = current
            .iter()
            .find(|o| o.equipment_type != candidate.equipment_type)
        {
            return Verdict::Reject(Rejection::EquipmentMismatch {
                candidate: candidate.id.clone(),
                required: existing.equipment_type,
                found: candidate.equipment_type,
            });
        }

        let occupied_by_ftl = current.iter().any(Order::is_exclusive);
        if !current.is_empty() && (candidate.is_exclusive() || occupied_by_ftl) {
            return Verdict::Reject(Rejection::FtlExclusivityViolation {
                candidate: candidate.id.clone(),
                mode: candidate.mode,
            });
        }

        if current.iter().any(|o| o.id == candidate.id) {
            return Verdict::Reject(Rejection::DuplicateOrder {
                order_id: candidate.id.clone(),
            });
        }

        Verdict::Admit
    }
}
