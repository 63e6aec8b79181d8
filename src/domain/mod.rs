//! Domain Layer
//!
//! The planning core - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Orders and stops
//! - `value_objects/` - Immutable value types (Location, StopId, EquipmentType)
//! - `policies/` - Compatibility rules for consolidation
//! - `services/` - Stop derivation, sequencing, invariant checks
//! - `ports/` - Interface definitions for infrastructure
//! - `rejection` - Typed business-rule rejections
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Order lookup and event reporting go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod rejection;
pub mod services;
pub mod value_objects;
