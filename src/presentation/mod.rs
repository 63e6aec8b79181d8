//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `views` - Plain-text rendering of plans, previews and catalogs
//!
//! ## Usage
//!
//! ```ignore
//! use loadplan::presentation::factory;
//!
//! let use_case = factory::create_planning_use_case(&config, false)?;
//! let outcome = use_case.run(&request);
//! ```

pub mod factory;
pub mod views;

pub use factory::create_planning_use_case;
pub use views::{CatalogView, PlanView, PreviewView};
