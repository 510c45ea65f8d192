//! Top-level coordination for the SkyGuard dashboard.
//!
//! [`Dashboard`] owns the coordinates and resolved place, runs the weather
//! and health fetch cycles, and keeps the latest assessment from each
//! evaluator. Rendering, notifications and place search are thin adapters
//! around that state.

pub mod coordinator;
pub mod error;
mod error_mapping;
pub mod generation;
pub mod notify;
pub mod render;
pub mod search;
pub mod sources;
pub mod state;

pub use coordinator::{Dashboard, RefreshOutcome};
pub use error::DashboardError;
pub use generation::{FetchGeneration, Ticket};
pub use notify::{notify_hazards, LogNotifier, NotificationPermission, NotificationSink, NotifyOutcome};
pub use render::DashboardView;
pub use search::PlaceSearch;
pub use sources::{DataSources, HttpSources};
pub use state::{DashboardState, LocationStatus, Panel};
