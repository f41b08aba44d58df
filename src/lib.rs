//! NBA Shot Chart CLI Library
//!
//! Query and visualize NBA shot-location data: compose a filter set over
//! players, teams, seasons, opponents, dates, game location, quarters and
//! time remaining; fetch matching shots from the backend API; reduce the
//! aggregates into make/miss statistics; and render the shots on a scaled
//! half-court diagram.
//!
//! ## Features
//!
//! - **Composable filter state**: independent multi-select and scalar filter
//!   stores with set semantics and O(1) membership checks
//! - **Shareable links**: filter state round-trips through a URL query string
//!   (CSV id lists, ISO dates, mm:ss clock times), restored exactly once per
//!   session with lenient decoding of stale links
//! - **Query composition**: one immutable request descriptor from the union
//!   of filter state, suppressed until a primary facet is selected
//! - **Statistics**: 2PT/3PT/overall totals and zero-guarded percentages
//! - **Two rendering backends**: resolution-independent SVG paths and an
//!   immediate-mode RGBA raster, driven by the same court geometry
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_shots::filter::{FilterSession, ReferenceData};
//! use nba_shots::query::QueryDescriptor;
//!
//! let mut session = FilterSession::from_query_string("players=1&seasons=2020");
//! # let reference = ReferenceData::default();
//! # let url_players = vec![];
//! session.restore_from_url(&reference, &url_players);
//!
//! if let Some(query) = QueryDescriptor::from_session(&session) {
//!     // fire api::fetch_shots(&client, base_url, &query)
//! }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the backend base URL to avoid passing it in every command:
//! ```bash
//! export NBA_SHOTS_API_URL=http://localhost:8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod court;
pub mod error;
pub mod export;
pub mod filter;
pub mod query;
pub mod stats;

// Re-export commonly used types
pub use api::API_URL_ENV_VAR;
pub use error::{Result, ShotsError};
pub use filter::item::{Player, Quarter, Season, Team, QUARTERS};
pub use filter::scalar::{ClockTime, GameLocation};
pub use filter::{FilterSession, ReferenceData};
pub use query::QueryDescriptor;
pub use stats::{Shot, ShotStatistics};
