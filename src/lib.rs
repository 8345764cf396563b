//! # Jira Agile SDK
//!
//! A Rust client for the Jira Agile REST API (`/rest/agile/1.0`): boards,
//! sprints, rapid views and team calendars.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, URL building, configuration intake
//! 2. **Auth** — One resolved strategy per client: OAuth1 (RSA-SHA1), Basic, or none
//! 3. **HTTP** — `AgileHttp`, the single dispatcher every call funnels through
//! 4. **Domain** — Resource sub-clients built on the `RequestExecutor` capability
//! 5. **High-Level Client** — `AgileClient` with nested sub-client accessors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jira_agile_sdk::prelude::*;
//!
//! let client = AgileClient::builder()
//!     .host("jira.example.com")
//!     .basic_auth("alice", "secret")
//!     .build()?;
//!
//! let boards = client.boards().get_all_boards().await?;
//! let added = client
//!     .sprints()
//!     .add_to_sprint(42, &serde_json::json!({ "issues": ["AG-1"] }))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network constants and the URL builder.
pub mod network;

/// Raw settings and the validated client configuration.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication strategy resolution and OAuth1 signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Request descriptors, outcome classification and the dispatcher.
pub mod http;

// ── Layer 4: Domain ──────────────────────────────────────────────────────────

/// Resource sub-clients: boards, sprints, rapid views, team calendars.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `AgileClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Configuration
    pub use crate::config::{BasicAuthSettings, ClientConfig, OAuthSettings, Settings};

    // Auth
    pub use crate::auth::{AuthStrategy, BasicCredentials, OAuth1Credentials};

    // Errors
    pub use crate::error::{ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::{build_url, API_VERSION, DEFAULT_PATH_PREFIX, DEFAULT_PROTOCOL};

    // HTTP primitives
    pub use crate::http::{Method, QueryValue, RequestDescriptor, RequestExecutor, ResponseValue};
    #[cfg(feature = "http")]
    pub use crate::http::AgileHttp;

    // Domain types
    pub use crate::domain::board::BoardSprintsQuery;
    pub use crate::domain::sprint::{
        SprintQueryOptions, SprintState, ADDED_TO_SPRINT, REMOVED_FROM_SPRINT,
    };

    // Sub-clients
    pub use crate::domain::board::client::Boards;
    pub use crate::domain::rapid_view::client::RapidViews;
    pub use crate::domain::sprint::client::Sprints;
    pub use crate::domain::team_calendar::client::TeamCalendars;

    // High-level client
    #[cfg(feature = "http")]
    pub use crate::client::{AgileClient, AgileClientBuilder};
}
