//! Calm AI Help - backend for the senior-friendly AI education site
//!
//! Calm AI Help collects two kinds of user-submitted forms (an onboarding
//! assessment and a contact form), persists each as its own durable JSON
//! record plus an append-only per-kind summary index, and answers chat
//! messages with a scripted keyword responder when no live AI backend is
//! configured (none currently is).
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      HTTP API (axum)                       │
//! │  /api/assessment*  /api/contact*          /api/chat        │
//! └─────────┬──────────────────┬──────────────────┬───────────┘
//!           │                  │                  │
//! ┌─────────▼──────────────────▼─────────┐ ┌──────▼───────────┐
//! │            Record Store              │ │  Chat Responder  │
//! │  one JSON file per record            │ │  ordered keyword │
//! │  + per-kind summary index (.jsonl)   │ │  rule table with │
//! │  (derived, append-only)              │ │  fixed fallback  │
//! └──────────────────────────────────────┘ └──────────────────┘
//! ```
//!
//! The two components are independent: the store never consults the
//! responder and vice versa.
//!
//! ## Modules
//!
//! - [`records`]: durable form submissions and summary indexes
//! - [`chat`]: scripted keyword-to-answer responder
//! - [`api`]: unified HTTP router (health, CORS, static site)
//! - [`config`]: TOML configuration with sensible defaults

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod records;

pub use config::CalmHelpConfig;
pub use error::{Error, Result};
