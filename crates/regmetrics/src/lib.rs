//! regmetrics - eCFR agency metrics dashboard.
//!
//! A Dioxus front end for the per-agency text metrics served at
//! `/api/metrics`: a filterable table of word count, checksum and
//! readability, plus a word count chart of every agency.
//!
//! # Architecture
//!
//! - **Core** (`regmetrics-core`): snapshot parsing, the once-per-session
//!   store, filtering, table/chart projection and the Unloaded/Loaded state
//!   machine. No DOM.
//! - **Fetcher**: platform HTTP source for the metrics endpoint
//! - **Components**: apply the core's render commands to the page
//!
//! # Platform Support
//!
//! - **Web (WASM)**: fetches from the page's own origin
//! - **Desktop**: fetches from the local development server

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod fetcher;
