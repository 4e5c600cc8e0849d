//! Output generation modules.
//!
//! - [`html`]: renders the aggregated article list into the single
//!   self-contained page that is the tool's main product
//! - [`json`]: optional JSON sidecar exposing the same run's articles for
//!   API-style consumption

pub mod html;
pub mod json;
