//! Pipeline layer between `linka-api` and the `linka` binary.
//!
//! - **[`classify`]** maps an AQI reading to one of six [`AqiCategory`]
//!   buckets.
//! - **[`format_report`]** renders a fetched sensor list into the status
//!   text ([`Report`]).
//! - **[`Bot`]** runs one fetch → format → authenticate → post pass from a
//!   pre-built [`BotConfig`]. Fetch and authentication failures abort the
//!   run; a post failure is handed back in the [`RunOutcome`].

pub mod aqi;
pub mod bot;
pub mod config;
pub mod error;
pub mod report;

pub use aqi::{AqiCategory, classify};
pub use bot::{Bot, RunOutcome};
pub use config::BotConfig;
pub use error::CoreError;
pub use report::{Report, STATUS_CHAR_LIMIT, format_report};
