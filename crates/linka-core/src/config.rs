// ── Runtime configuration ──
//
// Describes where to read the feed, where to post, and with which
// credentials. Never touches the environment: `linka-config` builds a
// `BotConfig` and hands it in.

use std::time::Duration;

use linka_api::Credentials;
use url::Url;

/// Configuration for a single pipeline run.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Sensor feed endpoint.
    pub feed_url: Url,
    /// Twitter REST base URL (e.g. `https://api.twitter.com/1.1/`).
    pub twitter_api_url: Url,
    /// OAuth 1.0a user-context credentials.
    pub credentials: Credentials,
    /// Per-request timeout for every HTTP call.
    pub timeout: Duration,
}
