// ── Pipeline ──
//
// One strictly sequential pass: fetch → format → authenticate → post.
// Nothing is retried and nothing outlives the run.

use chrono::NaiveDateTime;
use linka_api::{Account, FeedClient, Status, TransportConfig, TwitterClient};
use tracing::{debug, info, warn};

use crate::config::BotConfig;
use crate::error::CoreError;
use crate::report::{Report, STATUS_CHAR_LIMIT, format_report};

/// Result of a run that got as far as posting.
#[derive(Debug)]
pub struct RunOutcome {
    /// The text that was submitted.
    pub report: Report,
    /// The account the status was submitted as.
    pub account: Account,
    /// The platform's answer. A failure here does not fail the run.
    pub post: Result<Status, CoreError>,
}

/// Owns the clients and configuration for one pipeline run.
pub struct Bot {
    config: BotConfig,
    feed: FeedClient,
    twitter: TwitterClient,
}

impl Bot {
    pub fn new(config: BotConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::with_timeout(config.timeout);
        let feed = FeedClient::new(&transport)?;
        let twitter = TwitterClient::new(config.twitter_api_url.clone(), &transport)?;
        Ok(Self {
            config,
            feed,
            twitter,
        })
    }

    /// Run the pipeline once, stamping the report with `now`.
    ///
    /// Feed and authentication failures return `Err` before anything is
    /// posted. A post failure is returned inside [`RunOutcome::post`].
    pub async fn run(&self, now: NaiveDateTime) -> Result<RunOutcome, CoreError> {
        info!(url = %self.config.feed_url, "fetching sensor feed");
        let records = self.feed.fetch(&self.config.feed_url).await?;
        info!(sensors = records.len(), "sensor feed fetched");

        let report = format_report(&records, now);
        debug!(chars = report.char_count(), "report formatted:\n{report}");
        if report.exceeds_limit() {
            warn!(
                chars = report.char_count(),
                limit = STATUS_CHAR_LIMIT,
                "report is longer than the platform limit; posting anyway"
            );
        }

        let session = self.twitter.authenticate(&self.config.credentials).await?;
        let account = session.account().clone();
        info!(screen_name = %account.screen_name, id = %account.id_str, "authenticated");

        let post = session.post(report.as_str()).await.map_err(CoreError::from);

        Ok(RunOutcome {
            report,
            account,
            post,
        })
    }
}
