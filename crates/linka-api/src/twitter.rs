// Twitter v1.1 API client
//
// Credential verification and status updates, both signed with OAuth 1.0a.
// `TwitterClient::authenticate` is the only way to obtain a `Session`, so a
// post can never be attempted with unverified credentials.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::oauth::{OAuthSigner, encode};
use crate::transport::TransportConfig;

/// Public Twitter v1.1 REST base URL.
pub const DEFAULT_API_URL: &str = "https://api.twitter.com/1.1/";

const VERIFY_CREDENTIALS_PATH: &str = "account/verify_credentials.json";
const STATUS_UPDATE_PATH: &str = "statuses/update.json";

// ── Response models ─────────────────────────────────────────────────

/// The verified account behind a set of credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub id_str: String,
    pub screen_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Confirmation of a posted status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Status {
    pub id_str: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `{"errors": [{"code": 187, "message": "Status is a duplicate."}]}`
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    message: String,
}

impl ErrorPayload {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn first(&self) -> Option<&ErrorEntry> {
        self.errors.first()
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// Unauthenticated entry point to the Twitter API.
#[derive(Debug)]
pub struct TwitterClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TwitterClient {
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Verify the credentials and open a signed session.
    ///
    /// `GET account/verify_credentials.json?skip_status=true&include_email=true`
    ///
    /// Any failure, transport or status, is reported as
    /// [`Error::Authentication`] so it stays distinct from post failures.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session, Error> {
        let signer = OAuthSigner::new(credentials);

        let mut url = self.base_url.join(VERIFY_CREDENTIALS_PATH)?;
        url.query_pairs_mut()
            .append_pair("skip_status", "true")
            .append_pair("include_email", "true");

        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .header(AUTHORIZATION, signer.authorization("GET", &url, &[]))
            .send()
            .await
            .map_err(|e| Error::Authentication {
                message: format!("verify_credentials unreachable: {e}"),
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Authentication {
            message: format!("failed to read verify_credentials response: {e}"),
        })?;

        if !status.is_success() {
            let reason = ErrorPayload::parse(&body)
                .first()
                .map_or_else(|| body.clone(), |entry| entry.message.clone());
            return Err(Error::Authentication {
                message: format!("verify_credentials rejected (HTTP {status}): {reason}"),
            });
        }

        let account: Account =
            serde_json::from_str(&body).map_err(|e| Error::Authentication {
                message: format!("unexpected verify_credentials payload: {e}"),
            })?;

        debug!(screen_name = %account.screen_name, "credentials verified");

        Ok(Session {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            signer,
            account,
        })
    }
}

// ── Session ─────────────────────────────────────────────────────────

/// A verified, signing HTTP context for one account.
#[derive(Debug)]
pub struct Session {
    http: reqwest::Client,
    base_url: Url,
    signer: OAuthSigner,
    account: Account,
}

impl Session {
    /// The account the credentials were verified against.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Publish `text` as a new status.
    ///
    /// `POST statuses/update.json` with form body `status=<text>`. Length
    /// is not checked locally; an over-long text comes back as
    /// [`Error::PostRejected`].
    pub async fn post(&self, text: &str) -> Result<Status, Error> {
        let url = self.base_url.join(STATUS_UPDATE_PATH)?;
        let form = [("status", text)];
        let body = form
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        debug!("POST {}", url);

        let resp = self
            .http
            .post(url.clone())
            .header(AUTHORIZATION, self.signer.authorization("POST", &url, &form))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::PostFailed {
                message: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::PostFailed {
            message: format!("failed to read response: {e}"),
        })?;

        if !status.is_success() {
            let payload = ErrorPayload::parse(&body);
            let (message, code) = match payload.first() {
                Some(entry) => (entry.message.clone(), entry.code),
                None => (body, None),
            };
            return Err(Error::PostRejected {
                status: status.as_u16(),
                message,
                code,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::PostFailed {
            message: format!("unexpected statuses/update payload: {e}"),
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
