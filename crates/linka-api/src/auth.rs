use secrecy::SecretString;

/// OAuth 1.0a user-context credentials for the Twitter API.
///
/// All four values are treated as secrets; `Debug` output is redacted.
/// Empty values are allowed here and surface later as an
/// authentication failure.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Consumer (API) key.
    pub consumer_key: SecretString,
    /// Consumer (API) secret.
    pub consumer_secret: SecretString,
    /// User access token.
    pub access_token: SecretString,
    /// User access token secret.
    pub access_token_secret: SecretString,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: SecretString::from(consumer_key.into()),
            consumer_secret: SecretString::from(consumer_secret.into()),
            access_token: SecretString::from(access_token.into()),
            access_token_secret: SecretString::from(access_token_secret.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let creds = Credentials::new("ck-visible?", "cs-hidden", "at-hidden", "ats-hidden");
        let dbg = format!("{creds:?}");
        assert!(!dbg.contains("ck-visible?"));
        assert!(!dbg.contains("cs-hidden"));
        assert!(!dbg.contains("ats-hidden"));
    }
}
