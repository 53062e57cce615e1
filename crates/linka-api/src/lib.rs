// linka-api: Async clients for the AireLibre sensor feed and the Twitter status API

pub mod auth;
pub mod error;
pub mod feed;
pub mod oauth;
pub mod transport;
pub mod twitter;

pub use auth::Credentials;
pub use error::{Error, ErrorKind};
pub use feed::{AirQuality, FeedClient, SensorRecord};
pub use oauth::OAuthSigner;
pub use transport::TransportConfig;
pub use twitter::{Account, Session, Status, TwitterClient};
