//! CLI command implementations.
//!
//! - `login` - Store an access token in the credential file
//! - `post` - Publish a post
//! - `fetch` - Fetch a raw API resource
//! - `status` - Show configuration and credential state

pub mod fetch;
pub mod login;
pub mod post;
pub mod status;

use std::sync::Arc;

use crate::api::{ApiClient, ClientConfig, RequestObserver};
use crate::config::Config;
use crate::credentials::Credential;

/// Observer that logs each outbound method and URL at debug level.
fn request_logger() -> RequestObserver {
    Arc::new(|method, url| log::debug!("{} {}", method, url))
}

/// Build an authenticated API client from the environment and the
/// credential file.
///
/// A missing credential file is not an error here: the client is built with
/// an empty token and the service rejects the request, which the command
/// then renders as an authentication error.
pub(crate) fn build_client(config: &Config) -> ApiClient {
    let access_token = match Credential::load(&config.credential_file) {
        Ok(credential) => credential.access_token,
        Err(e) => {
            log::debug!("no stored credential, sending empty token: {:#}", e);
            String::new()
        }
    };

    let client_config = ClientConfig {
        origin: config.origin.clone(),
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
        access_token,
    };

    ApiClient::new(client_config).with_observer(request_logger())
}
