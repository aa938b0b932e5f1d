// src/core/net.rs
// Blocking HTTP over reqwest. One attempt per request, no retries.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Image client; `timeout` bounds both connect and the whole request.
pub fn client(timeout: Duration) -> Result<Client> {
    build(Some(timeout), timeout)
}

/// Roster client. Only connecting is bounded: the feed is one large body and
/// a slow but steady transfer must be allowed to finish.
pub fn feed_client(connect_timeout: Duration) -> Result<Client> {
    build(None, connect_timeout)
}

fn build(total: Option<Duration>, connect: Duration) -> Result<Client> {
    Client::builder()
        .timeout(total)
        .connect_timeout(connect)
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::Client)
}

/// GET and require a 2xx status. The body is left unread.
pub fn get_ok(client: &Client, url: &str) -> Result<Response> {
    let resp = client
        .get(url)
        .send()
        .map_err(|source| Error::Http { url: s!(url), source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: s!(url), status: status.as_u16() });
    }
    Ok(resp)
}

/// GET and return the body as text.
pub fn get_text(client: &Client, url: &str) -> Result<String> {
    get_ok(client, url)?
        .text()
        .map_err(|source| Error::Http { url: s!(url), source })
}
