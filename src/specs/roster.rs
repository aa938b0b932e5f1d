// src/specs/roster.rs

use reqwest::blocking::Client;
use serde_json::Value;

use crate::core::net;
use crate::error::{Error, Result};
use crate::model::Legislator;

pub struct Roster {
    pub legislators: Vec<Legislator>,
    pub malformed: usize,
}

/// One GET against the roster feed. Any transport, status or shape problem
/// is fatal for the run.
pub fn fetch(client: &Client, url: &str) -> Result<Roster> {
    logf!("Fetching roster from {url}");
    let body = net::get_text(client, url)?;
    let roster = parse(&body, url)?;
    logf!(
        "Roster: {} legislators ({} malformed entries skipped)",
        roster.legislators.len(),
        roster.malformed
    );
    Ok(roster)
}

/// Parse a roster body. `origin` only labels errors and log lines.
///
/// The document must be a JSON array; each element is decoded on its own so
/// one odd entry doesn't sink the rest.
pub fn parse(body: &str, origin: &str) -> Result<Roster> {
    let doc: Value = serde_json::from_str(body)
        .map_err(|source| Error::Json { origin: s!(origin), source })?;

    let Value::Array(items) = doc else {
        return Err(Error::NotAnArray { origin: s!(origin) });
    };

    let mut legislators = Vec::with_capacity(items.len());
    let mut malformed = 0usize;

    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Legislator>(item) {
            Ok(leg) => legislators.push(leg),
            Err(e) => {
                logw!("Roster entry {i} skipped: {e}");
                malformed += 1;
            }
        }
    }

    Ok(Roster { legislators, malformed })
}
