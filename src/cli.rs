// src/cli.rs
use std::env;
use std::ffi::OsString;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::progress::LogProgress;
use crate::runner::{self, MirrorSummary, RunSummary};

/// `pol_scrape`: cached build with the default configuration.
pub fn run() -> Result<RunSummary> {
    no_args("pol_scrape", "build public/politicians.json and mirror portraits")?;
    crate::log::init();

    let cfg = Config::default();
    let mut progress = LogProgress::default();
    runner::run(&cfg, Some(&mut progress))
}

/// `pol_mirror`: download portraits for an existing politicians.json.
pub fn mirror() -> Result<MirrorSummary> {
    no_args("pol_mirror", "download portraits referenced by public/politicians.json")?;
    crate::log::init();

    let cfg = Config::default();
    let mut progress = LogProgress::default();
    runner::mirror(&cfg, Some(&mut progress))
}

// Neither binary takes arguments; everything comes from `Config::default()`.
fn no_args(bin: &str, what: &str) -> Result<()> {
    reject_args(bin, what, env::args_os().skip(1))
}

fn reject_args(bin: &str, what: &str, args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let extra: Vec<String> = args.into_iter().map(|a| a.to_string_lossy().into_owned()).collect();
    if extra.is_empty() {
        return Ok(());
    }
    Err(Error::Usage(format!(
        "unexpected argument(s): {}\nUsage: {bin}\n  Takes no arguments; {what}.",
        extra.join(" ")
    )))
}
