// src/runner.rs
use std::path::PathBuf;

use crate::{
    builder::{self, ImageFailure},
    config::{Config, ImageMode},
    core::net,
    error::Result,
    file,
    model::Category,
    progress::Progress,
    specs::{roster, Sources},
    store::{ImageCache, ImageOutcome, ImageRequest, ImageSource, RemoteImages},
};

/// Summary of what a build produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out_file: PathBuf,
    pub records: usize,
    pub skipped_party: usize,
    pub malformed: usize,
    pub cache_hits: usize,
    pub downloads: usize,
    pub image_failures: Vec<ImageFailure>,
}

/// Fetch → build → write. Only roster and output failures are errors;
/// the output file is left untouched when the roster can't be read.
pub fn run(cfg: &Config, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let roster = roster::fetch(&net::feed_client(cfg.timeout)?, &cfg.roster_url)?;
    let sources = Sources {
        legislators: roster.legislators,
        governors: cfg.governors.clone(),
        malformed: roster.malformed,
    };

    let report = match cfg.image_mode {
        ImageMode::Remote => builder::build(cfg, &sources, &mut RemoteImages, progress),
        ImageMode::Cached => {
            let client = net::client(cfg.timeout)?;
            let mut cache = ImageCache::open(cfg, &client)?;
            builder::build(cfg, &sources, &mut cache, progress)
        }
    };

    file::write_records(&cfg.out_file, &report.records)?;
    logf!(
        "Wrote {} with {} entries ({} cached, {} downloaded, {} failed, {} skipped)",
        cfg.out_file.display(),
        report.records.len(),
        report.cache_hits,
        report.downloads,
        report.image_failures.len(),
        report.skipped_party
    );

    Ok(RunSummary {
        out_file: cfg.out_file.clone(),
        records: report.records.len(),
        skipped_party: report.skipped_party,
        malformed: report.malformed,
        cache_hits: report.cache_hits,
        downloads: report.downloads,
        image_failures: report.image_failures,
    })
}

/* ---------------- Mirror an existing dataset ---------------- */

#[derive(Debug, Default)]
pub struct MirrorSummary {
    pub total: usize,
    /// Entries whose `img` is already a local path. Not reported to progress.
    pub local: usize,
    pub cache_hits: usize,
    pub downloads: usize,
    pub image_failures: Vec<ImageFailure>,
}

/// Download the portraits referenced by an existing `cfg.out_file` into
/// `cfg.image_dir`, using the same filenames a cached build would. The JSON
/// itself is never rewritten.
pub fn mirror(cfg: &Config, mut progress: Option<&mut dyn Progress>) -> Result<MirrorSummary> {
    let records = file::read_records(&cfg.out_file)?;
    let client = net::client(cfg.timeout)?;
    let mut cache = ImageCache::open(cfg, &client)?;

    let remote = records.iter().filter(|r| is_remote(&r.img)).count();
    let mut summary = MirrorSummary {
        total: records.len(),
        local: records.len() - remote,
        ..Default::default()
    };
    if let Some(p) = progress.as_deref_mut() {
        p.begin(remote);
    }

    for rec in records.iter().filter(|r| is_remote(&r.img)) {
        let bioguide = match rec.category {
            Category::Gov => None,
            Category::Senate | Category::House => cfg.bioguide_from_url(&rec.img),
        };
        let req = ImageRequest {
            name: &rec.name,
            stem: builder::image_stem(cfg, &rec.name, bioguide),
            url: &rec.img,
        };

        match cache.acquire(&req) {
            Ok(outcome) => {
                match outcome {
                    ImageOutcome::CacheHit { .. } => summary.cache_hits += 1,
                    ImageOutcome::Downloaded { .. } => summary.downloads += 1,
                    ImageOutcome::Remote { .. } => {}
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&rec.name);
                }
            }
            Err(error) => {
                loge!("Failed to download {}: {error}", rec.name);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&rec.name, &error.to_string());
                }
                summary.image_failures.push(ImageFailure { name: rec.name.clone(), error });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Mirror done: {} downloaded, {} already present, {} failed, {} local",
        summary.downloads,
        summary.cache_hits,
        summary.image_failures.len(),
        summary.local
    );
    Ok(summary)
}

fn is_remote(img: &str) -> bool {
    img.starts_with("http://") || img.starts_with("https://")
}
