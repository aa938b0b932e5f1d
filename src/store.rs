// src/store.rs
//! Portrait handling. `ImageSource` is the seam between the builder and the
//! network: `RemoteImages` just echoes the upstream URL, `ImageCache`
//! mirrors the file locally and hands back a site-relative path.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use reqwest::blocking::Client;

use crate::config::Config;
use crate::file::ensure_directory;

/// What the builder knows about one portrait.
#[derive(Clone, Debug)]
pub struct ImageRequest<'a> {
    pub name: &'a str,
    /// Filename without extension (already slugified).
    pub stem: String,
    pub url: &'a str,
}

/// How a portrait was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Remote { img: String },
    CacheHit { path: PathBuf, img: String },
    Downloaded { path: PathBuf, img: String, bytes: u64 },
}

impl ImageOutcome {
    /// Value for the record's `img` field.
    pub fn img(&self) -> &str {
        match self {
            ImageOutcome::Remote { img }
            | ImageOutcome::CacheHit { img, .. }
            | ImageOutcome::Downloaded { img, .. } => img,
        }
    }
}

/// Why a portrait couldn't be obtained. Never fatal for the run.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait ImageSource {
    fn acquire(&mut self, req: &ImageRequest<'_>) -> Result<ImageOutcome, ImageError>;
}

/// Simple variant: `img` is the upstream URL, nothing touches disk.
pub struct RemoteImages;

impl ImageSource for RemoteImages {
    fn acquire(&mut self, req: &ImageRequest<'_>) -> Result<ImageOutcome, ImageError> {
        Ok(ImageOutcome::Remote { img: s!(req.url) })
    }
}

/// Cached variant. Files in `dir` are the cache; existence alone is a hit.
pub struct ImageCache<'a> {
    cfg: &'a Config,
    client: &'a Client,
}

impl<'a> ImageCache<'a> {
    /// Creates `cfg.image_dir` if missing.
    pub fn open(cfg: &'a Config, client: &'a Client) -> crate::Result<Self> {
        ensure_directory(&cfg.image_dir)?;
        Ok(Self { cfg, client })
    }

    pub fn dir(&self) -> &Path {
        &self.cfg.image_dir
    }

    fn download(&self, url: &str, dest: &Path) -> Result<u64, ImageError> {
        let mut resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| ImageError::Transport { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ImageError::Status { url: s!(url), status: status.as_u16() });
        }

        persist(&mut resp, dest)
    }
}

impl ImageSource for ImageCache<'_> {
    fn acquire(&mut self, req: &ImageRequest<'_>) -> Result<ImageOutcome, ImageError> {
        let file_name = self.cfg.image_file_name(&req.stem);
        let path = self.dir().join(&file_name);
        let img = self.cfg.site_path(&file_name);

        if path.exists() {
            logd!("Cache hit for {}: {}", req.name, path.display());
            return Ok(ImageOutcome::CacheHit { path, img });
        }

        let bytes = self.download(req.url, &path)?;
        logf!("Downloaded {} ({bytes} bytes)", req.name);
        Ok(ImageOutcome::Downloaded { path, img, bytes })
    }
}

/// `<dest>.part`, the in-flight name. Never matches a cache lookup.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

/// Stream `body` to `<dest>.part`, then rename onto `dest`. On any failure
/// the partial file is removed and `dest` is left as it was.
fn persist(body: &mut impl Read, dest: &Path) -> Result<u64, ImageError> {
    let part = part_path(dest);
    let written = stream_to(body, &part).and_then(|n| {
        fs::rename(&part, dest)
            .map(|_| n)
            .map_err(|source| ImageError::Io { path: dest.to_path_buf(), source })
    });
    if written.is_err() {
        let _ = fs::remove_file(&part);
    }
    written
}

fn stream_to(body: &mut impl Read, path: &Path) -> Result<u64, ImageError> {
    let io_err = |source| ImageError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let n = io::copy(body, &mut out).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    Ok(n)
}
