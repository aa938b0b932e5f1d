// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::model::{Governor, Party};
use crate::specs::governors;

/// How `img` gets filled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageMode {
    /// Point straight at the upstream URL; nothing stored locally.
    Remote,
    /// Mirror into `image_dir` and point at the site-relative copy.
    Cached,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub roster_url: String,
    /// Portrait URL with a `{bioguide}` placeholder.
    pub portrait_url_template: String,
    pub out_file: PathBuf,
    pub image_dir: PathBuf,
    pub img_url_prefix: String,
    pub image_ext: String,
    pub timeout: Duration,
    pub tracked_parties: Vec<Party>,
    pub governors: Vec<Governor>,
    pub image_mode: ImageMode,
    /// Append `-<bioguide>` to legislator filenames so namesakes don't share a file.
    pub suffix_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_url: s!(ROSTER_URL),
            portrait_url_template: s!(PORTRAIT_URL_TEMPLATE),
            out_file: PathBuf::from(DEFAULT_OUT_FILE),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            img_url_prefix: s!(DEFAULT_IMG_URL_PREFIX),
            image_ext: s!(DEFAULT_IMAGE_EXT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            tracked_parties: vec![Party::Democrat, Party::Republican],
            governors: governors::governors(),
            image_mode: ImageMode::Cached,
            suffix_ids: true,
        }
    }
}

impl Config {
    /// Point the upstream URLs at another host, e.g. a local mock.
    pub fn with_roster_url(mut self, url: impl Into<String>) -> Self {
        self.roster_url = url.into();
        self
    }

    pub fn with_portrait_template(mut self, template: impl Into<String>) -> Self {
        self.portrait_url_template = template.into();
        self
    }

    /// Root every local path under `root` (`<root>/politicians.json`,
    /// `<root>/images/politicians`).
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.out_file = root.join("politicians.json");
        self.image_dir = root.join("images").join("politicians");
        self
    }

    pub fn with_governors(mut self, governors: Vec<Governor>) -> Self {
        self.governors = governors;
        self
    }

    pub fn with_image_mode(mut self, mode: ImageMode) -> Self {
        self.image_mode = mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn tracks(&self, party: Party) -> bool {
        self.tracked_parties.contains(&party)
    }

    pub fn portrait_url(&self, bioguide: &str) -> String {
        self.portrait_url_template.replace(BIOGUIDE_PLACEHOLDER, bioguide)
    }

    /// Inverse of `portrait_url`: the bioguide id if `url` follows the template.
    pub fn bioguide_from_url<'u>(&self, url: &'u str) -> Option<&'u str> {
        let (pre, post) = self.portrait_url_template.split_once(BIOGUIDE_PLACEHOLDER)?;
        let id = url.strip_prefix(pre)?.strip_suffix(post)?;
        (!id.is_empty() && !id.contains('/')).then_some(id)
    }

    /// `<stem>.<ext>`
    pub fn image_file_name(&self, stem: &str) -> String {
        join!(stem, ".", &self.image_ext)
    }

    /// Site-relative path the front-end loads, e.g. `/images/politicians/gavin-newsom.jpg`.
    pub fn site_path(&self, file_name: &str) -> String {
        let prefix = self.img_url_prefix.trim_end_matches('/');
        join!(prefix, "/", file_name)
    }
}
