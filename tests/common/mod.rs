// tests/common/mod.rs
#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use pol_scrape::model::{Governor, Party};
use pol_scrape::{Config, ImageMode};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ROSTER: &str = r#"[
  {
    "id": {"bioguide": "S000001", "govtrack": 1},
    "name": {"first": "Sally", "last": "Senator"},
    "terms": [
      {"type": "rep", "state": "VT", "party": "Democrat"},
      {"type": "sen", "state": "VT", "party": "Democrat"}
    ]
  },
  {
    "id": {"bioguide": "R000002"},
    "name": {"first": "Randy", "last": "Rep"},
    "terms": [{"type": "rep", "state": "TX", "party": "Republican"}]
  },
  {
    "id": {"bioguide": "I000003"},
    "name": {"first": "Ivy", "last": "Indie"},
    "terms": [{"type": "sen", "state": "ME", "party": "Independent"}]
  }
]"#;

pub const JPEG: &[u8] = b"\xFF\xD8\xFF\xE0fake-jpeg";

/// Mock upstream. Blocking code under test runs on the test thread while
/// the server is driven by its own runtime.
pub struct Upstream {
    // Declared first so it drops before the runtime.
    pub server: MockServer,
    rt: Runtime,
}

impl Upstream {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("tokio runtime");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Roster at `/roster.json`, every portrait under `/portraits/` and
    /// `/govs/` answering with `JPEG`.
    pub fn happy(&self) {
        self.roster(200, ROSTER);
        self.portraits();
    }

    /// Every portrait under `/portraits/` and `/govs/` answers with `JPEG`.
    pub fn portraits(&self) {
        self.mount(
            Mock::given(method("GET"))
                .and(path_regex(r"^/(portraits|govs)/.+\.jpg$"))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG.to_vec())),
        );
    }

    pub fn roster(&self, status: u16, body: &str) {
        self.mount(
            Mock::given(method("GET"))
                .and(path("/roster.json"))
                .respond_with(ResponseTemplate::new(status).set_body_string(body)),
        );
    }

    /// Roster served with a delay before the response starts.
    pub fn slow_roster(&self, delay: Duration) {
        self.mount(
            Mock::given(method("GET"))
                .and(path("/roster.json"))
                .respond_with(ResponseTemplate::new(200).set_body_string(ROSTER).set_delay(delay)),
        );
    }

    /// Override one path with a JPEG that only arrives after `delay`.
    pub fn slow(&self, p: &str, delay: Duration) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(p))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG.to_vec()).set_delay(delay))
                .with_priority(1),
        );
    }

    /// Override one path with a 404.
    pub fn missing(&self, p: &str) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(p))
                .respond_with(ResponseTemplate::new(404))
                .with_priority(1),
        );
    }

    /// Requests received so far whose path starts with `prefix`.
    pub fn hits(&self, prefix: &str) -> usize {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().starts_with(prefix))
            .count()
    }

    pub fn governors(&self) -> Vec<Governor> {
        vec![
            Governor {
                name: "Gavin Newsom".into(),
                party: Party::Democrat,
                state: "California".into(),
                img_url: format!("{}/govs/newsom.jpg", self.uri()),
            },
            Governor {
                name: "Ron DeSantis".into(),
                party: Party::Republican,
                state: "Florida".into(),
                img_url: format!("{}/govs/desantis.jpg", self.uri()),
            },
        ]
    }

    /// Cached-mode config pointed at this server and rooted at `root`.
    pub fn config(&self, root: &Path) -> Config {
        Config::default()
            .rooted_at(root)
            .with_roster_url(format!("{}/roster.json", self.uri()))
            .with_portrait_template(format!("{}/portraits/{{bioguide}}.jpg", self.uri()))
            .with_governors(self.governors())
            .with_image_mode(ImageMode::Cached)
            .with_timeout(Duration::from_secs(5))
    }
}
