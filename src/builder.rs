// src/builder.rs
//! Raw sources in, ordered `PoliticianRecord`s out.
//!
//! Legislators first, then governors, each group in source order. A record
//! only survives if its party is tracked and its image source says yes.

use crate::{
    config::Config,
    core::slugify,
    model::{Category, Legislator, Party, PoliticianRecord},
    progress::Progress,
    specs::Sources,
    store::{ImageError, ImageOutcome, ImageRequest, ImageSource},
};

#[derive(Debug)]
pub struct ImageFailure {
    pub name: String,
    pub error: ImageError,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub records: Vec<PoliticianRecord>,
    /// Filtered out by party. Not an error.
    pub skipped_party: usize,
    /// Undecodable roster entries plus legislators whose current term is
    /// missing or lacks a `type`/`state`.
    pub malformed: usize,
    pub cache_hits: usize,
    pub downloads: usize,
    pub image_failures: Vec<ImageFailure>,
}

/// A record minus its `img`, plus what's needed to get one.
struct Candidate {
    name: String,
    party: Party,
    state: String,
    category: Category,
    stem: String,
    url: String,
}

enum Screened {
    Keep(Candidate),
    Untracked,
    Malformed(&'static str),
}

fn screen_legislator(cfg: &Config, leg: &Legislator) -> Screened {
    let Some(term) = leg.current_term() else {
        return Screened::Malformed("no terms");
    };
    let (Some(kind), Some(state)) = (term.kind.as_deref(), term.state.as_deref()) else {
        return Screened::Malformed("current term lacks type or state");
    };

    let party = match term.party.as_deref().and_then(Party::parse) {
        Some(p) if cfg.tracks(p) => p,
        _ => return Screened::Untracked,
    };

    let name = leg.display_name();
    Screened::Keep(Candidate {
        url: cfg.portrait_url(&leg.id.bioguide),
        stem: image_stem(cfg, &name, Some(&leg.id.bioguide)),
        name,
        party,
        state: s!(state),
        category: Category::from_term_type(kind),
    })
}

/// Cache key for a portrait: the slug, plus `-<bioguide>` for legislators
/// when `cfg.suffix_ids` is on.
pub fn image_stem(cfg: &Config, name: &str, bioguide: Option<&str>) -> String {
    let slug = slugify(name);
    match bioguide {
        Some(id) if cfg.suffix_ids => join!(&slug, "-", &id.to_ascii_lowercase()),
        _ => slug,
    }
}

fn collect_candidates(cfg: &Config, sources: &Sources, report: &mut BuildReport) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(sources.legislators.len() + sources.governors.len());

    for leg in &sources.legislators {
        match screen_legislator(cfg, leg) {
            Screened::Keep(c) => out.push(c),
            Screened::Untracked => {
                logd!("Skipping {} ({:?})", leg.display_name(),
                    leg.current_term().and_then(|t| t.party.as_deref()));
                report.skipped_party += 1;
            }
            Screened::Malformed(why) => {
                logw!("Skipping {}: {why}", leg.id.bioguide);
                report.malformed += 1;
            }
        }
    }

    for gov in &sources.governors {
        if !cfg.tracks(gov.party) {
            report.skipped_party += 1;
            continue;
        }
        out.push(Candidate {
            name: gov.name.clone(),
            party: gov.party,
            state: gov.state.clone(),
            category: Category::Gov,
            stem: image_stem(cfg, &gov.name, None),
            url: gov.img_url.clone(),
        });
    }

    out
}

/// Build the dataset. Image failures drop the record and are reported;
/// they never end the batch.
pub fn build(
    cfg: &Config,
    sources: &Sources,
    images: &mut dyn ImageSource,
    mut progress: Option<&mut dyn Progress>,
) -> BuildReport {
    let mut report = BuildReport { malformed: sources.malformed, ..Default::default() };
    let candidates = collect_candidates(cfg, sources, &mut report);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(candidates.len());
    }

    report.records.reserve(candidates.len());
    for c in candidates {
        let req = ImageRequest { name: &c.name, stem: c.stem.clone(), url: &c.url };

        match images.acquire(&req) {
            Ok(outcome) => {
                match &outcome {
                    ImageOutcome::CacheHit { .. } => report.cache_hits += 1,
                    ImageOutcome::Downloaded { .. } => report.downloads += 1,
                    ImageOutcome::Remote { .. } => {}
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&c.name);
                }
                report.records.push(PoliticianRecord {
                    img: s!(outcome.img()),
                    name: c.name,
                    party: c.party,
                    state: c.state,
                    category: c.category,
                });
            }
            Err(error) => {
                loge!("Failed to fetch image for {}: {error}", c.name);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&c.name, &error.to_string());
                }
                report.image_failures.push(ImageFailure { name: c.name, error });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Governor, LegislatorId, LegislatorName, Term};
    use crate::store::RemoteImages;

    fn leg(id: &str, first: &str, last: &str, terms: &[(&str, &str, &str)]) -> Legislator {
        Legislator {
            id: LegislatorId { bioguide: s!(id) },
            name: LegislatorName { first: s!(first), last: s!(last) },
            terms: terms
                .iter()
                .map(|&(kind, state, party)| Term {
                    kind: Some(s!(kind)),
                    state: Some(s!(state)),
                    party: Some(s!(party)),
                })
                .collect(),
        }
    }

    fn sources() -> Sources {
        Sources {
            legislators: vec![
                leg("S000001", "Sally", "Senator", &[("sen", "VT", "Democrat")]),
                leg("R000002", "Randy", "Rep", &[("rep", "TX", "Republican")]),
                leg("I000003", "Ivy", "Indie", &[("sen", "ME", "Independent")]),
            ],
            governors: vec![
                Governor { name: s!("Gavin Newsom"), party: Party::Democrat, state: s!("California"), img_url: s!("https://g/1.jpg") },
                Governor { name: s!("Ron DeSantis"), party: Party::Republican, state: s!("Florida"), img_url: s!("https://g/2.jpg") },
            ],
            malformed: 0,
        }
    }

    /// Fails for the listed stems, otherwise pretends to download.
    struct Scripted {
        fail: Vec<&'static str>,
        seen: Vec<String>,
    }

    impl ImageSource for Scripted {
        fn acquire(&mut self, req: &ImageRequest<'_>) -> Result<ImageOutcome, ImageError> {
            self.seen.push(req.stem.clone());
            if self.fail.iter().any(|f| *f == req.stem) {
                return Err(ImageError::Status { url: s!(req.url), status: 404 });
            }
            Ok(ImageOutcome::Downloaded {
                path: req.stem.clone().into(),
                img: join!("/images/politicians/", &req.stem, ".jpg"),
                bytes: 1,
            })
        }
    }

    #[test]
    fn independent_dropped_and_order_kept() {
        let cfg = Config::default();
        let mut images = Scripted { fail: vec![], seen: vec![] };
        let report = build(&cfg, &sources(), &mut images, None);

        let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Sally Senator", "Randy Rep", "Gavin Newsom", "Ron DeSantis"]);
        let cats: Vec<Category> = report.records.iter().map(|r| r.category).collect();
        assert_eq!(cats, [Category::Senate, Category::House, Category::Gov, Category::Gov]);
        assert!(report.records.iter().all(|r| !r.img.is_empty()));
        assert_eq!(report.skipped_party, 1);
        assert_eq!(report.downloads, 4);
        // The independent never reaches the image source
        assert!(!images.seen.iter().any(|s| s.starts_with("ivy")));
    }

    #[test]
    fn image_failure_drops_only_that_record() {
        let cfg = Config::default();
        let mut images = Scripted { fail: vec!["randy-rep-r000002"], seen: vec![] };
        let report = build(&cfg, &sources(), &mut images, None);

        assert_eq!(report.records.len(), 3);
        assert!(report.records.iter().all(|r| r.name != "Randy Rep"));
        assert_eq!(report.image_failures.len(), 1);
        assert_eq!(report.image_failures[0].name, "Randy Rep");
        assert!(matches!(report.image_failures[0].error, ImageError::Status { status: 404, .. }));
    }

    #[test]
    fn stems_suffix_legislators_only() {
        let cfg = Config::default();
        let mut images = Scripted { fail: vec![], seen: vec![] };
        build(&cfg, &sources(), &mut images, None);
        assert_eq!(
            images.seen,
            ["sally-senator-s000001", "randy-rep-r000002", "gavin-newsom", "ron-desantis"]
        );

        let cfg = Config { suffix_ids: false, ..Config::default() };
        let mut images = Scripted { fail: vec![], seen: vec![] };
        build(&cfg, &sources(), &mut images, None);
        assert_eq!(images.seen[0], "sally-senator");
    }

    #[test]
    fn only_latest_term_counts() {
        let cfg = Config::default();
        let src = Sources {
            legislators: vec![
                // Was a Democrat rep, now an Independent senator: dropped
                leg("A1", "Al", "Former", &[("rep", "VT", "Democrat"), ("sen", "VT", "Independent")]),
                // Was an Independent, now a Republican senator: kept as senate
                leg("B2", "Bo", "Convert", &[("rep", "AK", "Independent"), ("sen", "AK", "Republican")]),
            ],
            ..Sources::default()
        };
        let report = build(&cfg, &src, &mut RemoteImages, None);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name, "Bo Convert");
        assert_eq!(report.records[0].category, Category::Senate);
        assert_eq!(report.records[0].state, "AK");
    }

    #[test]
    fn remote_mode_uses_upstream_urls() {
        let cfg = Config::default();
        let report = build(&cfg, &sources(), &mut RemoteImages, None);
        assert_eq!(
            report.records[0].img,
            "https://unitedstates.github.io/images/congress/450x550/S000001.jpg"
        );
        assert_eq!(report.records[2].img, "https://g/1.jpg");
    }

    #[test]
    fn tracked_set_narrows_output() {
        let cfg = Config { tracked_parties: vec![Party::Republican], ..Config::default() };
        let report = build(&cfg, &sources(), &mut RemoteImages, None);
        assert!(report.records.iter().all(|r| r.party == Party::Republican));
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped_party, 3);
    }

    #[test]
    fn no_terms_counts_as_malformed() {
        let cfg = Config::default();
        let src = Sources {
            legislators: vec![leg("N0", "No", "Terms", &[])],
            malformed: 2,
            ..Sources::default()
        };
        let report = build(&cfg, &src, &mut RemoteImages, None);
        assert!(report.records.is_empty());
        assert_eq!(report.malformed, 3);
    }

    #[test]
    fn only_current_term_needs_type_and_state() {
        let cfg = Config::default();
        let mut patchy = leg("P1", "Pat", "Patchy", &[("sen", "OH", "Democrat")]);
        patchy.terms.insert(0, Term { kind: Some(s!("rep")), party: Some(s!("Democrat")), ..Term::default() });
        let mut stateless = leg("Q2", "Quin", "Stateless", &[("rep", "TX", "Republican")]);
        stateless.terms.push(Term { kind: Some(s!("sen")), party: Some(s!("Republican")), ..Term::default() });

        let src = Sources { legislators: vec![patchy, stateless], ..Sources::default() };
        let report = build(&cfg, &src, &mut RemoteImages, None);

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name, "Pat Patchy");
        assert_eq!(report.records[0].state, "OH");
        assert_eq!(report.records[0].category, Category::Senate);
        assert_eq!(report.malformed, 1);
        assert_eq!(report.skipped_party, 0);
    }
}
