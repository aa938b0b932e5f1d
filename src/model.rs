// src/model.rs
//! Output record plus the slice of the upstream roster shape we read.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Democrat,
    Republican,
}

impl Party {
    /// Upstream spelling only; anything else (Independent, Libertarian…) is `None`.
    pub fn parse(s: &str) -> Option<Party> {
        match s {
            "Democrat" => Some(Party::Democrat),
            "Republican" => Some(Party::Republican),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Senate,
    House,
    Gov,
}

impl Category {
    /// `sen` is the Senate; every other term type counts as the House.
    pub fn from_term_type(kind: &str) -> Category {
        if kind == "sen" { Category::Senate } else { Category::House }
    }
}

/// One entry of `politicians.json`. Field order is the on-disk order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticianRecord {
    pub name: String,
    pub party: Party,
    pub state: String,
    pub category: Category,
    pub img: String,
}

/* ---------------- upstream roster ---------------- */

#[derive(Clone, Debug, Deserialize)]
pub struct Legislator {
    pub id: LegislatorId,
    pub name: LegislatorName,
    #[serde(default)]
    pub terms: Vec<Term>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LegislatorId {
    pub bioguide: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LegislatorName {
    pub first: String,
    pub last: String,
}

/// Every field is optional here: old terms in the feed are often incomplete,
/// and only the current one has to carry a `type` and `state`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Term {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
}

impl Legislator {
    pub fn display_name(&self) -> String {
        join!(&self.name.first, " ", &self.name.last)
    }

    /// Most recent term; earlier ones never influence the record.
    pub fn current_term(&self) -> Option<&Term> {
        self.terms.last()
    }
}

/// Hand-maintained governor entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Governor {
    pub name: String,
    pub party: Party,
    pub state: String,
    pub img_url: String,
}
