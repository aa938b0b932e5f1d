// src/specs/governors.rs
use crate::model::{Governor, Party};

/// (name, party, state, portrait URL). Add entries here as needed.
const GOVERNORS: &[(&str, Party, &str, &str)] = &[
    (
        "Gavin Newsom",
        Party::Democrat,
        "California",
        "https://www.nga.org/wp-content/uploads/2020/01/Gavin-Newsom-300x400.jpg",
    ),
    (
        "Ron DeSantis",
        Party::Republican,
        "Florida",
        "https://www.nga.org/wp-content/uploads/2020/01/Ron-DeSantis-300x400.jpg",
    ),
];

pub fn governors() -> Vec<Governor> {
    GOVERNORS
        .iter()
        .map(|&(name, party, state, img_url)| Governor {
            name: s!(name),
            party,
            state: s!(state),
            img_url: s!(img_url),
        })
        .collect()
}
