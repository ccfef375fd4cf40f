use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Breed name mapped to its sub-breeds, as returned by the dog API.
/// A `BTreeMap` keeps CLI output in alphabetical order.
pub type BreedMap = BTreeMap<String, Vec<String>>;

/// A single random image for a breed. Never persisted; fetched per view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogImage {
    pub url: String,
    pub breed: String,
}

/// Joins a possibly composite `"breed/subbreed"` name back into the
/// two-segment path the dog API expects, percent-encoding each segment.
#[must_use]
pub fn breed_path(breed: &str) -> String {
    match breed.split_once('/') {
        Some((main, sub)) => format!(
            "{}/{}",
            urlencoding::encode(main),
            urlencoding::encode(sub)
        ),
        None => urlencoding::encode(breed).into_owned(),
    }
}
