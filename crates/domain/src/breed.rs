// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Allowed breeds and breed suggestions.

use crate::error::DomainError;
use indexmap::IndexSet;
use serde::Deserialize;
use std::path::Path;

/// Number of suggestions offered for an unknown breed.
pub const MAX_BREED_SUGGESTIONS: usize = 3;

/// On-disk layout of the breed catalog.
#[derive(Debug, Deserialize)]
struct BreedFile {
    dogs: Vec<String>,
}

/// The set of breeds the shelter accepts.
///
/// Loaded once at start-up and read-only afterwards. Iteration follows the
/// order of the source list with duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedCatalog {
    breeds: IndexSet<String>,
}

impl BreedCatalog {
    /// Creates a catalog from a list of breed names.
    pub fn new<I, S>(breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            breeds: breeds.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a catalog from a `{"dogs": [..]}` JSON document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BreedCatalogMalformed` if the document does not
    /// have that shape.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let file: BreedFile =
            serde_json::from_str(json).map_err(|e| DomainError::BreedCatalogMalformed {
                reason: e.to_string(),
            })?;
        Ok(Self::new(file.dogs))
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BreedCatalogUnreadable` if the file cannot be
    /// read and `DomainError::BreedCatalogMalformed` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let json: String =
            std::fs::read_to_string(path).map_err(|e| DomainError::BreedCatalogUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_json_str(&json)
    }

    /// Returns whether `breed` is allowed.
    #[must_use]
    pub fn contains(&self, breed: &str) -> bool {
        self.breeds.contains(breed)
    }

    /// Returns the number of allowed breeds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Iterates over the allowed breeds in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.breeds.iter().map(String::as_str)
    }

    /// Returns the allowed breeds closest to `candidate`, best first.
    ///
    /// Similarity is the normalized Levenshtein ratio. At most
    /// [`MAX_BREED_SUGGESTIONS`] breeds are returned; equal scores keep
    /// catalog order.
    #[must_use]
    pub fn similar_breeds(&self, candidate: &str) -> Vec<&str> {
        let mut scored: Vec<(f64, &str)> = self
            .iter()
            .map(|breed| (similarity(candidate, breed), breed))
            .collect();
        // sort_by is stable, so ties stay in catalog order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(MAX_BREED_SUGGESTIONS)
            .map(|(_, breed)| breed)
            .collect()
    }
}

/// A breed drawn from the [`BreedCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Breed {
    value: String,
}

impl Breed {
    /// Creates a new `Breed`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownBreed`, carrying the closest allowed
    /// breeds, if `value` is not in `catalog`.
    pub fn new(value: &str, catalog: &BreedCatalog) -> Result<Self, DomainError> {
        if !catalog.contains(value) {
            return Err(DomainError::UnknownBreed {
                value: value.to_string(),
                suggestions: catalog
                    .similar_breeds(value)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            });
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the breed name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Levenshtein ratio `1 - distance / max(len)`, in `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
fn similarity(a: &str, b: &str) -> f64 {
    let longest: usize = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Character-level edit distance with unit costs.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let substitution: usize = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
