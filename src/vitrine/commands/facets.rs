use crate::model::{FacetKey, Item};
use serde::Serialize;
use std::collections::HashSet;

/// Distinct non-empty values of `key`, in first-seen order. Years come out
/// most recent first.
pub fn unique_values(items: &[Item], key: FacetKey) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = items
        .iter()
        .filter_map(|item| key.value_of(item))
        .filter(|value| seen.insert(value.clone()))
        .collect();

    if key == FacetKey::Year {
        values.sort_by_key(|v| std::cmp::Reverse(v.parse::<i64>().unwrap_or(i64::MIN)));
    }

    values
}

/// Options for the four selection controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub genres: Vec<String>,
    pub categories: Vec<String>,
    pub years: Vec<String>,
    pub types: Vec<String>,
}

impl FacetOptions {
    pub fn index(items: &[Item]) -> Self {
        Self {
            genres: unique_values(items, FacetKey::Genre),
            categories: unique_values(items, FacetKey::Category),
            years: unique_values(items, FacetKey::Year),
            types: unique_values(items, FacetKey::Type),
        }
    }

    pub fn get(&self, key: FacetKey) -> &[String] {
        match key {
            FacetKey::Genre => &self.genres,
            FacetKey::Category => &self.categories,
            FacetKey::Year => &self.years,
            FacetKey::Type => &self.types,
        }
    }

    pub fn is_empty(&self) -> bool {
        FacetKey::ALL.iter().all(|key| self.get(*key).is_empty())
    }
}
