//! Country to continent classification.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 5] = [
        Continent::Africa,
        Continent::Americas,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Americas => "Americas",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Continent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown continent '{}'", s)))
    }
}

const BUILTIN: &[(&str, Continent)] = &[
    ("Korea, South", Continent::Asia),
    ("Korea, North", Continent::Asia),
    ("Japan", Continent::Asia),
    ("China", Continent::Asia),
    ("India", Continent::Asia),
    ("Thailand", Continent::Asia),
    ("Vietnam", Continent::Asia),
    ("Indonesia", Continent::Asia),
    ("Philippines", Continent::Asia),
    ("Malaysia", Continent::Asia),
    ("Singapore", Continent::Asia),
    ("Mongolia", Continent::Asia),
    ("Kazakhstan", Continent::Asia),
    ("Uzbekistan", Continent::Asia),
    ("Pakistan", Continent::Asia),
    ("Bangladesh", Continent::Asia),
    ("Afghanistan", Continent::Asia),
    ("Nepal", Continent::Asia),
    ("Sri Lanka", Continent::Asia),
    ("Germany", Continent::Europe),
    ("France", Continent::Europe),
    ("Italy", Continent::Europe),
    ("Spain", Continent::Europe),
    ("United Kingdom", Continent::Europe),
    ("Poland", Continent::Europe),
    ("Netherlands", Continent::Europe),
    ("Belgium", Continent::Europe),
    ("Sweden", Continent::Europe),
    ("Norway", Continent::Europe),
    ("Denmark", Continent::Europe),
    ("Finland", Continent::Europe),
    ("Czech Republic", Continent::Europe),
    ("Austria", Continent::Europe),
    ("Switzerland", Continent::Europe),
    ("Hungary", Continent::Europe),
    ("Portugal", Continent::Europe),
    ("Greece", Continent::Europe),
    ("Ireland", Continent::Europe),
    ("Russia", Continent::Europe),
    ("United States", Continent::Americas),
    ("Canada", Continent::Americas),
    ("Mexico", Continent::Americas),
    ("Brazil", Continent::Americas),
    ("Argentina", Continent::Americas),
    ("Chile", Continent::Americas),
    ("Colombia", Continent::Americas),
    ("Peru", Continent::Americas),
    ("Venezuela", Continent::Americas),
    ("Cuba", Continent::Americas),
    ("South Africa", Continent::Africa),
    ("Nigeria", Continent::Africa),
    ("Egypt", Continent::Africa),
    ("Kenya", Continent::Africa),
    ("Ethiopia", Continent::Africa),
    ("Morocco", Continent::Africa),
    ("Algeria", Continent::Africa),
    ("Ghana", Continent::Africa),
    ("Australia", Continent::Oceania),
    ("New Zealand", Continent::Oceania),
];

/// A partial map from country name to continent. Countries it does not know
/// are unclassified, which is not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContinentClassifier {
    map: HashMap<String, Continent>,
}

impl ContinentClassifier {
    /// The hand-maintained table shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|&(country, c)| (country.to_string(), c)))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, Continent)>) -> Self {
        ContinentClassifier {
            map: entries.into_iter().collect(),
        }
    }

    /// Add or replace entries, e.g. from configuration.
    pub fn with_overrides(mut self, overrides: &HashMap<String, Continent>) -> Self {
        self.map
            .extend(overrides.iter().map(|(country, c)| (country.clone(), *c)));
        self
    }

    /// Exact, case-sensitive lookup.
    pub fn classify(&self, country: &str) -> Option<Continent> {
        self.map.get(country).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
