//! The fixed set of species the classifier knows.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// One of the nine fish species the model was trained on.
///
/// Variant order is the model's output order: the score at index `i`
/// belongs to `Species::ALL[i]`. A retrained model must keep this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Species {
    /// Black Sea sprat.
    #[serde(rename = "Black Sea Sprat")]
    BlackSeaSprat,
    /// Gilt-head bream.
    #[serde(rename = "Gilt-Head Bream")]
    GiltHeadBream,
    /// Horse mackerel.
    #[serde(rename = "Horse Mackerel")]
    HorseMackerel,
    /// Red mullet.
    #[serde(rename = "Red Mullet")]
    RedMullet,
    /// Red sea bream.
    #[serde(rename = "Red Sea Bream")]
    RedSeaBream,
    /// Sea bass.
    #[serde(rename = "Sea Bass")]
    SeaBass,
    /// Shrimp.
    #[serde(rename = "Shrimp")]
    Shrimp,
    /// Striped red mullet.
    #[serde(rename = "Striped Red Mullet")]
    StripedRedMullet,
    /// Trout.
    #[serde(rename = "Trout")]
    Trout,
}

impl Species {
    /// All species in model output order.
    pub const ALL: [Self; 9] = [
        Self::BlackSeaSprat,
        Self::GiltHeadBream,
        Self::HorseMackerel,
        Self::RedMullet,
        Self::RedSeaBream,
        Self::SeaBass,
        Self::Shrimp,
        Self::StripedRedMullet,
        Self::Trout,
    ];

    /// Number of known species.
    pub const COUNT: usize = Self::ALL.len();

    /// Species for a model output index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Model output index of this species.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, as stored in the `fish_type` column.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BlackSeaSprat => "Black Sea Sprat",
            Self::GiltHeadBream => "Gilt-Head Bream",
            Self::HorseMackerel => "Horse Mackerel",
            Self::RedMullet => "Red Mullet",
            Self::RedSeaBream => "Red Sea Bream",
            Self::SeaBass => "Sea Bass",
            Self::Shrimp => "Shrimp",
            Self::StripedRedMullet => "Striped Red Mullet",
            Self::Trout => "Trout",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Species {
    type Err = Error;

    /// Accepts the display label or the CLI slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|species| normalize(species.label()) == wanted)
            .ok_or_else(|| Error::UnknownSpecies {
                value: s.to_string(),
            })
    }
}

/// Lowercase and fold spaces/underscores to hyphens.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
