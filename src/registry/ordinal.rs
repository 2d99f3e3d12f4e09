//! Ordinal encoding for the education level.
//!
//! Unlike the categorical columns this one is sent to the model as an integer
//! rank and has no fallback: the label must be one of the five below.

use serde::{Deserialize, Serialize};

/// Highest education level reached, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Below College")]
    BelowCollege,
    College,
    Bachelor,
    Master,
    Doctor,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::BelowCollege,
        EducationLevel::College,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Doctor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::BelowCollege => "Below College",
            EducationLevel::College => "College",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::Doctor => "Doctor",
        }
    }

    /// Value fed into the `EmpEducationLevel` column.
    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::BelowCollege => 0,
            EducationLevel::College => 1,
            EducationLevel::Bachelor => 2,
            EducationLevel::Master => 3,
            EducationLevel::Doctor => 4,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    pub fn next(self) -> Self {
        let idx = (self.rank() as usize + 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    pub fn prev(self) -> Self {
        let idx = (self.rank() as usize + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL[idx]
    }
}

/// Rank for an education label, or `None` outside the five known labels.
pub fn to_ordinal(label: &str) -> Option<u8> {
    EducationLevel::from_label(label).map(EducationLevel::rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_labels_map_to_ranks_in_order() {
        let labels = ["Below College", "College", "Bachelor", "Master", "Doctor"];
        let ranks: Vec<u8> = labels.iter().filter_map(|l| to_ordinal(l)).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn master_is_three() {
        assert_eq!(to_ordinal("Master"), Some(3));
    }

    #[test]
    fn unknown_labels_have_no_rank() {
        assert_eq!(to_ordinal("PhD"), None);
        assert_eq!(to_ordinal("master"), None);
        assert_eq!(to_ordinal(""), None);
    }

    #[test]
    fn enum_order_matches_rank_order() {
        for pair in EducationLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(EducationLevel::Doctor.next(), EducationLevel::BelowCollege);
        assert_eq!(EducationLevel::BelowCollege.prev(), EducationLevel::Doctor);
        assert_eq!(EducationLevel::Bachelor.next(), EducationLevel::Master);
    }

    #[test]
    fn deserializes_from_display_labels() {
        let level: EducationLevel = serde_json::from_str("\"Below College\"").unwrap();
        assert_eq!(level, EducationLevel::BelowCollege);
        assert!(serde_json::from_str::<EducationLevel>("\"PhD\"").is_err());
    }
}
