//! Affiliation groups.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationResult};

/// The fixed set of groups a patient can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Affiliation {
    Unregistered,
    GroupA,
    GroupB,
    GroupC,
    GroupD,
}

impl Affiliation {
    /// Every affiliation, in display order.
    pub const ALL: [Affiliation; 5] = [
        Affiliation::Unregistered,
        Affiliation::GroupA,
        Affiliation::GroupB,
        Affiliation::GroupC,
        Affiliation::GroupD,
    ];

    /// Input label (lowercase).
    pub fn label(&self) -> &'static str {
        match self {
            Affiliation::Unregistered => "unregistered",
            Affiliation::GroupA => "group-a",
            Affiliation::GroupB => "group-b",
            Affiliation::GroupC => "group-c",
            Affiliation::GroupD => "group-d",
        }
    }

    /// Form stored in the database (uppercase).
    pub fn as_stored(&self) -> &'static str {
        match self {
            Affiliation::Unregistered => "UNREGISTERED",
            Affiliation::GroupA => "GROUP-A",
            Affiliation::GroupB => "GROUP-B",
            Affiliation::GroupC => "GROUP-C",
            Affiliation::GroupD => "GROUP-D",
        }
    }

    /// Parse user input, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let wanted = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.label() == wanted)
            .ok_or_else(|| ValidationError::UnknownAffiliation(input.trim().to_string()))
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Affiliation::parse("group-a").unwrap(), Affiliation::GroupA);
        assert_eq!(Affiliation::parse("GROUP-B").unwrap(), Affiliation::GroupB);
        assert_eq!(Affiliation::parse("  Unregistered ").unwrap(), Affiliation::Unregistered);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            Affiliation::parse("group-e"),
            Err(ValidationError::UnknownAffiliation("group-e".into()))
        );
        assert!(Affiliation::parse("").is_err());
        assert!(Affiliation::parse("groupa").is_err());
    }

    #[test]
    fn test_stored_form_round_trips() {
        for affiliation in Affiliation::ALL {
            assert_eq!(affiliation.as_stored(), affiliation.label().to_uppercase());
            assert_eq!(Affiliation::parse(affiliation.as_stored()).unwrap(), affiliation);
        }
    }
}
