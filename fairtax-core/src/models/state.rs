use serde::{Deserialize, Serialize};

use crate::models::PovertyGuideline;

/// Two-letter USPS codes for the 50 US states.
///
/// Variants are declared in lexicographic order, so [`StateCode::ALL`]
/// doubles as the sorted listing a selection surface should present. Sorted
/// order is part of the contract, not an accident of declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateCode {
    AK,
    AL,
    AR,
    AZ,
    CA,
    CO,
    CT,
    DE,
    FL,
    GA,
    HI,
    IA,
    ID,
    IL,
    IN,
    KS,
    KY,
    LA,
    MA,
    MD,
    ME,
    MI,
    MN,
    MO,
    MS,
    MT,
    NC,
    ND,
    NE,
    NH,
    NJ,
    NM,
    NV,
    NY,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VA,
    VT,
    WA,
    WI,
    WV,
    WY,
}

impl StateCode {
    /// All 50 codes in lexicographic order.
    pub const ALL: [StateCode; 50] = [
        StateCode::AK,
        StateCode::AL,
        StateCode::AR,
        StateCode::AZ,
        StateCode::CA,
        StateCode::CO,
        StateCode::CT,
        StateCode::DE,
        StateCode::FL,
        StateCode::GA,
        StateCode::HI,
        StateCode::IA,
        StateCode::ID,
        StateCode::IL,
        StateCode::IN,
        StateCode::KS,
        StateCode::KY,
        StateCode::LA,
        StateCode::MA,
        StateCode::MD,
        StateCode::ME,
        StateCode::MI,
        StateCode::MN,
        StateCode::MO,
        StateCode::MS,
        StateCode::MT,
        StateCode::NC,
        StateCode::ND,
        StateCode::NE,
        StateCode::NH,
        StateCode::NJ,
        StateCode::NM,
        StateCode::NV,
        StateCode::NY,
        StateCode::OH,
        StateCode::OK,
        StateCode::OR,
        StateCode::PA,
        StateCode::RI,
        StateCode::SC,
        StateCode::SD,
        StateCode::TN,
        StateCode::TX,
        StateCode::UT,
        StateCode::VA,
        StateCode::VT,
        StateCode::WA,
        StateCode::WI,
        StateCode::WV,
        StateCode::WY,
    ];

    /// Parses a two-letter code, case-insensitive. Surrounding whitespace is
    /// ignored. Returns `None` for anything outside the fixed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AK" => Some(StateCode::AK),
            "AL" => Some(StateCode::AL),
            "AR" => Some(StateCode::AR),
            "AZ" => Some(StateCode::AZ),
            "CA" => Some(StateCode::CA),
            "CO" => Some(StateCode::CO),
            "CT" => Some(StateCode::CT),
            "DE" => Some(StateCode::DE),
            "FL" => Some(StateCode::FL),
            "GA" => Some(StateCode::GA),
            "HI" => Some(StateCode::HI),
            "IA" => Some(StateCode::IA),
            "ID" => Some(StateCode::ID),
            "IL" => Some(StateCode::IL),
            "IN" => Some(StateCode::IN),
            "KS" => Some(StateCode::KS),
            "KY" => Some(StateCode::KY),
            "LA" => Some(StateCode::LA),
            "MA" => Some(StateCode::MA),
            "MD" => Some(StateCode::MD),
            "ME" => Some(StateCode::ME),
            "MI" => Some(StateCode::MI),
            "MN" => Some(StateCode::MN),
            "MO" => Some(StateCode::MO),
            "MS" => Some(StateCode::MS),
            "MT" => Some(StateCode::MT),
            "NC" => Some(StateCode::NC),
            "ND" => Some(StateCode::ND),
            "NE" => Some(StateCode::NE),
            "NH" => Some(StateCode::NH),
            "NJ" => Some(StateCode::NJ),
            "NM" => Some(StateCode::NM),
            "NV" => Some(StateCode::NV),
            "NY" => Some(StateCode::NY),
            "OH" => Some(StateCode::OH),
            "OK" => Some(StateCode::OK),
            "OR" => Some(StateCode::OR),
            "PA" => Some(StateCode::PA),
            "RI" => Some(StateCode::RI),
            "SC" => Some(StateCode::SC),
            "SD" => Some(StateCode::SD),
            "TN" => Some(StateCode::TN),
            "TX" => Some(StateCode::TX),
            "UT" => Some(StateCode::UT),
            "VA" => Some(StateCode::VA),
            "VT" => Some(StateCode::VT),
            "WA" => Some(StateCode::WA),
            "WI" => Some(StateCode::WI),
            "WV" => Some(StateCode::WV),
            "WY" => Some(StateCode::WY),
            _ => None,
        }
    }

    /// The code as a two-letter string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateCode::AK => "AK",
            StateCode::AL => "AL",
            StateCode::AR => "AR",
            StateCode::AZ => "AZ",
            StateCode::CA => "CA",
            StateCode::CO => "CO",
            StateCode::CT => "CT",
            StateCode::DE => "DE",
            StateCode::FL => "FL",
            StateCode::GA => "GA",
            StateCode::HI => "HI",
            StateCode::IA => "IA",
            StateCode::ID => "ID",
            StateCode::IL => "IL",
            StateCode::IN => "IN",
            StateCode::KS => "KS",
            StateCode::KY => "KY",
            StateCode::LA => "LA",
            StateCode::MA => "MA",
            StateCode::MD => "MD",
            StateCode::ME => "ME",
            StateCode::MI => "MI",
            StateCode::MN => "MN",
            StateCode::MO => "MO",
            StateCode::MS => "MS",
            StateCode::MT => "MT",
            StateCode::NC => "NC",
            StateCode::ND => "ND",
            StateCode::NE => "NE",
            StateCode::NH => "NH",
            StateCode::NJ => "NJ",
            StateCode::NM => "NM",
            StateCode::NV => "NV",
            StateCode::NY => "NY",
            StateCode::OH => "OH",
            StateCode::OK => "OK",
            StateCode::OR => "OR",
            StateCode::PA => "PA",
            StateCode::RI => "RI",
            StateCode::SC => "SC",
            StateCode::SD => "SD",
            StateCode::TN => "TN",
            StateCode::TX => "TX",
            StateCode::UT => "UT",
            StateCode::VA => "VA",
            StateCode::VT => "VT",
            StateCode::WA => "WA",
            StateCode::WI => "WI",
            StateCode::WV => "WV",
            StateCode::WY => "WY",
        }
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            StateCode::AK => "Alaska",
            StateCode::AL => "Alabama",
            StateCode::AR => "Arkansas",
            StateCode::AZ => "Arizona",
            StateCode::CA => "California",
            StateCode::CO => "Colorado",
            StateCode::CT => "Connecticut",
            StateCode::DE => "Delaware",
            StateCode::FL => "Florida",
            StateCode::GA => "Georgia",
            StateCode::HI => "Hawaii",
            StateCode::IA => "Iowa",
            StateCode::ID => "Idaho",
            StateCode::IL => "Illinois",
            StateCode::IN => "Indiana",
            StateCode::KS => "Kansas",
            StateCode::KY => "Kentucky",
            StateCode::LA => "Louisiana",
            StateCode::MA => "Massachusetts",
            StateCode::MD => "Maryland",
            StateCode::ME => "Maine",
            StateCode::MI => "Michigan",
            StateCode::MN => "Minnesota",
            StateCode::MO => "Missouri",
            StateCode::MS => "Mississippi",
            StateCode::MT => "Montana",
            StateCode::NC => "North Carolina",
            StateCode::ND => "North Dakota",
            StateCode::NE => "Nebraska",
            StateCode::NH => "New Hampshire",
            StateCode::NJ => "New Jersey",
            StateCode::NM => "New Mexico",
            StateCode::NV => "Nevada",
            StateCode::NY => "New York",
            StateCode::OH => "Ohio",
            StateCode::OK => "Oklahoma",
            StateCode::OR => "Oregon",
            StateCode::PA => "Pennsylvania",
            StateCode::RI => "Rhode Island",
            StateCode::SC => "South Carolina",
            StateCode::SD => "South Dakota",
            StateCode::TN => "Tennessee",
            StateCode::TX => "Texas",
            StateCode::UT => "Utah",
            StateCode::VA => "Virginia",
            StateCode::VT => "Vermont",
            StateCode::WA => "Washington",
            StateCode::WI => "Wisconsin",
            StateCode::WV => "West Virginia",
            StateCode::WY => "Wyoming",
        }
    }

    /// Poverty guideline parameters for this state.
    pub fn poverty_guideline(&self) -> PovertyGuideline {
        PovertyGuideline::for_state(*self)
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn all_has_fifty_distinct_codes() {
        let unique: HashSet<_> = StateCode::ALL.iter().collect();

        assert_eq!(StateCode::ALL.len(), 50);
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn all_is_sorted_lexicographically() {
        for pair in StateCode::ALL.windows(2) {
            assert!(
                pair[0].as_str() < pair[1].as_str(),
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn every_code_has_a_name() {
        for state in StateCode::ALL {
            assert!(!state.name().is_empty());
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(StateCode::parse("HI"), Some(StateCode::HI));
        assert_eq!(StateCode::parse("hi"), Some(StateCode::HI));
        assert_eq!(StateCode::parse(" tx "), Some(StateCode::TX));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(StateCode::parse("ZZ"), None);
        assert_eq!(StateCode::parse("DC"), None);
        assert_eq!(StateCode::parse(""), None);
    }

    #[test]
    fn parse_round_trips_every_code() {
        for state in StateCode::ALL {
            assert_eq!(StateCode::parse(state.as_str()), Some(state));
        }
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(StateCode::AK.to_string(), "AK");
        assert_eq!(StateCode::WY.to_string(), "WY");
    }

    #[test]
    fn names_for_special_guideline_states() {
        assert_eq!(StateCode::HI.name(), "Hawaii");
        assert_eq!(StateCode::AK.name(), "Alaska");
    }
}
