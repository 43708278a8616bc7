//! Input validation for addresses and roster filters, plus state-name lookup.

use polarmetrics_api::types::Chamber;

use crate::error::LocalityError;

pub const MIN_ADDRESS_LENGTH: usize = 3;
pub const MAX_ADDRESS_LENGTH: usize = 200;

/// Highest district number in any state delegation (California has 52).
pub const MAX_DISTRICT: u32 = 60;

pub const VALID_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "AS", "GU", "MP", "PR", "VI",
];

/// Full names as Congress.gov spells them on member records.
pub const STATE_NAMES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("DC", "District of Columbia"),
    ("AS", "American Samoa"),
    ("GU", "Guam"),
    ("MP", "Northern Mariana Islands"),
    ("PR", "Puerto Rico"),
    ("VI", "Virgin Islands"),
];

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, LocalityError> {
    if input.len() > max_len {
        return Err(LocalityError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(LocalityError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a free-text address: strip control chars, trim, enforce length bounds.
pub fn validate_address(input: &str) -> Result<String, LocalityError> {
    let sanitized = sanitize_text(input, MAX_ADDRESS_LENGTH)?;
    if sanitized.chars().count() < MIN_ADDRESS_LENGTH {
        return Err(LocalityError::InvalidInput(format!(
            "address must be at least {} characters long",
            MIN_ADDRESS_LENGTH
        )));
    }
    Ok(sanitized)
}

/// Validate a US state code or full state name; returns the upper-case code.
pub fn validate_state(input: &str) -> Result<String, LocalityError> {
    state_code(input).ok_or_else(|| {
        LocalityError::InvalidInput(format!(
            "unknown state '{}'. Use a two-letter code (e.g. TX) or a full name (e.g. Texas)",
            input
        ))
    })
}

/// Map a two-letter code (any case) or a full state name to the upper-case code.
pub fn state_code(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let upper = trimmed.to_uppercase();
    if VALID_STATES.contains(&upper.as_str()) {
        return Some(upper);
    }
    STATE_NAMES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
        .map(|(code, _)| code.to_string())
}

/// Validate a district number. 0 is the at-large seat.
pub fn validate_district(district: u32) -> Result<u32, LocalityError> {
    if district > MAX_DISTRICT {
        return Err(LocalityError::InvalidInput(format!(
            "district {} is out of range (0-{})",
            district, MAX_DISTRICT
        )));
    }
    Ok(district)
}

/// Validate a chamber string: case-insensitive, supports shorthand h/s.
pub fn validate_chamber(input: &str) -> Result<Chamber, LocalityError> {
    input.parse::<Chamber>().map_err(|_| {
        LocalityError::InvalidInput(format!(
            "unknown chamber '{}'. Valid values: house (h), senate (s)",
            input
        ))
    })
}

/// Validate a bioguide identifier: one upper-case letter followed by six digits.
pub fn validate_bioguide_id(input: &str) -> Result<String, LocalityError> {
    let upper = input.trim().to_uppercase();
    let mut chars = upper.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && upper.len() == 7
        && chars.all(|c| c.is_ascii_digit());
    if well_formed {
        Ok(upper)
    } else {
        Err(LocalityError::InvalidInput(format!(
            "invalid bioguide id '{}'. Expected a letter followed by six digits (e.g. R000614)",
            input
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Address validation --

    #[test]
    fn address_valid() {
        assert_eq!(
            validate_address("  1600 Pennsylvania Avenue NW, Washington DC ").unwrap(),
            "1600 Pennsylvania Avenue NW, Washington DC"
        );
    }

    #[test]
    fn address_strips_control_chars() {
        assert_eq!(validate_address("Austin\tTX\n78701").unwrap(), "AustinTX78701");
    }

    #[test]
    fn address_too_short() {
        assert!(validate_address("TX").is_err());
        assert!(validate_address("  a b ").is_ok());
    }

    #[test]
    fn address_empty() {
        assert!(validate_address("").is_err());
        assert!(validate_address("\n\t").is_err());
    }

    #[test]
    fn address_too_long() {
        assert!(validate_address(&"a".repeat(MAX_ADDRESS_LENGTH + 1)).is_err());
        assert!(validate_address(&"a".repeat(MAX_ADDRESS_LENGTH)).is_ok());
    }

    // -- State validation --

    #[test]
    fn state_valid_uppercase() {
        assert_eq!(validate_state("TX").unwrap(), "TX");
    }

    #[test]
    fn state_valid_lowercase() {
        assert_eq!(validate_state("tx").unwrap(), "TX");
    }

    #[test]
    fn state_full_name() {
        assert_eq!(validate_state("Texas").unwrap(), "TX");
        assert_eq!(validate_state("district of columbia").unwrap(), "DC");
        assert_eq!(validate_state(" New York ").unwrap(), "NY");
    }

    #[test]
    fn state_invalid() {
        assert!(validate_state("XX").is_err());
        assert!(validate_state("").is_err());
        assert!(validate_state("Texass").is_err());
    }

    #[test]
    fn state_names_cover_every_code() {
        for code in VALID_STATES {
            assert!(
                STATE_NAMES.iter().any(|(c, _)| c == code),
                "missing name for {}",
                code
            );
        }
    }

    // -- District validation --

    #[test]
    fn district_bounds() {
        assert_eq!(validate_district(0).unwrap(), 0);
        assert_eq!(validate_district(52).unwrap(), 52);
        assert!(validate_district(MAX_DISTRICT + 1).is_err());
    }

    // -- Chamber validation --

    #[test]
    fn chamber_valid() {
        assert_eq!(validate_chamber("House").unwrap(), Chamber::House);
        assert_eq!(validate_chamber("s").unwrap(), Chamber::Senate);
    }

    #[test]
    fn chamber_invalid() {
        let err = validate_chamber("assembly").unwrap_err();
        assert!(err.to_string().contains("unknown chamber"));
    }

    // -- Bioguide validation --

    #[test]
    fn bioguide_valid() {
        assert_eq!(validate_bioguide_id("r000614").unwrap(), "R000614");
    }

    #[test]
    fn bioguide_invalid() {
        assert!(validate_bioguide_id("R00061").is_err());
        assert!(validate_bioguide_id("0000614").is_err());
        assert!(validate_bioguide_id("RR00614").is_err());
        assert!(validate_bioguide_id("").is_err());
    }
}
