//! UserProfile - the person whose cycle drives recommendations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::cycle::Preferences;
use crate::domain::foundation::ValidationError;

/// Format of cycle start dates accepted at registration.
pub const START_DATE_FORMAT: &str = "%d-%m-%Y";

/// Cycle and period lengths used when registration omits them.
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;

/// Normalized lookup key for a profile name.
pub fn registry_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Immutable profile of one user.
///
/// Validated on construction: the name is non-empty, both lengths are
/// positive and the period is shorter than the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    name: String,
    cycle_start: NaiveDate,
    cycle_length: u32,
    period_length: u32,
    preferences: Preferences,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        cycle_start: NaiveDate,
        cycle_length: u32,
        period_length: u32,
        preferences: Preferences,
    ) -> Result<Self, ValidationError> {
        let name: String = name.into();
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if cycle_length == 0 {
            return Err(ValidationError::out_of_range(
                "cycle_length",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if period_length == 0 {
            return Err(ValidationError::out_of_range(
                "period_length",
                1,
                i64::from(cycle_length) - 1,
                0,
            ));
        }
        if period_length >= cycle_length {
            return Err(ValidationError::inconsistent(
                "period_length",
                format!(
                    "period of {} days must be shorter than the {}-day cycle",
                    period_length, cycle_length
                ),
            ));
        }

        Ok(Self {
            name,
            cycle_start,
            cycle_length,
            period_length,
            preferences,
        })
    }

    /// Builds a profile from raw registration input.
    ///
    /// `cycle_start` is `DD-MM-YYYY`; `allergens` is comma-separated.
    pub fn from_registration(
        name: &str,
        cycle_start: &str,
        cycle_length: u32,
        period_length: u32,
        allergens: &str,
    ) -> Result<Self, ValidationError> {
        let start = parse_start_date(cycle_start)?;
        Self::new(
            name,
            start,
            cycle_length,
            period_length,
            Preferences::from_comma_separated(allergens),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cycle_start(&self) -> NaiveDate {
        self.cycle_start
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn period_length(&self) -> u32 {
        self.period_length
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Case-insensitive key the registry stores this profile under.
    pub fn registry_key(&self) -> String {
        registry_key(&self.name)
    }
}

/// Parses a `DD-MM-YYYY` start date.
pub fn parse_start_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), START_DATE_FORMAT).map_err(|e| {
        ValidationError::invalid_format(
            "cycle_start",
            format!("expected DD-MM-YYYY, got '{}' ({})", input.trim(), e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_profile_keeps_fields() {
        let prefs = Preferences::from_allergens(["Gluten"]);
        let profile = UserProfile::new(" MAÏTÉ ", date(2025, 3, 15), 27, 4, prefs).unwrap();

        assert_eq!(profile.name(), "MAÏTÉ");
        assert_eq!(profile.cycle_start(), date(2025, 3, 15));
        assert_eq!(profile.cycle_length(), 27);
        assert_eq!(profile.period_length(), 4);
        assert!(profile.preferences().contains("gluten"));
        assert_eq!(profile.registry_key(), "maïté");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = UserProfile::new("  ", date(2025, 3, 15), 28, 5, Preferences::empty())
            .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("name"));
    }

    #[test]
    fn zero_lengths_are_rejected() {
        let err =
            UserProfile::new("Ana", date(2025, 3, 18), 0, 5, Preferences::empty()).unwrap_err();
        assert_eq!(err.field(), "cycle_length");

        let err =
            UserProfile::new("Ana", date(2025, 3, 18), 28, 0, Preferences::empty()).unwrap_err();
        assert_eq!(err.field(), "period_length");
    }

    #[test]
    fn period_must_be_shorter_than_cycle() {
        let err =
            UserProfile::new("Ana", date(2025, 3, 18), 28, 28, Preferences::empty()).unwrap_err();
        assert!(matches!(err, ValidationError::Inconsistent { .. }));
        assert!(UserProfile::new("Ana", date(2025, 3, 18), 28, 27, Preferences::empty()).is_ok());
    }

    #[test]
    fn registration_parses_date_and_allergens() {
        let profile =
            UserProfile::from_registration("Margaux", "22-03-2025", 30, 7, "Dairy, eggs").unwrap();
        assert_eq!(profile.cycle_start(), date(2025, 3, 22));
        assert!(profile.preferences().contains("dairy"));
        assert!(profile.preferences().contains("EGGS"));
    }

    #[test]
    fn registration_rejects_bad_dates() {
        for input in ["2025-03-22", "31-02-2025", "yesterday", ""] {
            let err = UserProfile::from_registration("Ana", input, 28, 5, "").unwrap_err();
            assert_eq!(err.field(), "cycle_start", "input {:?}", input);
        }
    }

    #[test]
    fn registry_key_is_trimmed_lowercase() {
        assert_eq!(registry_key("  BAYA "), "baya");
    }
}
