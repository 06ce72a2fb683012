//! HTTP DTOs for profile and recommendation endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::ProfileInput;
use crate::config::CycleConfig;
use crate::domain::foundation::DomainError;
use crate::domain::recommendation::{RecommendationResult, NO_SAFE_FOODS};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Allergens as either `"dairy, gluten"` or `["dairy", "gluten"]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AllergenList {
    Text(String),
    List(Vec<String>),
}

impl Default for AllergenList {
    fn default() -> Self {
        AllergenList::Text(String::new())
    }
}

impl AllergenList {
    fn into_comma_separated(self) -> String {
        match self {
            AllergenList::Text(text) => text,
            AllergenList::List(items) => items.join(","),
        }
    }
}

/// Profile fields submitted by the form.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    /// `DD-MM-YYYY`
    pub cycle_start: String,
    pub cycle_length: Option<u32>,
    pub period_length: Option<u32>,
    #[serde(default)]
    pub allergens: AllergenList,
}

impl ProfileRequest {
    /// Fills in missing lengths from the configured defaults.
    pub fn into_input(self, defaults: &CycleConfig) -> ProfileInput {
        ProfileInput {
            name: self.name,
            cycle_start: self.cycle_start,
            cycle_length: self.cycle_length.unwrap_or(defaults.default_cycle_length),
            period_length: self.period_length.unwrap_or(defaults.default_period_length),
            allergens: self.allergens.into_comma_separated(),
        }
    }
}

/// Request to register a profile.
pub type RegisterProfileRequest = ProfileRequest;

/// Request for one-off recommendations without registering.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeRecommendationsRequest {
    #[serde(flatten)]
    pub profile: ProfileRequest,
    /// Day to resolve the phase for (`YYYY-MM-DD`); today if absent.
    pub reference_date: Option<NaiveDate>,
}

/// Query string for recommendation lookups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationParams {
    /// Day to resolve the phase for (`YYYY-MM-DD`); today if absent.
    pub date: Option<NaiveDate>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for profile command operations.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCommandResponse {
    pub name: String,
    pub replaced: bool,
    pub message: String,
}

/// Registered profile names.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<String>,
}

/// One category of recommended foods.
#[derive(Debug, Clone, Serialize)]
pub struct FoodGroupResponse {
    pub category: String,
    pub foods: Vec<String>,
    /// Comma-joined foods, or "No safe foods" when the category is empty.
    pub display: String,
}

/// Recommendations for UI display.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    /// `determined` or `undetermined`
    pub status: String,
    pub profile_name: String,
    pub cycle_day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    pub groups: Vec<FoodGroupResponse>,
    pub avoid: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RecommendationResult> for RecommendationResponse {
    fn from(result: RecommendationResult) -> Self {
        match result {
            RecommendationResult::Determined(rec) => Self {
                status: "determined".to_string(),
                profile_name: rec.profile_name,
                cycle_day: rec.cycle_day,
                phase_name: Some(rec.phase_name),
                info: rec.info,
                groups: rec
                    .groups
                    .iter()
                    .map(|g| FoodGroupResponse {
                        category: g.category.clone(),
                        foods: g.foods.clone(),
                        display: if g.foods.is_empty() {
                            NO_SAFE_FOODS.to_string()
                        } else {
                            g.foods.join(", ")
                        },
                    })
                    .collect(),
                avoid: rec.avoid,
                message: None,
            },
            RecommendationResult::Undetermined {
                profile_name,
                cycle_day,
            } => Self {
                status: "undetermined".to_string(),
                profile_name,
                cycle_day,
                phase_name: None,
                info: None,
                groups: Vec::new(),
                avoid: Vec::new(),
                message: Some(
                    "Could not determine your current phase. Please check your inputs."
                        .to_string(),
                ),
            },
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::FoodGroups;
    use crate::domain::recommendation::PhaseRecommendation;

    #[test]
    fn profile_request_accepts_text_allergens_and_defaults_lengths() {
        let json = r#"{"name": "Ana", "cycle_start": "18-03-2025", "allergens": "Sugar, dairy"}"#;
        let req: ProfileRequest = serde_json::from_str(json).unwrap();
        let input = req.into_input(&CycleConfig::default());

        assert_eq!(input.cycle_length, 28);
        assert_eq!(input.period_length, 5);
        assert_eq!(input.allergens, "Sugar, dairy");
    }

    #[test]
    fn profile_request_accepts_allergen_list() {
        let json = r#"{"name": "Ana", "cycle_start": "18-03-2025", "cycle_length": 29,
                       "period_length": 6, "allergens": ["Sugar", "dairy"]}"#;
        let req: ProfileRequest = serde_json::from_str(json).unwrap();
        let input = req.into_input(&CycleConfig::default());

        assert_eq!(input.cycle_length, 29);
        assert_eq!(input.period_length, 6);
        assert_eq!(input.allergens, "Sugar,dairy");
    }

    #[test]
    fn profile_request_without_allergens() {
        let json = r#"{"name": "Ana", "cycle_start": "18-03-2025"}"#;
        let req: ProfileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.into_input(&CycleConfig::default()).allergens, "");
    }

    #[test]
    fn compute_request_flattens_profile_fields() {
        let json = r#"{"name": "Guest", "cycle_start": "01-04-2025", "cycle_length": 28,
                       "reference_date": "2025-04-20"}"#;
        let req: ComputeRecommendationsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.profile.name, "Guest");
        assert_eq!(req.reference_date, NaiveDate::from_ymd_opt(2025, 4, 20));
    }

    #[test]
    fn determined_response_renders_empty_groups() {
        let result = RecommendationResult::Determined(PhaseRecommendation {
            profile_name: "Ana".to_string(),
            cycle_day: 3,
            phase_name: "Menstrual Phase".to_string(),
            info: None,
            groups: FoodGroups::new()
                .with_group("Fruits", ["plums", "pears"])
                .with_group("Greens", Vec::<String>::new()),
            avoid: vec!["Caffeine".to_string()],
        });
        let response: RecommendationResponse = result.into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "determined");
        assert_eq!(json["groups"][0]["display"], "plums, pears");
        assert_eq!(json["groups"][1]["display"], "No safe foods");
        assert!(json.get("info").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn undetermined_response_has_message() {
        let result = RecommendationResult::Undetermined {
            profile_name: "Ana".to_string(),
            cycle_day: 30,
        };
        let response: RecommendationResponse = result.into();
        assert_eq!(response.status, "undetermined");
        assert!(response.phase_name.is_none());
        assert!(response.message.is_some());
    }

    #[test]
    fn error_response_from_domain_error_includes_details() {
        let error = DomainError::validation("cycle_start", "bad date");
        let response = ErrorResponse::from(&error);
        assert_eq!(response.code, "VALIDATION_FAILED");
        assert_eq!(response.details.unwrap()["field"], "cycle_start");
    }
}
