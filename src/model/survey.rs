//! Supplier survey records.
//!
//! The survey screen tabs directly on [`SurveyStatus`] and shows a
//! response-progress bar per survey: responses received over
//! suppliers invited.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{BadgeVariant, StatusDisplay};
use crate::engine::percentage;
use crate::record::{Grouped, Queryable};
use crate::value::FieldValue;

/// Workflow state of a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    /// Being drafted, not yet sent.
    Draft,
    /// Sent, awaiting responses.
    Pending,
    /// All responses received.
    Completed,
    /// Rejected during review.
    Rejected,
}

impl SurveyStatus {
    /// All statuses in tab order.
    pub const DOMAIN: &'static [Self] =
        &[Self::Draft, Self::Pending, Self::Completed, Self::Rejected];

    /// Wire/status-key form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StatusDisplay for SurveyStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }

    // The survey screen renders every status as an outline badge and
    // differentiates by color class, which is the renderer's concern.
    fn badge(&self) -> BadgeVariant {
        BadgeVariant::Outline
    }
}

/// One supplier survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Opaque identifier.
    pub id: String,
    /// Survey title.
    pub title: String,
    /// Workflow state.
    pub status: SurveyStatus,
    /// Names of the invited suppliers.
    pub suppliers: Vec<String>,
    /// Response deadline; unset while drafting.
    pub deadline: Option<NaiveDate>,
    /// Date the survey was created.
    pub created_at: NaiveDate,
    /// Responses received so far.
    pub responses: u32,
    /// Number of suppliers invited.
    pub total_suppliers: u32,
}

impl Survey {
    /// Share of invited suppliers that have responded, as a
    /// percentage. Zero when nobody was invited.
    #[must_use]
    pub fn response_progress(&self) -> u8 {
        percentage(self.responses as usize, self.total_suppliers as usize)
    }
}

impl Queryable for Survey {
    fn record_type() -> &'static str {
        "Survey"
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "title" => Some(FieldValue::from(self.title.as_str())),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "suppliers" => Some(FieldValue::List(self.suppliers.clone())),
            "deadline" => Some(FieldValue::from(self.deadline)),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            "responses" => Some(FieldValue::Int(i64::from(self.responses))),
            "total_suppliers" => Some(FieldValue::Int(i64::from(self.total_suppliers))),
            _ => None,
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

impl Grouped for Survey {
    type Key = SurveyStatus;

    fn group_key(&self) -> &SurveyStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> Survey {
        Survey {
            id: "1".to_string(),
            title: "Raw Material Quality Assessment".to_string(),
            status: SurveyStatus::Pending,
            suppliers: vec![
                "Supplier A".to_string(),
                "Supplier B".to_string(),
                "Supplier C".to_string(),
            ],
            deadline: NaiveDate::from_ymd_opt(2023, 6, 15),
            created_at: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            responses: 1,
            total_suppliers: 3,
        }
    }

    #[test]
    fn test_response_progress() {
        assert_eq!(survey().response_progress(), 33);

        let done = Survey {
            responses: 2,
            total_suppliers: 2,
            status: SurveyStatus::Completed,
            ..survey()
        };
        assert_eq!(done.response_progress(), 100);

        let nobody_invited = Survey {
            responses: 0,
            total_suppliers: 0,
            ..survey()
        };
        assert_eq!(nobody_invited.response_progress(), 0);
    }

    #[test]
    fn test_unset_deadline_reads_as_null() {
        let draft = Survey {
            status: SurveyStatus::Draft,
            deadline: None,
            ..survey()
        };
        assert_eq!(draft.field("deadline"), Some(FieldValue::Null));
        assert!(survey().field("deadline").unwrap().is_date());
    }

    #[test]
    fn test_invited_suppliers_are_multi_valued() {
        let field = survey().field("suppliers").unwrap();
        assert!(field.matches(&FieldValue::from("Supplier B")));
        assert!(!field.matches(&FieldValue::from("Supplier F")));
    }

    #[test]
    fn test_status_serde_and_badges() {
        let json = serde_json::to_string(&SurveyStatus::Rejected).unwrap();
        assert_eq!(json, "\"rejected\"");

        for status in SurveyStatus::DOMAIN {
            assert_eq!(status.badge(), BadgeVariant::Outline);
        }
        assert_eq!(SurveyStatus::Completed.label(), "Completed");
    }

    #[test]
    fn test_survey_serialization_round_trip() {
        let survey = survey();
        let json = serde_json::to_string(&survey).unwrap();
        let back: Survey = serde_json::from_str(&json).unwrap();
        assert_eq!(survey, back);
    }
}
