use crate::dto::employee::EmployeeSummaryDto;
use crate::error::SharedError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Aggregate counters the backend attaches to a feedback request.
///
/// Serialized as the `_count` block. The whole block is optional on the
/// wire; its absence means "counts unavailable", not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequestCountsDto {
    pub responses: u32,
    pub page_views: u32,
    pub unique_viewers: u32,
}

/// One reviewer's submitted answer to a feedback request.
///
/// Created by the backend on submission and immutable afterwards; this
/// crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FeedbackResponseDto {
    #[validate(length(min = 1, message = "Response id is required"))]
    pub id: String,

    /// Must reference an existing feedback request.
    #[validate(length(min = 1, message = "Parent request id is required"))]
    pub feedback_request_id: String,

    /// Free-form relationship label, e.g. "peer" or "manager".
    pub relationship: String,

    // Nullable free text. `null` on the wire stays `null`; these are not
    // collapsed to empty strings or omitted keys.
    #[serde(default)]
    pub strengths: Option<String>,
    #[serde(default)]
    pub areas_for_improvement: Option<String>,

    /// String-encoded submission timestamp, passed through verbatim.
    pub submitted_at: String,

    /// Free-form status; the value set is owned by the backend.
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSummaryDto>,
}

/// A solicitation for feedback about a target employee within a review
/// cycle. Owns zero or more responses via `feedback_request_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FeedbackRequestDto {
    #[validate(length(min = 1, message = "Request id is required"))]
    pub id: String,

    #[validate(length(min = 1, message = "Employee id is required"))]
    pub employee_id: String,

    #[validate(length(min = 1, message = "Review cycle id is required"))]
    pub review_cycle_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_link: Option<String>,

    /// Free-form status; the value set is owned by the backend.
    pub status: String,

    /// Expected number of responses. Not an enforced cap.
    pub target_responses: u32,

    /// String-encoded timestamps, passed through verbatim.
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub last_analyzed_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSummaryDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<FeedbackResponseDto>>,

    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<FeedbackRequestCountsDto>,
}

impl FeedbackResponseDto {
    /// Parse and validate a single response payload from the backend.
    pub fn from_json(payload: &str) -> crate::Result<Self> {
        let dto: Self =
            serde_json::from_str(payload).map_err(|e| SharedError::Conversion(e.to_string()))?;
        dto.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))?;
        Ok(dto)
    }
}

impl FeedbackRequestDto {
    /// Parse and validate a request payload from the backend.
    pub fn from_json(payload: &str) -> crate::Result<Self> {
        let dto: Self =
            serde_json::from_str(payload).map_err(|e| SharedError::Conversion(e.to_string()))?;
        dto.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))?;
        Ok(dto)
    }

    /// Response count from the aggregate block, when the backend sent one.
    pub fn response_count(&self) -> Option<u32> {
        self.counts.as_ref().map(|c| c.responses)
    }
}
