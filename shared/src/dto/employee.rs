use serde::{Deserialize, Serialize};
use validator::Validate;

/// Condensed view of an employee as embedded in feedback payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmployeeSummaryDto {
    #[validate(length(min = 1, message = "Employee id is required"))]
    pub id: String,
    pub name: String,
    pub role: String,
}
