pub mod dto {
    pub mod employee;
    pub mod feedback;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export DTOs
pub use dto::{
    employee::EmployeeSummaryDto,
    feedback::{FeedbackRequestCountsDto, FeedbackRequestDto, FeedbackResponseDto},
};
