//! DTOs for doctor reviews.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;
pub const RATING_RANGE_MESSAGE: &str = "Rating must be between 1 and 5.";

/// Review submitted for a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDoctorDto {
    pub doctor_id: i64,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5."))]
    pub rating: i32,

    #[serde(default)]
    pub comment: Option<String>,
}

/// Edit of an existing review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewDto {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5."))]
    pub rating: i32,

    #[serde(default)]
    pub comment: Option<String>,
}
