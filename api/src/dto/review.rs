//! Review DTOs

use serde::Deserialize;
use validator::Validate;

/// POST and PATCH bodies under /api/v1/reviews
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewBody {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,
}
