//! DTOs for content-management pages.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_required;

/// Request body for creating a CMS page.
///
/// The slug is expected to be unique; uniqueness is checked by the
/// persistence layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CmsPageCreateDto {
    #[validate(custom(function = "validate_required"))]
    pub page_title: String,

    #[validate(custom(function = "validate_required"))]
    pub page_slug: String,

    #[validate(custom(function = "validate_required"))]
    pub page_content: String,

    pub author_id: i64,
}
