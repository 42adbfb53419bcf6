//! DTOs for content categories.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_required;

/// Request body for updating a content category.
///
/// # `parent_id` semantics
///
/// - **Absent** → keep the current parent
/// - **`null`** → move the category to the top level
/// - **Id** → re-parent; existence is checked against the store, not here
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentCategoryUpdateDto {
    #[validate(custom(function = "validate_required"))]
    pub name: String,

    #[validate(custom(function = "validate_required"))]
    pub slug: String,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub parent_id: Option<Option<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parent_is_optional() {
        let dto: ContentCategoryUpdateDto =
            serde_json::from_value(json!({"name": "News", "slug": "news"})).unwrap();

        assert_eq!(dto.parent_id, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_null_parent_detaches() {
        let dto: ContentCategoryUpdateDto =
            serde_json::from_value(json!({"name": "News", "slug": "news", "parentId": null}))
                .unwrap();
        assert_eq!(dto.parent_id, Some(None));
    }

    #[test]
    fn test_parent_id_set() {
        let dto: ContentCategoryUpdateDto =
            serde_json::from_value(json!({"name": "News", "slug": "news", "parentId": 4}))
                .unwrap();
        assert_eq!(dto.parent_id, Some(Some(4)));
    }

    #[test]
    fn test_absent_parent_not_serialized() {
        let dto = ContentCategoryUpdateDto {
            name: "News".to_string(),
            slug: "news".to_string(),
            parent_id: None,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"name": "News", "slug": "news"})
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let dto = ContentCategoryUpdateDto {
            name: "".to_string(),
            slug: "news".to_string(),
            parent_id: Some(Some(3)),
        };
        assert!(dto.validate().is_err());
    }
}
