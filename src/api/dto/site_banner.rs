//! DTOs for site banners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::{UploadedFile, rule_error, validate_image_file, validate_required};

pub const BANNER_DATE_RANGE_CODE: &str = "invalid_date_range";
pub const BANNER_DATE_RANGE_MESSAGE: &str = "Start date must not be after end date.";

/// Request body for creating a site banner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_banner_schedule"))]
pub struct SiteBannerCreateDto {
    #[validate(custom(function = "validate_required"))]
    pub banner_title: String,

    #[validate(custom(function = "validate_required"))]
    pub banner_image_url: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

fn validate_banner_schedule(dto: &SiteBannerCreateDto) -> Result<(), ValidationError> {
    if dto.start_date > dto.end_date {
        return Err(rule_error(BANNER_DATE_RANGE_CODE, BANNER_DATE_RANGE_MESSAGE));
    }
    Ok(())
}

/// Multipart upload of a banner image, assembled by the upload handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct BannerImageUploadDto {
    #[validate(
        required(message = "Please select an image file to upload."),
        custom(function = "validate_image_file")
    )]
    pub image: Option<UploadedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldErrors, SCHEMA_ERRORS_KEY};
    use crate::validation::image::{INVALID_CONTENT_TYPE_CODE, MISSING_FILE_CODE};
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn banner(start: DateTime<Utc>, end: DateTime<Utc>) -> SiteBannerCreateDto {
        SiteBannerCreateDto {
            banner_title: "Flu shots".to_string(),
            banner_image_url: "/uploads/banners/flu.png".to_string(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_deserializes_rfc3339_dates() {
        let dto: SiteBannerCreateDto = serde_json::from_value(json!({
            "bannerTitle": "Flu shots",
            "bannerImageUrl": "/uploads/banners/flu.png",
            "startDate": "2026-01-01T00:00:00Z",
            "endDate": "2026-02-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            dto.start_date,
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let now = Utc::now();
        assert!(banner(now, now).validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let now = Utc::now();
        let errors = FieldErrors::from(
            banner(now, now - Duration::days(1)).validate().unwrap_err(),
        );

        assert_eq!(
            errors.get(SCHEMA_ERRORS_KEY).unwrap(),
            &[BANNER_DATE_RANGE_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_image_upload_required() {
        let raw = BannerImageUploadDto::default().validate().unwrap_err();
        let image_errors = &raw.field_errors()["image"];
        assert_eq!(image_errors.len(), 1);
        assert_eq!(image_errors[0].code, "required");

        let errors = FieldErrors::from(&raw);
        assert_eq!(
            errors.get("image").unwrap(),
            ["Please select an image file to upload."]
        );
    }

    #[test]
    fn test_image_upload_rules() {
        let pdf = BannerImageUploadDto {
            image: Some(UploadedFile::new("a.pdf", "application/pdf", b"%PDF".to_vec())),
        };
        let raw = pdf.validate().unwrap_err();
        let codes: Vec<_> = raw.field_errors()["image"]
            .iter()
            .map(|e| e.code.to_string())
            .collect();
        assert_eq!(codes, vec![INVALID_CONTENT_TYPE_CODE]);

        let empty = BannerImageUploadDto {
            image: Some(UploadedFile::new("a.png", "image/png", Vec::new())),
        };
        let raw = empty.validate().unwrap_err();
        assert_eq!(raw.field_errors()["image"][0].code, MISSING_FILE_CODE);

        let png = BannerImageUploadDto {
            image: Some(UploadedFile::new("a.png", "image/png", b"\x89PNG\r\n\x1a\n".to_vec())),
        };
        assert!(png.validate().is_ok());
    }
}
