//! DTOs for medical specializations.

use serde::{Deserialize, Serialize};

/// Full view of a specialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecializationDetailDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of doctors currently assigned; computed by the query.
    pub doctor_count: i64,
}

/// Row in the specialization list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecializationListDto {
    pub code: String,
    pub name: String,
    pub doctor_count: i64,
}

impl From<&SpecializationDetailDto> for SpecializationListDto {
    fn from(detail: &SpecializationDetailDto) -> Self {
        Self {
            code: detail.code.clone(),
            name: detail.name.clone(),
            doctor_count: detail.doctor_count,
        }
    }
}
