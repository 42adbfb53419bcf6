//! DTOs for medications.

use serde::{Deserialize, Serialize};

/// Medication as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDto {
    pub id: i64,
    pub name: String,
}

/// Lightweight search hit used by medication autocomplete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationSearchDto {
    pub id: i64,
    pub medication_name: String,
}

impl From<MedicationDto> for MedicationSearchDto {
    fn from(dto: MedicationDto) -> Self {
        Self {
            id: dto.id,
            medication_name: dto.name,
        }
    }
}
