//! Data Transfer Objects for API requests and responses.
//!
//! Every DTO is an independent wire shape for one use case; there is no
//! shared base. JSON field names are camelCase. Request DTOs derive
//! [`validator::Validate`] with the rules from [`crate::validation`];
//! construction never fails, only `validate()` rejects data.

pub mod auth;
pub mod chat;
pub mod cms_page;
pub mod content_category;
pub mod health;
pub mod medication;
pub mod review;
pub mod site_banner;
pub mod specialization;

pub use auth::{
    AcceptedResponse, ForgotPasswordRequestDto, LoginRequestDto, PatientDto, RegisterDto,
    RegistrationPayload, ResetPasswordRequestDto, VerificationCodeRequestDto,
};
pub use chat::{ChatMessageDto, ChatRequestDto, ChatResponseDto};
pub use cms_page::CmsPageCreateDto;
pub use content_category::ContentCategoryUpdateDto;
pub use medication::{MedicationDto, MedicationSearchDto};
pub use review::{ReviewDoctorDto, UpdateReviewDto};
pub use site_banner::{BannerImageUploadDto, SiteBannerCreateDto};
pub use specialization::{SpecializationDetailDto, SpecializationListDto};
