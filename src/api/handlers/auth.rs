//! Handlers for account notification endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{AcceptedResponse, ForgotPasswordRequestDto, VerificationCodeRequestDto};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Emails a password-reset code.
///
/// The code returned by [`AccountService`](crate::application::services::AccountService)
/// is dropped here: storing it for the later reset step belongs to the
/// persistence layer, which this service does not host. The response never
/// echoes it, so the code only reaches the mailbox.
///
/// # Endpoint
///
/// `POST /api/auth/forgot-password`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Errors
///
/// - 400 if the email is missing or malformed
/// - 502 if the email cannot be delivered
pub async fn forgot_password_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ForgotPasswordRequestDto>,
) -> Result<(StatusCode, Json<AcceptedResponse>), AppError> {
    state.account_service.request_password_reset(&payload).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            message: "If the address is registered, a reset code has been sent.".to_string(),
        }),
    ))
}

/// Emails an address-verification code.
///
/// As with [`forgot_password_handler`], the issued code is not stored or
/// returned; only the email carries it.
///
/// # Endpoint
///
/// `POST /api/auth/verification-code`
pub async fn verification_code_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VerificationCodeRequestDto>,
) -> Result<(StatusCode, Json<AcceptedResponse>), AppError> {
    state
        .account_service
        .request_verification_code(&payload)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            message: "A verification code has been sent.".to_string(),
        }),
    ))
}
