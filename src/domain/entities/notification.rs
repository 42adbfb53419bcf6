//! Transactional email content.

/// A transactional email sent to a single account holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Code confirming ownership of an email address.
    VerificationCode { code: String },
    /// Code authorising a password reset.
    PasswordResetCode { code: String },
    /// Initial password for an account created by staff.
    NewUserPassword { password: String },
}

impl Notification {
    /// Short identifier used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::VerificationCode { .. } => "verification_code",
            Notification::PasswordResetCode { .. } => "password_reset_code",
            Notification::NewUserPassword { .. } => "new_user_password",
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            Notification::VerificationCode { .. } => "Verify your email address",
            Notification::PasswordResetCode { .. } => "Your password reset code",
            Notification::NewUserPassword { .. } => "Your new account",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notification::VerificationCode { code } => format!(
                "Your email verification code is {code}.\n\n\
                 If you did not create an account, you can ignore this email."
            ),
            Notification::PasswordResetCode { code } => format!(
                "Your password reset code is {code}.\n\n\
                 If you did not request a password reset, you can ignore this email."
            ),
            Notification::NewUserPassword { password } => format!(
                "An account has been created for you.\n\n\
                 Temporary password: {password}\n\n\
                 Please sign in and change it right away."
            ),
        }
    }
}
