//! Account and session DTOs

use serde::Deserialize;
use validator::Validate;

/// POST /api/v1/users/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginBody {
    pub username: Option<String>,
    pub email: Option<String>,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// POST /api/v1/users/refreshAccessToken (cookie fallback in the body)
#[derive(Debug, Deserialize, Default)]
pub struct RefreshBody {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// POST /api/v1/users/changeCurrentPassword
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordBody {
    #[serde(rename = "currentPassword")]
    #[validate(length(min = 1, message = "currentPassword is required"))]
    pub current_password: String,

    #[serde(rename = "newPassword")]
    #[validate(length(min = 1, message = "newPassword is required"))]
    pub new_password: String,
}

/// PATCH /api/v1/users/changeFullnamePhoneNumber
#[derive(Debug, Deserialize)]
pub struct ChangeProfileBody {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,

    #[serde(rename = "phoneNumber")]
    pub phone: Option<String>,
}
