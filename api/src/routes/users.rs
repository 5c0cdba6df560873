//! Account and session routes under /api/v1/users

use actix_multipart::Multipart;
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::Cookie;
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use se_core::domain::entities::token::TokenPair;
use se_core::repositories::{
    BookingRepository, HotelRepository, ReviewRepository, UserRepository,
};
use se_core::services::auth::{LoginRequest, RegisterRequest};
use se_core::services::{CheckoutProvider, MediaStorage};
use se_shared::types::ApiResponse;

use crate::dto::auth::{ChangePasswordBody, ChangeProfileBody, LoginBody, RefreshBody};
use crate::dto::validate_body;
use crate::handlers::upload::parse_form;
use crate::handlers::ApiError;
use crate::middleware::auth::{AuthContext, ACCESS_TOKEN_COOKIE};
use crate::state::AppState;

/// Name of the cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(true)
        .finish()
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .max_age(CookieDuration::ZERO)
        .finish()
}

/// Attaches both session cookies to a response under construction.
fn with_session_cookies(
    mut builder: actix_web::HttpResponseBuilder,
    pair: &TokenPair,
) -> actix_web::HttpResponseBuilder {
    builder.cookie(session_cookie(ACCESS_TOKEN_COOKIE, pair.access_token.clone()));
    builder.cookie(session_cookie(
        REFRESH_TOKEN_COOKIE,
        pair.refresh_token.clone(),
    ));
    builder
}

/// POST /api/v1/users/register (multipart)
pub async fn register<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let mut form = parse_form(payload).await?;

    let request = RegisterRequest {
        username: form.require_field("username")?,
        email: form.require_field("email")?,
        full_name: form.require_field("fullName")?,
        phone: form.require_field("phoneNumber")?,
        password: form.require_field("password")?,
        profile_picture: form.require_file("profilePicture")?,
    };

    let user = state.auth.register(request).await?;
    Ok(HttpResponse::Created().json(ApiResponse::created(user, "User registered successfully")))
}

/// POST /api/v1/users/login
pub async fn login<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    body: web::Json<LoginBody>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let body = body.into_inner();
    validate_body(&body)?;

    let (user, pair) = state
        .auth
        .login(LoginRequest {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;

    let data = serde_json::json!({
        "user": user,
        "accessToken": pair.access_token,
        "refreshToken": pair.refresh_token,
    });

    Ok(with_session_cookies(HttpResponse::Ok(), &pair)
        .json(ApiResponse::ok(data, "User logged in successfully")))
}

/// POST /api/v1/users/logout (auth)
pub async fn logout<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    ctx: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    state.auth.logout(ctx.user_id).await?;

    Ok(HttpResponse::Ok()
        .cookie(expired_cookie(ACCESS_TOKEN_COOKIE))
        .cookie(expired_cookie(REFRESH_TOKEN_COOKIE))
        .json(ApiResponse::ok(
            serde_json::json!({}),
            "User logged out successfully",
        )))
}

/// POST /api/v1/users/refreshAccessToken
///
/// Reads the refresh token from the cookie, falling back to the request
/// body. Rotation strands the presented token either way.
pub async fn refresh_access_token<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    req: HttpRequest,
    body: Option<web::Json<RefreshBody>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let presented = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| body.and_then(|b| b.into_inner().refresh_token))
        .ok_or_else(|| ApiError::unauthorized("Refresh token is required"))?;

    let (_user, pair) = state.tokens.refresh(&presented).await?;

    let data = serde_json::json!({
        "accessToken": pair.access_token,
        "refreshToken": pair.refresh_token,
    });

    Ok(with_session_cookies(HttpResponse::Ok(), &pair)
        .json(ApiResponse::ok(data, "Access token refreshed")))
}

/// GET /api/v1/users (auth, current user)
pub async fn current_user<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    ctx: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let user = state.auth.user_by_id(ctx.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user, "Current user fetched")))
}

/// GET /api/v1/users/{userId}
pub async fn user_by_id<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let user = state.auth.user_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user, "User fetched")))
}

/// GET /api/v1/users/getUserProfile/{username} (auth)
pub async fn user_profile<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    path: web::Path<String>,
    _ctx: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let user = state.auth.profile_by_username(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user, "User profile fetched")))
}

/// PATCH /api/v1/users/changeCurrentPassword (auth)
pub async fn change_password<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    ctx: AuthContext,
    body: web::Json<ChangePasswordBody>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let body = body.into_inner();
    validate_body(&body)?;

    let user = state
        .auth
        .change_password(ctx.user_id, &body.current_password, &body.new_password)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user, "Password changed successfully")))
}

/// PATCH /api/v1/users/changeFullnamePhoneNumber (auth)
pub async fn change_profile<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    ctx: AuthContext,
    body: web::Json<ChangeProfileBody>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let body = body.into_inner();
    let user = state
        .auth
        .change_profile(ctx.user_id, body.full_name, body.phone)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user, "Profile updated successfully")))
}

/// PATCH /api/v1/users/changeProfilePicture (auth, multipart)
pub async fn change_picture<U, H, B, R, M, P>(
    state: web::Data<AppState<U, H, B, R, M, P>>,
    ctx: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
    R: ReviewRepository + 'static,
    M: MediaStorage + 'static,
    P: CheckoutProvider + 'static,
{
    let mut form = parse_form(payload).await?;
    let upload = form.require_file("profilePicture")?;

    let user = state.auth.change_picture(ctx.user_id, upload).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(user, "Profile picture updated successfully")))
}
