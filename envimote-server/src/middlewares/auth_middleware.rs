use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::{Authorization, Header};

use crate::errors::ApiError;

#[derive(Clone)]
pub struct AuthState {
    pub username: String,
    pub password: String,
}

pub async fn basic_auth(
    State(state): State<AuthState>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let mut headers = req.headers().get_all(header::AUTHORIZATION).iter();

    let header: Authorization<Basic> =
        Authorization::decode(&mut headers).map_err(|_| ApiError::Unauthorized)?;

    if header.username() != state.username || header.password() != state.password {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}
