use axum::{
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
    body::Body,
};
use tracing::warn;

use shared_models::error::AppError;
use shared_models::session::{Session, UserType};

use crate::session::SessionHandle;

// Any logged-in user; the session snapshot is added to request extensions
pub async fn require_login(
    State(session): State<SessionHandle>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let current = session.current().await;

    if !current.logged_in {
        warn!("Rejected {} {}: not logged in", request.method(), request.uri());
        return Err(AppError::Auth("Login required".to_string()));
    }

    request.extensions_mut().insert(current);
    Ok(next.run(request).await)
}

pub async fn require_patient(
    State(session): State<SessionHandle>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    require_user_type(session, UserType::Patient, request, next).await
}

pub async fn require_doctor(
    State(session): State<SessionHandle>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    require_user_type(session, UserType::Doctor, request, next).await
}

async fn require_user_type(
    session: SessionHandle,
    user_type: UserType,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let current = session.current().await;

    if !current.logged_in {
        warn!("Rejected {} {}: not logged in", request.method(), request.uri());
        return Err(AppError::Auth("Login required".to_string()));
    }

    if !current.is(user_type) {
        warn!("Rejected {} {}: requires {} session", request.method(), request.uri(), user_type);
        return Err(AppError::Forbidden(format!("Only a {} can perform this action", user_type)));
    }

    request.extensions_mut().insert(current);
    Ok(next.run(request).await)
}

// Function to extract the session from request extensions
pub fn extract_session<B>(request: &Request<B>) -> Result<Session, AppError> {
    request
        .extensions()
        .get::<Session>()
        .cloned()
        .ok_or_else(|| AppError::Auth("Session not found in request extensions".to_string()))
}
