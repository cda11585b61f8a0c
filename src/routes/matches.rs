use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{channel_id, ErrorKind, MatchError, MatchService};
use crate::models::{
    AcceptMatchResponse, CandidatesResponse, CreateMatchRequest, ErrorResponse, HealthResponse,
    MatchId, UpdateStatusRequest, UserId,
};
use crate::services::PostgresStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchService,
    pub postgres: Option<Arc<PostgresStore>>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(list_matches))
        .route("/matches", web::post().to(create_match))
        .route("/matches/find/{user_id}", web::get().to(find_matches))
        .route("/matches/notifications/{user_id}", web::get().to(notifications))
        .route("/matches/{match_id}/status", web::put().to(update_status))
        .route("/matches/{match_id}/accept", web::post().to(accept_match))
        .route("/matches/{match_id}/reject", web::post().to(reject_match));
}

/// Render a lifecycle error with the status code of its kind
fn error_response(err: &MatchError) -> HttpResponse {
    let (status, error) = match err.kind() {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        ErrorKind::InvalidState => (StatusCode::CONFLICT, "Invalid match state"),
        ErrorKind::CollaboratorFailure => (StatusCode::BAD_GATEWAY, "Collaborator failure"),
    };

    if err.kind() == ErrorKind::CollaboratorFailure {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::info!("Request rejected: {}", err);
    }

    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = match &state.postgres {
        Some(pg) => pg.health_check().await.unwrap_or(false),
        None => true,
    };

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List all matches
///
/// GET /api/v1/matches
async fn list_matches(state: web::Data<AppState>) -> impl Responder {
    match state.service.all_matches().await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => error_response(&e),
    }
}

/// Create match endpoint
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "participantA": 7,
///   "participantB": 3
/// }
/// ```
async fn create_match(
    state: web::Data<AppState>,
    req: web::Json<CreateMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.service.create(req.participant_a, req.participant_b).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => error_response(&e),
    }
}

/// Candidate discovery endpoint
///
/// GET /api/v1/matches/find/{user_id}
async fn find_matches(state: web::Data<AppState>, path: web::Path<UserId>) -> impl Responder {
    let user_id = path.into_inner();
    tracing::info!("Finding matches for user: {}", user_id);

    match state.service.find_matches(user_id).await {
        Ok(candidates) => HttpResponse::Ok().json(CandidatesResponse {
            user_id,
            total_results: candidates.len(),
            candidates,
        }),
        Err(e) => error_response(&e),
    }
}

/// Incoming match requests endpoint
///
/// GET /api/v1/matches/notifications/{user_id}
async fn notifications(state: web::Data<AppState>, path: web::Path<UserId>) -> impl Responder {
    let user_id = path.into_inner();

    match state.service.notifications_for(user_id).await {
        Ok(candidates) => HttpResponse::Ok().json(CandidatesResponse {
            user_id,
            total_results: candidates.len(),
            candidates,
        }),
        Err(e) => error_response(&e),
    }
}

/// Unguarded status overwrite endpoint
///
/// PUT /api/v1/matches/{match_id}/status
///
/// Request body:
/// ```json
/// { "status": "pending|accepted|rejected" }
/// ```
async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<MatchId>,
    req: web::Json<UpdateStatusRequest>,
) -> impl Responder {
    match state.service.update_status(path.into_inner(), req.status).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => error_response(&e),
    }
}

/// Accept match endpoint
///
/// POST /api/v1/matches/{match_id}/accept
async fn accept_match(state: web::Data<AppState>, path: web::Path<MatchId>) -> impl Responder {
    match state.service.accept(path.into_inner()).await {
        Ok(accepted) => HttpResponse::Ok().json(AcceptMatchResponse {
            channel_id: channel_id(accepted.participant_a, accepted.participant_b),
            matched: accepted,
        }),
        Err(e) => error_response(&e),
    }
}

/// Reject match endpoint
///
/// POST /api/v1/matches/{match_id}/reject
async fn reject_match(state: web::Data<AppState>, path: web::Path<MatchId>) -> impl Responder {
    match state.service.reject(path.into_inner()).await {
        Ok(rejected) => HttpResponse::Ok().json(rejected),
        Err(e) => error_response(&e),
    }
}
