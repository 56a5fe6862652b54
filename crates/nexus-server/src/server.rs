//! Route handlers, shared state and the HTTP server loop.
//!
//! A missing hospital and a failed triage run are reported in a 200 JSON
//! body rather than through the status code.

use crate::config::ServerConfig;
use crate::io_struct::{
    ChatRequest, ErrorBody, HospitalList, NearbyQuery, ServiceStatus, HOSPITAL_NOT_FOUND,
};
use actix_cors::Cors;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer};
use log::{debug, error, info};
use nexus_core::{Dataset, HospitalFilter, NexusResult, TriageFallback, TriagePipeline};

/// Shared, read-only state injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn from_config(config: &ServerConfig) -> NexusResult<Self> {
        let dataset = Dataset::locate_and_load(&config.data_path)?;
        Ok(Self::new(dataset))
    }
}

#[get("/")]
pub async fn root(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ServiceStatus::running(app_state.dataset.len()))
}

#[get("/api/hospitals")]
pub async fn list_hospitals(app_state: web::Data<AppState>) -> HttpResponse {
    let hospitals = app_state.dataset.hospitals().iter().collect::<Vec<_>>();
    HttpResponse::Ok().json(HospitalList::from(hospitals))
}

#[get("/api/hospitals/nearby")]
pub async fn nearby_hospitals(
    query: web::Query<NearbyQuery>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let nearby = app_state
        .dataset
        .nearby(query.lat, query.lng, query.radius);
    HttpResponse::Ok().json(HospitalList::from(nearby))
}

#[get("/api/hospitals/filter")]
pub async fn filter_hospitals(
    query: web::Query<HospitalFilter>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let filtered = app_state.dataset.filter(&query);
    HttpResponse::Ok().json(HospitalList::from(filtered))
}

#[get("/api/hospitals/{id}")]
pub async fn get_hospital(path: web::Path<i64>, app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.dataset.get(path.into_inner()) {
        Some(hospital) => HttpResponse::Ok().json(hospital),
        None => HttpResponse::Ok().json(ErrorBody {
            error: HOSPITAL_NOT_FOUND,
        }),
    }
}

#[post("/api/chat")]
pub async fn chat(req: web::Json<ChatRequest>, app_state: web::Data<AppState>) -> HttpResponse {
    let pipeline = TriagePipeline::new(&app_state.dataset);
    match pipeline.respond(&req.message) {
        Ok(report) => {
            debug!(
                "Chat triaged as {} -> {}",
                report.urgency,
                report
                    .hospital
                    .get("name")
                    .and_then(|n| n.as_str())
                    .unwrap_or("no match")
            );
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            error!("Triage pipeline failed: {}", e);
            HttpResponse::Ok().json(TriageFallback::from(e))
        }
    }
}

#[get("/api/stats")]
pub async fn stats(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(app_state.dataset.stats())
}

/// How long browsers may cache a preflight answer.
const CORS_MAX_AGE_SECS: usize = 3600;

/// CORS policy for browser frontends.
///
/// Any origin, method and header is allowed and credentials are permitted;
/// the request origin is echoed back since `*` is invalid with credentials.
/// Preflight requests are answered by the middleware before routing.
pub fn cors() -> Cors {
    Cors::permissive().max_age(CORS_MAX_AGE_SECS)
}

/// Register every route. The fixed `nearby` and `filter` paths must come
/// before `{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(list_hospitals)
        .service(nearby_hospitals)
        .service(filter_hospitals)
        .service(get_hospital)
        .service(chat)
        .service(stats);
}

/// Bind to the configured address and serve until shutdown.
pub async fn startup(config: ServerConfig, app_state: AppState) -> std::io::Result<()> {
    let app_state = web::Data::new(app_state);

    info!(
        "Starting server at {}:{} with {} hospitals",
        config.host,
        config.port,
        app_state.dataset.len()
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors())
            .app_data(app_state.clone())
            .configure(configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host, config.port))?.run().await
}
