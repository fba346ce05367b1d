use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::parsers::EventCodeValidator;
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::services::forecast::ForecastService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        if self.config.rating_service.base_url.is_none() {
            info!("RATING_SERVICE_URL not set; predictions will run without rating data");
        }

        let state = Arc::new(AppState {
            forecast: ForecastService::new(self.config.clone())?,
            event_codes: EventCodeValidator::new()?,
        });

        let app = create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
