use std::{io, net::IpAddr, sync::Arc};

use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;

use self::template::{AskamaRenderer, TemplateRenderer};

mod error;
mod health;
pub mod hello;
mod not_found;
pub mod template;

#[derive(Clone)]
pub struct AppState {
    renderer: Arc<dyn TemplateRenderer>,
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(hello::router())
        .fallback(not_found::not_found_page)
}

pub struct App {
    listener: TcpListener,
    renderer: Arc<dyn TemplateRenderer>,
}

impl App {
    pub async fn with(config: Settings) -> Result<Self, io::Error> {
        Self::with_renderer(config, Arc::new(AskamaRenderer)).await
    }

    /// Builds the app around a caller-provided renderer instead of the askama one.
    pub async fn with_renderer(
        config: Settings,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Result<Self, io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await?;

        Ok(Self { listener, renderer })
    }

    pub fn host(&self) -> IpAddr {
        self.listener
            .local_addr()
            .expect("A bound listener should have a local address.")
            .ip()
    }

    pub fn port(&self) -> u16 {
        self.listener
            .local_addr()
            .expect("A bound listener should have a local address.")
            .port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState {
                renderer: self.renderer,
            })
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
