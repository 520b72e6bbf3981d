use std::{io, net::IpAddr};

use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Settings, email::Mailer};

mod asset;
mod contact;
mod error;
mod extractor;
mod health;
mod home;

#[derive(Clone)]
pub struct AppState {
    mailer: Mailer,
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(home::router())
        .merge(contact::router())
        .merge(asset::router())
}

pub struct App {
    listener: TcpListener,
    mailer: Mailer,
}

impl App {
    pub async fn with(config: Settings) -> Self {
        let mailer = Mailer::new(config.email)
            .expect("The configured sender and recipient addresses should be valid.");

        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.application.port))
            .await
            .expect("The listener should be able to bind the address.");

        Self { listener, mailer }
    }

    pub fn host(&self) -> IpAddr {
        self.listener.local_addr().unwrap().ip()
    }

    pub fn port(&self) -> u16 {
        self.listener.local_addr().unwrap().port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState {
                mailer: self.mailer,
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
