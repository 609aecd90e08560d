use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpServer,
};
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::app::configuration::{
    Settings,
    SubscriptionSettings,
};
use crate::routes::*;
use crate::subscription_client::{
    Credentials,
    SubscriptionClient,
};

pub struct CaptureApp {
    pub server: Result<Server, std::io::Error>,
    pub port: u16,
}

impl CaptureApp {
    pub fn from(configuration: Settings) -> Result<CaptureApp, std::io::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.binding_address())?;
        let port = tcp_listener.local_addr().unwrap().port();
        let subscription_client =
            web::Data::new(CaptureApp::subscription_client(configuration.subscription));

        // HttpServer handles all transport level concerns
        let server = HttpServer::new(move || {
            // App is where all the application logic lives: routing, middlewares, request
            // handlers, etc.
            App::new()
                .wrap(TracingLogger::default())
                .route("/health_check", web::get().to(health_check))
                .route("/subscriptions", web::post().to(capture))
                .app_data(subscription_client.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)
        .map(HttpServer::run);
        Ok(CaptureApp { port, server })
    }

    fn subscription_client(client_config: SubscriptionSettings) -> SubscriptionClient {
        let base_url = Url::parse(&client_config.base_url).unwrap_or_else(|e| {
            panic!(
                "invalid base url: {} for subscription client: {}",
                client_config.base_url, e
            )
        });

        let credentials = Credentials {
            api_key: client_config.api_key,
            publication_id: client_config.publication_id,
        };

        SubscriptionClient::new(base_url, credentials)
            .unwrap_or_else(|e| panic!("error creating subscription client: {}", e))
    }
}
