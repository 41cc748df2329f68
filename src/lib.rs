pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod notifier;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;
pub mod templates;

use crate::notifier::NotificationGateway;
use crate::repository::{ClientReader, EmployeeReader, SellerReader, SellerSettingsReader};
use crate::templates::MessageRenderer;

/// Every store port the return workflow reads from.
pub trait ReturnStore:
    SellerReader + ClientReader + EmployeeReader + SellerSettingsReader + Send + Sync
{
}

impl<T> ReturnStore for T where
    T: SellerReader + ClientReader + EmployeeReader + SellerSettingsReader + Send + Sync
{
}

/// Collaborators shared by the HTTP handlers.
pub struct NotifierState {
    pub repo: Box<dyn ReturnStore>,
    pub renderer: Box<dyn MessageRenderer + Send + Sync>,
    pub gateway: Box<dyn NotificationGateway + Send + Sync>,
}

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};

    use crate::NotifierState;
    use crate::models::config::ServerConfig;
    use crate::notifier::zmq_gateway::ZmqGateway;
    use crate::repository::InMemoryRepository;
    use crate::routes::api::api_v1_returns_notify;
    use crate::templates::tera_renderer::TeraRenderer;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = InMemoryRepository::new(&server_config.directory)
            .map_err(|e| std::io::Error::other(format!("Invalid directory: {e}")))?;

        let renderer = TeraRenderer::from_glob(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        // Outbound notifications are published for the emailer and SMS workers.
        let gateway = ZmqGateway::connect(&server_config.zmq_notifier_pub)
            .map_err(|e| std::io::Error::other(format!("Failed to start ZMQ sender: {e}")))?;

        let state = web::Data::new(NotifierState {
            repo: Box::new(repo),
            renderer: Box::new(renderer),
            gateway: Box::new(gateway),
        });

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Starting server on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .service(web::scope("/api").service(api_v1_returns_notify))
                .app_data(state.clone())
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
