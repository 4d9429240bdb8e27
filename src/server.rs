use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::database::store::PaymentStore;
use crate::routes;

pub async fn run(config: &AppConfig, store: Arc<dyn PaymentStore>) -> std::io::Result<()> {
    let store = web::Data::from(store);
    let enable_cors = config.server.enable_cors;
    let address = config.bind_address();

    info!("Listening on {}:{}", address.0, address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Condition::new(enable_cors, Cors::permissive()))
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(routes::api::scoped_config)
    })
    .bind(address)?
    .run()
    .await
}
