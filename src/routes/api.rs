use actix_web::{web, HttpResponse};

use crate::handlers;

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/payments")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::payments::all))
                    .route(web::post().to(handlers::payments::create))
                    .route(web::head().to(HttpResponse::MethodNotAllowed)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::payments::get_payment))
                    .route(web::put().to(handlers::payments::update))
                    .route(web::delete().to(handlers::payments::delete)),
            ),
    );
}
