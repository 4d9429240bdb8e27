use crate::{
    database::store::PaymentStore,
    models::payment::{Payment, PaymentError},
    utils::{
        errors::ApiError,
        helpers::{ApiResponse, Link},
    },
};
use actix_web::{HttpResponse, http::StatusCode, http::header, web};
use tracing::{info, warn};
use uuid::Uuid;

const COLLECTION_PATH: &str = "/v1/payments";

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        warn!("Rejecting malformed payment id: {}", raw);
        ApiError::InvalidUuid
    })
}

fn parse_body(body: &[u8]) -> Result<Payment, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("Rejecting malformed payment body: {}", e);
        ApiError::InvalidJson
    })
}

fn created(payment: &Payment) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, payment.location()))
        .finish()
}

pub async fn all(store: web::Data<dyn PaymentStore>) -> Result<HttpResponse, ApiError> {
    info!("Getting all payments");

    let payments = store.select_all().await?;

    Ok(
        ApiResponse::success_with_links(payments, vec![Link::self_link(COLLECTION_PATH)])
            .to_response(StatusCode::OK),
    )
}

pub async fn get_payment(
    store: web::Data<dyn PaymentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let payment_id = parse_id(&path)?;
    info!("Getting payment {}", payment_id);

    let payment = store.select(payment_id).await?;
    let links = vec![Link::self_link(payment.location())];

    Ok(ApiResponse::success_with_links(payment, links).to_response(StatusCode::OK))
}

pub async fn create(
    store: web::Data<dyn PaymentStore>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let payment = parse_body(&body)?;
    info!("Creating payment {}", payment.id);

    match store.select(payment.id).await {
        Ok(_) => {
            warn!("Payment {} already exists", payment.id);
            return Err(ApiError::AlreadyExists);
        }
        Err(PaymentError::NotFound { .. }) => {}
        Err(e) => return Err(e.into()),
    }

    store.insert(&payment).await?;

    info!("Successfully created payment with ID: {}", payment.id);
    Ok(created(&payment))
}

pub async fn update(
    store: web::Data<dyn PaymentStore>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let payment_id = parse_id(&path)?;
    let payment = parse_body(&body)?;
    info!("Updating payment {}", payment_id);

    if payment.id.to_string() != payment_id.to_string() {
        warn!(
            "Payment id {} in body does not match path id {}",
            payment.id, payment_id
        );
        return Err(ApiError::MismatchingIds);
    }

    store.select(payment_id).await?;
    store.update(&payment).await?;

    info!("Successfully updated payment: {}", payment_id);
    Ok(created(&payment))
}

pub async fn delete(
    store: web::Data<dyn PaymentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let payment_id = parse_id(&path)?;
    info!("Deleting payment {}", payment_id);

    let existing = store.select(payment_id).await?;
    store.delete(&existing).await?;

    info!("Successfully deleted payment: {}", payment_id);
    Ok(HttpResponse::Ok().finish())
}
