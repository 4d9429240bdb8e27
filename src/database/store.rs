use async_trait::async_trait;
use uuid::Uuid;

use crate::models::payment::{Payment, PaymentError};

/// Persistence boundary for payments.
///
/// Implementations must be safe to share between concurrent requests.
/// Unknown ids are reported as [`PaymentError::NotFound`] and duplicate
/// inserts as [`PaymentError::AlreadyExists`]; anything else is a store
/// failure.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// All payments, in insertion order.
    async fn select_all(&self) -> Result<Vec<Payment>, PaymentError>;
    async fn select(&self, id: Uuid) -> Result<Payment, PaymentError>;
    async fn insert(&self, payment: &Payment) -> Result<(), PaymentError>;
    /// Replaces the stored record with the same id.
    async fn update(&self, payment: &Payment) -> Result<(), PaymentError>;
    async fn delete(&self, payment: &Payment) -> Result<(), PaymentError>;
}
