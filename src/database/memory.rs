use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::store::PaymentStore;
use crate::models::payment::{Payment, PaymentError};

/// A thread-safe in-memory payment store.
///
/// Payments are kept in a `Vec` so listings come back in insertion order.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<Vec<Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn select_all(&self) -> Result<Vec<Payment>, PaymentError> {
        let payments = self.payments.read().await;
        Ok(payments.clone())
    }

    async fn select(&self, id: Uuid) -> Result<Payment, PaymentError> {
        let payments = self.payments.read().await;
        payments
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PaymentError::NotFound { id })
    }

    async fn insert(&self, payment: &Payment) -> Result<(), PaymentError> {
        let mut payments = self.payments.write().await;
        if payments.iter().any(|p| p.id == payment.id) {
            return Err(PaymentError::AlreadyExists { id: payment.id });
        }
        payments.push(payment.clone());
        Ok(())
    }

    async fn update(&self, payment: &Payment) -> Result<(), PaymentError> {
        let mut payments = self.payments.write().await;
        match payments.iter_mut().find(|p| p.id == payment.id) {
            Some(existing) => {
                *existing = payment.clone();
                Ok(())
            }
            None => Err(PaymentError::NotFound { id: payment.id }),
        }
    }

    async fn delete(&self, payment: &Payment) -> Result<(), PaymentError> {
        let mut payments = self.payments.write().await;
        let before = payments.len();
        payments.retain(|p| p.id != payment.id);

        if payments.len() == before {
            return Err(PaymentError::NotFound { id: payment.id });
        }

        Ok(())
    }
}
