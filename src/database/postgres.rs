use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::database::connection::DbPool;
use crate::database::store::PaymentStore;
use crate::models::payment::{Attributes, Payment, PaymentError};

#[derive(Debug, FromRow)]
struct PaymentRow {
    id: Uuid,
    resource_type: String,
    version: i64,
    organisation_id: Uuid,
    attributes: Json<Attributes>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = PaymentError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let version = u64::try_from(row.version).map_err(|_| {
            PaymentError::InvalidRecord(format!(
                "version {} of payment {} is out of range",
                row.version, row.id
            ))
        })?;

        Ok(Payment {
            resource_type: row.resource_type,
            id: row.id,
            version,
            organisation_id: row.organisation_id,
            attributes: row.attributes.0,
        })
    }
}

/// BIGINT holds versions up to `i64::MAX`; anything above cannot be stored.
fn stored_version(payment: &Payment) -> Result<i64, PaymentError> {
    i64::try_from(payment.version).map_err(|_| {
        PaymentError::InvalidRecord(format!(
            "version {} of payment {} does not fit the version column",
            payment.version, payment.id
        ))
    })
}

/// PostgreSQL-backed store. The attribute tree is kept in a JSONB column
/// alongside the top-level payment fields.
#[derive(Clone)]
pub struct PgPaymentStore {
    pool: DbPool,
}

impl PgPaymentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStore for PgPaymentStore {
    async fn select_all(&self) -> Result<Vec<Payment>, PaymentError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            "SELECT id, resource_type, version, organisation_id, attributes
             FROM payments ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn select(&self, id: Uuid) -> Result<Payment, PaymentError> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "SELECT id, resource_type, version, organisation_id, attributes
             FROM payments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Payment::try_from(row),
            None => Err(PaymentError::NotFound { id }),
        }
    }

    async fn insert(&self, payment: &Payment) -> Result<(), PaymentError> {
        let version = stored_version(payment)?;
        let result = sqlx::query(
            "INSERT INTO payments (id, resource_type, version, organisation_id, attributes)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(payment.id)
        .bind(&payment.resource_type)
        .bind(version)
        .bind(payment.organisation_id)
        .bind(Json(&payment.attributes))
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(PaymentError::AlreadyExists { id: payment.id })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, payment: &Payment) -> Result<(), PaymentError> {
        let version = stored_version(payment)?;
        let result = sqlx::query(
            r#"
            UPDATE payments
            SET
                resource_type = $2,
                version = $3,
                organisation_id = $4,
                attributes = $5
            WHERE id = $1
            "#,
        )
        .bind(payment.id)
        .bind(&payment.resource_type)
        .bind(version)
        .bind(payment.organisation_id)
        .bind(Json(&payment.attributes))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PaymentError::NotFound { id: payment.id });
        }

        Ok(())
    }

    async fn delete(&self, payment: &Payment) -> Result<(), PaymentError> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(payment.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PaymentError::NotFound { id: payment.id });
        }

        Ok(())
    }
}
