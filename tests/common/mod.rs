#![allow(dead_code)]

use async_trait::async_trait;
use payments_api::database::store::PaymentStore;
use payments_api::models::payment::{
    Attributes, BeneficiaryParty, Charge, ChargesInformation, DebtorParty, FX, Payment,
    PaymentError, SponsorParty, PAYMENT_TYPE,
};
use uuid::Uuid;

/// Builds a test service around a fresh handle to the given store.
macro_rules! init_app {
    ($store:expr) => {{
        let store: std::sync::Arc<dyn payments_api::database::store::PaymentStore> =
            std::sync::Arc::new($store);
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::from(store))
                .configure(payments_api::routes::api::scoped_config),
        )
        .await
    }};
}

pub fn example_payment() -> Payment {
    Payment {
        resource_type: PAYMENT_TYPE.to_string(),
        id: Uuid::new_v4(),
        version: 0,
        organisation_id: Uuid::new_v4(),
        attributes: Attributes {
            amount: "100.00".to_string(),
            beneficiary_party: BeneficiaryParty {
                debtor_party: Some(DebtorParty {
                    sponsor_party: Some(SponsorParty {
                        account_number: "12345678".to_string(),
                        bank_id: "203301".to_string(),
                        bank_id_code: "GBDSC".to_string(),
                    }),
                    account_name: "L Galvin".to_string(),
                    account_number_code: "IBAN".to_string(),
                    address: "123 Main Street".to_string(),
                    name: "Liam Galvin".to_string(),
                }),
                account_type: 0,
            },
            charges_information: ChargesInformation {
                bearer_code: "SHAR".to_string(),
                sender_charges: vec![
                    Charge {
                        amount: "0.50".to_string(),
                        currency: "GBP".to_string(),
                    },
                    Charge {
                        amount: "0.10".to_string(),
                        currency: "USD".to_string(),
                    },
                ],
                receiver_charges_amount: "1.00".to_string(),
                receiver_charges_currency: "GBP".to_string(),
            },
            currency: "GBP".to_string(),
            debtor_party: DebtorParty {
                sponsor_party: Some(SponsorParty {
                    account_number: "77777777".to_string(),
                    bank_id: "203301".to_string(),
                    bank_id_code: "GBDSC".to_string(),
                }),
                account_name: "Mangoes Inc".to_string(),
                account_number_code: "IBAN".to_string(),
                address: "124 Main Street".to_string(),
                name: "Mangoes Incorporated".to_string(),
            },
            end_to_end_reference: "payment for mangoes".to_string(),
            fx: FX::default(),
            numeric_reference: "1012321".to_string(),
            payment_id: "123456789012345678".to_string(),
            payment_purpose: "Paying for goods/services".to_string(),
            payment_scheme: "FPS".to_string(),
            payment_type: "Credit".to_string(),
            processing_date: "2017-01-18".to_string(),
            reference: "Payment for Em's mangoes".to_string(),
            scheme_payment_sub_type: "InternetBanking".to_string(),
            scheme_payment_type: "ImmediatePayment".to_string(),
            sponsor_party: SponsorParty {
                account_number: "10101010".to_string(),
                bank_id: "203302".to_string(),
                bank_id_code: "GBDSC".to_string(),
            },
        },
    }
}

/// A store whose every operation fails, for exercising the 500 paths.
pub struct FailingStore;

fn failure() -> PaymentError {
    PaymentError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl PaymentStore for FailingStore {
    async fn select_all(&self) -> Result<Vec<Payment>, PaymentError> {
        Err(failure())
    }

    async fn select(&self, _id: Uuid) -> Result<Payment, PaymentError> {
        Err(failure())
    }

    async fn insert(&self, _payment: &Payment) -> Result<(), PaymentError> {
        Err(failure())
    }

    async fn update(&self, _payment: &Payment) -> Result<(), PaymentError> {
        Err(failure())
    }

    async fn delete(&self, _payment: &Payment) -> Result<(), PaymentError> {
        Err(failure())
    }
}

/// A store that reads normally but fails every write, so the handlers get
/// past their existence checks before the store gives out.
pub struct WriteFailingStore {
    pub existing: Payment,
}

#[async_trait]
impl PaymentStore for WriteFailingStore {
    async fn select_all(&self) -> Result<Vec<Payment>, PaymentError> {
        Ok(vec![self.existing.clone()])
    }

    async fn select(&self, id: Uuid) -> Result<Payment, PaymentError> {
        if id == self.existing.id {
            Ok(self.existing.clone())
        } else {
            Err(PaymentError::NotFound { id })
        }
    }

    async fn insert(&self, _payment: &Payment) -> Result<(), PaymentError> {
        Err(failure())
    }

    async fn update(&self, _payment: &Payment) -> Result<(), PaymentError> {
        Err(failure())
    }

    async fn delete(&self, _payment: &Payment) -> Result<(), PaymentError> {
        Err(failure())
    }
}
