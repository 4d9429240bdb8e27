use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const PAYMENT_TYPE: &str = "Payment";

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment with ID {id} not found")]
    NotFound { id: Uuid },
    #[error("Payment with ID {id} already exists")]
    AlreadyExists { id: Uuid },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid payment record: {0}")]
    InvalidRecord(String),
}

/// A payment resource. Every field except `id` falls back to its empty value
/// when missing from the incoming JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    #[serde(rename = "type", default = "default_type")]
    pub resource_type: String,
    pub id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organisation_id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,
}

fn default_type() -> String {
    PAYMENT_TYPE.to_string()
}

/// An explicit `null` decodes the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Attributes {
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub beneficiary_party: BeneficiaryParty,
    #[serde(deserialize_with = "null_as_default")]
    pub charges_information: ChargesInformation,
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub debtor_party: DebtorParty,
    pub end_to_end_reference: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fx: FX,
    pub numeric_reference: String,
    pub payment_id: String,
    pub payment_purpose: String,
    pub payment_scheme: String,
    pub payment_type: String,
    pub processing_date: String,
    pub reference: String,
    pub scheme_payment_sub_type: String,
    pub scheme_payment_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sponsor_party: SponsorParty,
}

/// The debtor this beneficiary is backed by, when one is on file, lives in
/// `debtor_party`; an absent debtor is omitted from the JSON entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BeneficiaryParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_party: Option<DebtorParty>,
    pub account_type: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DebtorParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_party: Option<SponsorParty>,
    pub account_name: String,
    pub account_number_code: String,
    pub address: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SponsorParty {
    pub account_number: String,
    pub bank_id: String,
    pub bank_id_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChargesInformation {
    pub bearer_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sender_charges: Vec<Charge>,
    pub receiver_charges_amount: String,
    pub receiver_charges_currency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Charge {
    pub amount: String,
    pub currency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FX {
    pub contract_reference: String,
    pub exchange_rate: String,
    pub original_amount: String,
    pub original_currency: String,
}

impl Payment {
    pub fn location(&self) -> String {
        format!("/v1/payments/{}", self.id)
    }
}
