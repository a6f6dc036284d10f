//! Доменные модели — то, что отдаётся наружу после разбора CAMT.053.
//! Никаких XML-узлов здесь нет: только простые данные.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Категория перевода. Пока различается только одна.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TransferType {
    #[default]
    Order,
}

impl TransferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::Order => "ORDER",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub effective_date: NaiveDate,
    pub transaction_date: NaiveDate,
    pub transfer_type: TransferType,
    /// Знак задаёт направление: CRDT даёт минус (см. `camt053::balance`).
    pub transferred_amount: Decimal,
    pub message: Option<String>,
    pub reference: Option<String>,
    pub remote_account: Option<String>,
    /// BIC банка контрагента, заполняется только для IBAN-счетов.
    pub remote_iban: Option<String>,
    pub remote_owner: Option<String>,
    pub remote_owner_country: Option<String>,
    pub remote_owner_address: Option<String>,
    /// BkTxCd/Prtry/Cd проводки, к которой относится запись.
    pub bank_transaction_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub id: String,
    pub local_account: String,
    pub local_currency: String,
    pub start_balance: Decimal,
    pub end_balance: Decimal,
    pub transactions: Vec<TransactionRecord>,
}
