//! Плоская CSV-выгрузка: одна строка на транзакцию.
//! Заголовки:
//! statement_id,local_account,local_currency,effective_date,transaction_date,transfer_type,transferred_amount,message,reference,remote_account,remote_iban,remote_owner,remote_owner_country,remote_owner_address,bank_transaction_code

use crate::{error::Result, model::Statement};
use csv::WriterBuilder;
use std::io::Write;

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    statement_id: &'a str,
    local_account: &'a str,
    local_currency: &'a str,
    effective_date: String,
    transaction_date: String,
    transfer_type: &'static str,
    transferred_amount: String,
    message: &'a Option<String>,
    reference: &'a Option<String>,
    remote_account: &'a Option<String>,
    remote_iban: &'a Option<String>,
    remote_owner: &'a Option<String>,
    remote_owner_country: &'a Option<String>,
    remote_owner_address: &'a Option<String>,
    bank_transaction_code: &'a Option<String>,
}

pub fn write_csv<W: Write>(mut w: W, statements: &[Statement]) -> Result<()> {
    let mut wrt = WriterBuilder::new().from_writer(&mut w);

    for st in statements {
        for t in &st.transactions {
            wrt.serialize(CsvOutRow {
                statement_id: &st.id,
                local_account: &st.local_account,
                local_currency: &st.local_currency,
                effective_date: t.effective_date.format("%Y-%m-%d").to_string(),
                transaction_date: t.transaction_date.format("%Y-%m-%d").to_string(),
                transfer_type: t.transfer_type.as_str(),
                transferred_amount: t.transferred_amount.to_string(),
                message: &t.message,
                reference: &t.reference,
                remote_account: &t.remote_account,
                remote_iban: &t.remote_iban,
                remote_owner: &t.remote_owner,
                remote_owner_country: &t.remote_owner_country,
                remote_owner_address: &t.remote_owner_address,
                bank_transaction_code: &t.bank_transaction_code,
            })?;
        }
    }
    wrt.flush()?;
    Ok(())
}
