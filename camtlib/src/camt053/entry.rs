//! Разбор одной проводки (`Ntry`) в записи транзакций.
//!
//! На каждую группу `NtryDtls` приходится ровно одна запись. Если в группе
//! один `TxDtls`, к полям проводки добавляются контрагент и назначение.
//! При нуле или нескольких `TxDtls` (пакетные платежи) остаются только поля
//! самой проводки: распределять сумму пакета по деталям не из чего.

use super::{balance, party, remittance, Context};
use crate::{
    error::{CamtError, Result},
    model::{TransactionRecord, TransferType},
    xml::{Element, Lookup},
};
use chrono::NaiveDate;
use tracing::{trace, warn};

pub fn decompose(
    ctx: &Context,
    node: &Element,
    statement: usize,
    entry: usize,
) -> Result<Vec<TransactionRecord>> {
    let nav = &ctx.nav;
    let indicator = nav.query_text(node, "CdtDbtInd");

    let base = TransactionRecord {
        effective_date: date_of(ctx, node, "BookgDt", statement, entry)?,
        transaction_date: date_of(ctx, node, "ValDt", statement, entry)?,
        transfer_type: TransferType::Order,
        transferred_amount: balance::amount_of(nav, node, statement, Some(entry))?,
        message: None,
        reference: None,
        remote_account: None,
        remote_iban: None,
        remote_owner: None,
        remote_owner_country: None,
        remote_owner_address: None,
        bank_transaction_code: nav.query_text(node, "BkTxCd/Prtry/Cd").map(str::to_string),
    };

    let groups = nav.query_all(node, "NtryDtls");
    trace!(
        statement,
        entry,
        groups = groups.len(),
        code = ?base.bank_transaction_code,
        "decomposing entry"
    );

    let mut records = Vec::with_capacity(groups.len());
    for group in groups {
        let details = nav.query_all(group, "TxDtls");
        let record = match details.as_slice() {
            [tx] => {
                let p = party::extract(nav, tx, indicator);
                let r = remittance::extract(nav, &ctx.short_reference, tx);
                TransactionRecord {
                    message: r.message,
                    reference: r.reference,
                    remote_account: p.remote_account,
                    remote_iban: p.remote_iban,
                    remote_owner: p.remote_owner,
                    remote_owner_country: p.remote_owner_country,
                    remote_owner_address: p.remote_owner_address,
                    ..base.clone()
                }
            }
            [] => base.clone(),
            many => {
                warn!(
                    statement,
                    entry,
                    details = many.len(),
                    "batched entry details reported as one aggregate record"
                );
                base.clone()
            }
        };
        records.push(record);
    }
    Ok(records)
}

/// `<field>/Dt`, а если банк прислал только `<field>/DtTm` — его дата.
fn date_of(
    ctx: &Context,
    node: &Element,
    field: &'static str,
    statement: usize,
    entry: usize,
) -> Result<NaiveDate> {
    let nav = &ctx.nav;
    let text = match nav.query_one(node, &format!("{field}/Dt")) {
        Lookup::Found(dt) => dt.text(),
        Lookup::NotFound => match nav.query_one(node, &format!("{field}/DtTm")) {
            Lookup::Found(dt) => dt.text().get(..10).unwrap_or(dt.text()),
            Lookup::NotFound => {
                return Err(CamtError::MissingField {
                    statement,
                    entry: Some(entry),
                    field,
                })
            }
        },
    };
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| CamtError::InvalidDate {
        statement,
        entry,
        value: text.to_string(),
    })
}
