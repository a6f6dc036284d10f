use super::{balance, entry, Context};
use crate::{
    error::{CamtError, Result},
    model::Statement,
    xml::Element,
};
use tracing::debug;

/// Собирает одну выписку из узла `Stmt`; `index` — её номер в документе.
pub fn build(ctx: &Context, node: &Element, index: usize) -> Result<Statement> {
    let nav = &ctx.nav;
    let missing = |field: &'static str| CamtError::MissingField {
        statement: index,
        entry: None,
        field,
    };

    let id = nav.query_text(node, "Id").ok_or_else(|| missing("Id"))?;
    let local_account = nav
        .query_text(node, "Acct/Id/IBAN")
        .or_else(|| nav.query_text(node, "Acct/Id/Othr/Id"))
        .ok_or_else(|| missing("Acct/Id"))?;
    // без Acct/Ccy берём валюту суммы первого баланса
    let local_currency = nav
        .query_text(node, "Acct/Ccy")
        .or_else(|| nav.query_one(node, "Bal/Amt").node()?.attribute("Ccy"))
        .ok_or_else(|| missing("Acct/Ccy"))?;

    let start_balance = balance::start_balance(nav, node, index)?;
    let end_balance = balance::end_balance(nav, node, index)?;

    let entries = nav.query_all(node, "Ntry");
    debug!(statement = index, id, entries = entries.len(), "parsing statement");

    let mut transactions = Vec::with_capacity(entries.len());
    for (n, ntry) in entries.into_iter().enumerate() {
        transactions.extend(entry::decompose(ctx, ntry, index, n)?);
    }

    Ok(Statement {
        id: id.to_string(),
        local_account: local_account.to_string(),
        local_currency: local_currency.to_string(),
        start_balance,
        end_balance,
        transactions,
    })
}
