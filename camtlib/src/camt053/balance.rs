//! Суммы и балансы выписки.
//!
//! Знак: индикатор `CRDT` даёт минус, любой другой — плюс.

use crate::{
    error::{BalanceSide, CamtError, Result},
    xml::{Element, Navigator},
};
use rust_decimal::Decimal;

pub const CREDIT: &str = "CRDT";

/// Коды типов баланса из `Bal/Tp/CdOrPrtry/Cd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceCode {
    /// Opening booked
    Opbd,
    /// Previously closed booked
    Prcd,
    /// Interim booked
    Itbd,
    /// Closing booked
    Clbd,
}

impl BalanceCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceCode::Opbd => "OPBD",
            BalanceCode::Prcd => "PRCD",
            BalanceCode::Itbd => "ITBD",
            BalanceCode::Clbd => "CLBD",
        }
    }
}

/// Сумма узла с `Amt` и `CdtDbtInd` (баланс или проводка) со знаком.
/// `entry` — номер проводки, для балансов `None`.
pub fn amount_of(
    nav: &Navigator,
    node: &Element,
    statement: usize,
    entry: Option<usize>,
) -> Result<Decimal> {
    let text = nav
        .query_text(node, "Amt")
        .ok_or(CamtError::MissingField {
            statement,
            entry,
            field: "Amt",
        })?;
    let amount = Decimal::from_str_exact(text)
        .or_else(|_| text.parse::<Decimal>())
        .map_err(|_| CamtError::InvalidAmount {
            statement,
            entry,
            value: text.to_string(),
        })?;

    if nav.query_text(node, "CdtDbtInd") == Some(CREDIT) {
        Ok(-amount)
    } else {
        Ok(amount)
    }
}

/// Все узлы `Bal` с данным кодом, в порядке документа.
pub fn balances_of<'a>(nav: &Navigator, node: &'a Element, code: BalanceCode) -> Vec<&'a Element> {
    nav.query_all(node, "Bal")
        .into_iter()
        .filter(|bal| nav.query_text(bal, "Tp/CdOrPrtry/Cd") == Some(code.as_str()))
        .collect()
}

/// OPBD, иначе PRCD, иначе первый ITBD (продолжение постраничной выписки).
pub fn start_balance(nav: &Navigator, node: &Element, statement: usize) -> Result<Decimal> {
    let bal = [BalanceCode::Opbd, BalanceCode::Prcd, BalanceCode::Itbd]
        .into_iter()
        .find_map(|code| balances_of(nav, node, code).first().copied())
        .ok_or(CamtError::MissingBalance {
            statement,
            side: BalanceSide::Start,
        })?;
    amount_of(nav, bal, statement, None)
}

/// CLBD, иначе последний ITBD: во второй половине страницы он закрывающий.
pub fn end_balance(nav: &Navigator, node: &Element, statement: usize) -> Result<Decimal> {
    let bal = balances_of(nav, node, BalanceCode::Clbd)
        .first()
        .copied()
        .or_else(|| balances_of(nav, node, BalanceCode::Itbd).last().copied())
        .ok_or(CamtError::MissingBalance {
            statement,
            side: BalanceSide::End,
        })?;
    amount_of(nav, bal, statement, None)
}
