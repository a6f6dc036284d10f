//! Контрагент по TxDtls: имя, адрес, счёт и BIC его банка.

use super::balance::CREDIT;
use crate::xml::{Element, Lookup, Navigator};

/// Чью сторону читать: при зачислении платил должник, иначе получатель.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    Debtor,
    Creditor,
}

impl PartyRole {
    pub fn for_indicator(indicator: Option<&str>) -> Self {
        if indicator == Some(CREDIT) {
            PartyRole::Debtor
        } else {
            PartyRole::Creditor
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PartyRole::Debtor => "Dbtr",
            PartyRole::Creditor => "Cdtr",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyFields {
    pub remote_owner: Option<String>,
    pub remote_owner_country: Option<String>,
    pub remote_owner_address: Option<String>,
    pub remote_account: Option<String>,
    /// На самом деле BIC, имя поля историческое.
    pub remote_iban: Option<String>,
}

pub fn extract(nav: &Navigator, tx: &Element, indicator: Option<&str>) -> PartyFields {
    let role = PartyRole::for_indicator(indicator).tag();
    let mut out = PartyFields::default();

    if let Lookup::Found(party) = nav.query_one(tx, &format!("RltdPties/{role}")) {
        out.remote_owner = nav.query_text(party, "Nm").map(str::to_string);
        out.remote_owner_country = nav.query_text(party, "PstlAdr/Ctry").map(str::to_string);
        out.remote_owner_address = nav
            .query_text(party, "AdrLine")
            .or_else(|| nav.query_text(party, "PstlAdr/AdrLine"))
            .map(str::to_string);
    }

    match nav.query_one(tx, &format!("RltdPties/{role}Acct/Id")) {
        Lookup::Found(account) => match nav.query_one(account, "IBAN") {
            Lookup::Found(iban) => {
                out.remote_account = Some(iban.text().to_string());
                out.remote_iban = agent_bic(nav, tx, role);
            }
            Lookup::NotFound => {
                out.remote_account = nav.query_text(account, "Othr/Id").map(str::to_string);
            }
        },
        Lookup::NotFound => {}
    }

    out
}

/// BIC агента стороны; `BICFI` встречается в версиях схемы начиная с .04.
fn agent_bic(nav: &Navigator, tx: &Element, role: &str) -> Option<String> {
    let inst = format!("RltdAgts/{role}Agt/FinInstnId");
    nav.query_text(tx, &format!("{inst}/BIC"))
        .or_else(|| nav.query_text(tx, &format!("{inst}/BICFI")))
        .map(str::to_string)
}
