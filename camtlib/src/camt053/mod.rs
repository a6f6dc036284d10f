//! ISO 20022 CAMT.053 (BankToCustomerStatement).
//!
//! Документ: корень `Document` с пространством имён по умолчанию, внутри
//! `BkToCstmrStmt`, первым идёт `GrpHdr`, за ним узлы `Stmt`. Разбор
//! «всё или ничего»: любая ошибка выписки отменяет весь результат.

pub mod balance;
pub mod entry;
pub mod party;
pub mod remittance;
pub mod statement;

use crate::{
    error::{CamtError, Result},
    model::Statement,
    traits::StatementParser,
    xml::{Element, Navigator},
};
use regex::Regex;
use tracing::{debug, warn};

pub struct Camt053;

impl StatementParser for Camt053 {
    const CODE: &'static str = "CAMT";
    const NAME: &'static str = "Generic CAMT Format";

    fn parse(data: &[u8]) -> Result<Vec<Statement>> {
        parse_document(data)
    }
}

/// Общее на весь документ: навигатор и скомпилированные шаблоны.
pub struct Context {
    pub nav: Navigator,
    pub short_reference: Regex,
}

impl Context {
    pub fn new(nav: Navigator) -> Result<Self> {
        let short_reference = Regex::new(remittance::SHORT_REFERENCE)?;
        Ok(Context {
            nav,
            short_reference,
        })
    }
}

pub fn parse_document(data: &[u8]) -> Result<Vec<Statement>> {
    let root = Element::parse(data)?;
    let ctx = Context::new(Navigator::for_root(&root))?;
    let nav = &ctx.nav;
    debug!(
        root = nav.local_tag(&root),
        namespace = ?nav.namespace(),
        bytes = data.len(),
        "parsing camt.053"
    );

    let missing_header = || CamtError::Structure {
        expected: "GrpHdr".into(),
        actual: String::new(),
    };
    let message = nav.children(&root).next().ok_or_else(missing_header)?;
    let mut siblings = nav.children(message);
    let header = siblings.next().ok_or_else(missing_header)?;
    nav.expect_tag(header, "GrpHdr")?;

    let mut statements = Vec::new();
    for node in siblings {
        if nav.local_tag(node) != "Stmt" {
            warn!(tag = nav.local_tag(node), "skipping non-statement element");
            continue;
        }
        let st = statement::build(&ctx, node, statements.len())?;
        statements.push(st);
    }
    debug!(statements = statements.len(), "camt.053 parsed");
    Ok(statements)
}
