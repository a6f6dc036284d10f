//! Общий трэйт разбора выписок из буфера в памяти.

use crate::{error::Result, model::Statement};

pub trait StatementParser {
    /// Короткий код формата, например `CAMT`.
    const CODE: &'static str;
    /// Человекочитаемое название.
    const NAME: &'static str;

    fn parse(data: &[u8]) -> Result<Vec<Statement>>;
}
