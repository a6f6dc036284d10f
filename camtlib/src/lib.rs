//! camtlib — разбор банковских выписок ISO 20022 CAMT.053 в типизированные записи.

pub mod camt053;
pub mod error;
pub mod export;
pub mod model;
pub mod traits;
pub mod xml;

pub use camt053::{parse_document, Camt053};
pub use error::{CamtError, Result};
