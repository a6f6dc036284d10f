//! Назначение платежа: свободный текст и структурированная ссылка.

use crate::xml::{Element, Lookup, Navigator};
use regex::Regex;

/// Сообщение из одного непробельного символа считается ссылкой.
pub const SHORT_REFERENCE: &str = r"^[^\s]$";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemittanceFields {
    pub message: Option<String>,
    pub reference: Option<String>,
}

/// Строки `Ustrd` склеиваются без обрезки пробелов: ссылкой из одного
/// символа считается только сообщение ровно из одного символа.
pub fn extract(nav: &Navigator, short_reference: &Regex, tx: &Element) -> RemittanceFields {
    let lines = nav.query_all(tx, "RmtInf/Ustrd");
    let message = if lines.is_empty() {
        None
    } else {
        Some(lines.iter().map(|l| l.raw_text()).collect::<Vec<_>>().join(" "))
    };

    let reference = match nav.query_one(tx, "RmtInf/Strd/CdtrRefInf/Ref") {
        Lookup::Found(r) => Some(r.text().to_string()),
        Lookup::NotFound => message
            .as_deref()
            .filter(|m| short_reference.is_match(m))
            .map(str::to_string),
    };

    RemittanceFields { message, reference }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(body: &str) -> RemittanceFields {
        let xml = format!(
            r#"<TxDtls xmlns="urn:iso:std:iso:20022:tech:xsd:camt.053.001.02"><RmtInf>{body}</RmtInf></TxDtls>"#
        );
        let node = Element::parse(xml.as_bytes()).expect("parse");
        let nav = Navigator::for_root(&node);
        let re = Regex::new(SHORT_REFERENCE).unwrap();
        extract(&nav, &re, &node)
    }

    #[test]
    fn unstructured_lines_are_joined_with_space() {
        let r = run("<Ustrd>Invoice 2024-17</Ustrd><Ustrd>thanks</Ustrd>");
        assert_eq!(r.message.as_deref(), Some("Invoice 2024-17 thanks"));
        assert_eq!(r.reference, None);
    }

    #[test]
    fn structured_reference_wins() {
        let r = run(
            "<Ustrd>X</Ustrd><Strd><CdtrRefInf><Ref>RF18539007547034</Ref></CdtrRefInf></Strd>",
        );
        assert_eq!(r.message.as_deref(), Some("X"));
        assert_eq!(r.reference.as_deref(), Some("RF18539007547034"));
    }

    #[test]
    fn single_character_message_doubles_as_reference() {
        let r = run("<Ustrd>7</Ustrd>");
        assert_eq!(r.reference.as_deref(), Some("7"));
    }

    #[test]
    fn longer_message_is_not_a_reference() {
        let r = run("<Ustrd>42</Ustrd>");
        assert_eq!(r.message.as_deref(), Some("42"));
        assert_eq!(r.reference, None);
    }

    #[test]
    fn padded_character_is_not_a_reference() {
        let r = run("<Ustrd>  x  </Ustrd>");
        assert_eq!(r.message.as_deref(), Some("  x  "));
        assert_eq!(r.reference, None);
    }

    #[test]
    fn nothing_at_all() {
        assert_eq!(run(""), RemittanceFields::default());
    }
}
