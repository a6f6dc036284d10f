use camtlib::{
    model::TransferType,
    traits::StatementParser,
    Camt053,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const STATEMENT: &str = include_str!("data/statement.xml");
const PAGINATED: &str = include_str!("data/paginated.xml");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn statements_come_back_in_document_order() {
    let sts = Camt053::parse(STATEMENT.as_bytes()).expect("camt read");
    assert_eq!(sts.len(), 2);
    assert_eq!(sts[0].id, "0352C5320240301");
    assert_eq!(sts[1].id, "0352C5320240301-2");
}

#[test]
fn statement_header_fields() {
    let sts = Camt053::parse(STATEMENT.as_bytes()).unwrap();
    let st = &sts[0];
    assert_eq!(st.local_account, "NL77ABNA0574908765");
    assert_eq!(st.local_currency, "EUR");
    // CRDT -> минус
    assert_eq!(st.start_balance, Decimal::new(-100000, 2));
    assert_eq!(st.end_balance, Decimal::new(-112050, 2));

    let st = &sts[1];
    assert_eq!(st.local_account, "5320179");
    assert_eq!(st.start_balance, Decimal::new(1000, 2));
    assert_eq!(st.end_balance, Decimal::new(1500, 2));
}

#[test]
fn received_payment_carries_debtor_details() {
    let sts = Camt053::parse(STATEMENT.as_bytes()).unwrap();
    let txs = &sts[0].transactions;
    assert_eq!(txs.len(), 3);

    let t = &txs[0];
    assert_eq!(t.effective_date, date(2024, 3, 1));
    assert_eq!(t.transaction_date, date(2024, 3, 1));
    assert_eq!(t.transfer_type, TransferType::Order);
    assert_eq!(t.transferred_amount, Decimal::new(-25000, 2));
    assert_eq!(t.message.as_deref(), Some("Invoice 2024-0042"));
    assert_eq!(t.reference.as_deref(), Some("1234567890123456"));
    assert_eq!(t.remote_owner.as_deref(), Some("J. de Vries"));
    assert_eq!(t.remote_owner_country.as_deref(), Some("NL"));
    assert_eq!(t.remote_owner_address.as_deref(), Some("Dorpsstraat 12"));
    assert_eq!(t.remote_account.as_deref(), Some("NL44RABO0123456789"));
    assert_eq!(t.remote_iban.as_deref(), Some("RABONL2U"));
    assert_eq!(t.bank_transaction_code.as_deref(), Some("N541"));
}

#[test]
fn outgoing_payment_carries_creditor_details() {
    let sts = Camt053::parse(STATEMENT.as_bytes()).unwrap();
    let t = &sts[0].transactions[1];
    assert_eq!(t.transaction_date, date(2024, 2, 29));
    assert_eq!(t.transferred_amount, Decimal::new(7950, 2));
    assert_eq!(t.remote_owner.as_deref(), Some("Energie Levering NV"));
    assert_eq!(t.remote_account.as_deref(), Some("0417164300"));
    assert_eq!(t.remote_iban, None);
    assert_eq!(t.message.as_deref(), Some("Termijn maart klant 88231"));
    assert_eq!(t.reference, None);
}

#[test]
fn batch_entry_is_reported_without_details() {
    let sts = Camt053::parse(STATEMENT.as_bytes()).unwrap();
    let t = &sts[0].transactions[2];
    assert_eq!(t.transferred_amount, Decimal::new(5000, 2));
    assert_eq!(t.message, None);
    assert_eq!(t.reference, None);
    assert_eq!(t.remote_owner, None);
    assert_eq!(t.remote_account, None);
    assert_eq!(t.bank_transaction_code, None);
}

#[test]
fn single_character_message_becomes_reference() {
    let sts = Camt053::parse(STATEMENT.as_bytes()).unwrap();
    let t = &sts[1].transactions[0];
    assert_eq!(t.message.as_deref(), Some("Z"));
    assert_eq!(t.reference.as_deref(), Some("Z"));
    assert_eq!(t.remote_owner, None);
}

#[test]
fn paginated_statement_uses_interim_balances() {
    let sts = Camt053::parse(PAGINATED.as_bytes()).unwrap();
    assert_eq!(sts.len(), 1);
    let st = &sts[0];
    assert_eq!(st.start_balance, Decimal::new(30000, 2));
    assert_eq!(st.end_balance, Decimal::new(20000, 2));

    let t = &st.transactions[0];
    assert_eq!(t.transferred_amount, Decimal::new(-10000, 2));
    assert_eq!(t.remote_owner.as_deref(), Some("Max Mustermann"));
    assert_eq!(t.remote_account.as_deref(), Some("DE02120300000000202051"));
    assert_eq!(t.remote_iban.as_deref(), Some("BYLADEM1001"));
}

#[test]
fn parsing_is_repeatable() {
    let a = Camt053::parse(STATEMENT.as_bytes()).unwrap();
    let b = camtlib::parse_document(STATEMENT.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn parser_identity() {
    assert_eq!(Camt053::CODE, "CAMT");
    assert_eq!(Camt053::NAME, "Generic CAMT Format");
}
