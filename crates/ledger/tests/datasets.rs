use ledger::{
    CellValue, Currency, CurrencyFormatter, Fixtures, LayoutKind, LedgerError, LedgerKind,
    LocaleFormatter, Money, PLACEHOLDER,
};

fn titles(kind: LedgerKind) -> Vec<&'static str> {
    Fixtures::sample()
        .select(kind)
        .columns()
        .iter()
        .map(|column| column.title)
        .collect()
}

#[test]
fn supplier_columns() {
    assert_eq!(
        titles(LedgerKind::Supplier),
        vec![
            "Date",
            "Memo No",
            "Trip Details",
            "Detention",
            "Extra WT",
            "Credit",
            "Payment",
            "Advance",
            "Balance",
            "Remarks",
        ]
    );
}

#[test]
fn party_and_general_share_columns() {
    let party = vec![
        "Date",
        "Bill No",
        "Trip Details",
        "Bill Amount",
        "Received",
        "Deductions",
        "Net Received",
        "Balance",
        "Status",
    ];
    assert_eq!(titles(LedgerKind::Party), party);
    assert_eq!(titles(LedgerKind::General), party);
}

#[test]
fn supplier_sample_headline() {
    let fmt = LocaleFormatter::new(Currency::Inr);
    let dataset = Fixtures::sample().select(LedgerKind::Supplier);
    assert_eq!(dataset.layout(), LayoutKind::Supplier);
    assert_eq!(dataset.total_entries(), 2);
    assert_eq!(
        fmt.format(dataset.outstanding()),
        fmt.format(Money::from_major(846_000, Currency::Inr))
    );
    assert_eq!(fmt.format(dataset.outstanding()), "₹8,46,000");
    assert!(dataset.is_consistent());
}

#[test]
fn party_sample_headline() {
    let fmt = LocaleFormatter::new(Currency::Inr);
    let dataset = Fixtures::sample().select(LedgerKind::Party);
    assert_eq!(dataset.name(), "Gupta Traders");
    assert_eq!(dataset.total_entries(), 1);
    assert_eq!(fmt.format(dataset.outstanding()), "₹9,00,000");
}

#[test]
fn supplier_sample_rows_hide_unused_amounts() {
    let fmt = LocaleFormatter::new(Currency::Inr);
    let rows = Fixtures::sample().select(LedgerKind::Supplier).rows(&fmt);
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row[3], CellValue::Placeholder);
        assert_eq!(row[4], CellValue::Placeholder);
        assert_eq!(row[6].text(), PLACEHOLDER);
        assert_eq!(row[7], CellValue::Placeholder);
    }
    assert_eq!(rows[0][5].text(), "₹4,50,000");
    assert_eq!(rows[1][8].text(), "₹8,46,000");
}

#[test]
fn fixtures_load_from_json() {
    let json = r#"{
        "party": {
            "name": "Mehta & Sons",
            "total_entries": 2,
            "outstanding": 150000,
            "entries": [{
                "date": "2024-03-02",
                "bill_no": "B-9",
                "trip_details": "Surat to Vapi",
                "bill_amount": 150000,
                "balance": 150000,
                "status": "partial"
            }]
        },
        "supplier": {
            "name": "Kaveri Carriers",
            "total_entries": 0,
            "outstanding": 0,
            "entries": []
        }
    }"#;

    let fixtures = Fixtures::from_json(json).unwrap();
    let party = fixtures.select(LedgerKind::General);
    assert_eq!(party.name(), "Mehta & Sons");
    assert!(!party.is_consistent());

    let rows = party.rows(&LocaleFormatter::new(Currency::Inr));
    assert_eq!(rows[0][0].text(), "02 Mar 2024");
    assert_eq!(rows[0][3].text(), "₹1,500");
    assert_eq!(rows[0][4].text(), "₹0");
    assert_eq!(rows[0][8].text(), "Partial");

    assert!(fixtures.select(LedgerKind::Supplier).rows(&LocaleFormatter::default()).is_empty());
}

#[test]
fn malformed_fixtures_are_rejected() {
    let err = Fixtures::from_json("{\"party\": 3}").unwrap_err();
    assert!(matches!(err, LedgerError::Fixture(_)));

    let err = Fixtures::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, LedgerError::Io(_)));
}
