use fractic_brokerage_ledger::{
    entities::{Partition, SettlementKey},
    util::BrokerageLedgerUtil,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const LEDGER_JSON: &str = r#"[
    {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "OPENING BALANCE", "CR_AMT": 50, "DR_AMT": 0},
    {"COCD": "BSE", "ACCOUNTCODE": "C100", "NARRATION": "ASSOCIATE OPENING BALANCE", "CR_AMT": 900, "DR_AMT": 0},
    {"COCD": "MTF", "ACCOUNTCODE": "C100", "NARRATION": "OPENING BALANCE", "CR_AMT": "0", "DR_AMT": "15.75"},
    {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "BILL NO 1101", "CR_AMT": 0, "DR_AMT": 20,
     "BILL_DATE": "2024-04-02", "MKT_TYPE": "N", "SETTLEMENT_NO": "2024061"},
    {"COCD": "ICL", "ACCOUNTCODE": "C100", "NARRATION": "INTERCOMPANY", "CR_AMT": 10000, "DR_AMT": 0},
    {"COCD": "MTF", "ACCOUNTCODE": "C100_F", "NARRATION": "MTF FUNDING", "CR_AMT": 0, "DR_AMT": "1,200.00"},
    {"COCD": "MTF", "ACCOUNTCODE": "C100", "NARRATION": "MTF INTEREST", "CR_AMT": 0, "DR_AMT": "NaN"},
    {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "RECEIPT", "CR_AMT": 30, "DR_AMT": null}
]"#;

#[tokio::test]
async fn reconciles_api_payload_per_partition() {
    let util = BrokerageLedgerUtil::new();
    let result = util.reconcile_from_string(LEDGER_JSON).await.unwrap();

    let group1: Vec<(Decimal, Decimal, Decimal)> = result
        .group1
        .rows
        .iter()
        .map(|r| (r.opening_balance, r.amount, r.closing_balance))
        .collect();
    assert_eq!(result.group1.opening_total, dec!(50));
    assert_eq!(
        group1,
        vec![(dec!(50), dec!(-20), dec!(30)), (dec!(30), dec!(30), dec!(60))]
    );
    assert_eq!(result.group1.closing_total, dec!(60));

    assert_eq!(result.mtf.opening_total, dec!(-15.75));
    assert_eq!(result.mtf.rows.len(), 1);
    assert_eq!(result.mtf.closing_total, dec!(-15.75));

    assert_eq!(result.mtff.opening_total, Decimal::ZERO);
    assert_eq!(result.mtff.closing_total, dec!(-1200));
}

#[tokio::test]
async fn totals_chain_in_every_partition() {
    let util = BrokerageLedgerUtil::new();
    let result = util.reconcile_from_string(LEDGER_JSON).await.unwrap();

    for (partition, p) in result.iter() {
        let sum: Decimal = p.rows.iter().map(|r| r.amount).sum();
        assert_eq!(p.closing_total, p.opening_total + sum, "{partition}");
        for pair in p.rows.windows(2) {
            assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
        }
        for r in &p.rows {
            assert_eq!(r.closing_balance, r.opening_balance + r.amount);
            assert_ne!(r.row.book_code, "ICL");
        }
    }
    assert_eq!(result.get(Partition::Group1), &result.group1);
}

#[tokio::test]
async fn display_order_is_most_recent_first() {
    let util = BrokerageLedgerUtil::new();
    let result = util.reconcile_from_string(LEDGER_JSON).await.unwrap();

    let narrations: Vec<&str> = result
        .group1
        .most_recent_first()
        .map(|r| r.row.narration.as_str())
        .collect();
    assert_eq!(narrations, vec!["RECEIPT", "BILL NO 1101"]);
    // Reversal is presentation only: chronological chain is untouched.
    assert_eq!(result.group1.rows[0].row.narration, "BILL NO 1101");
    assert_eq!(
        result.group1.rows[0].row.settlement(),
        Some(SettlementKey::new("N", "2024061"))
    );
    assert_eq!(result.group1.rows[1].row.settlement(), None);
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let util = BrokerageLedgerUtil::new();
    let first = util.reconcile_from_string(LEDGER_JSON).await.unwrap();
    let second = util.reconcile_from_string(LEDGER_JSON).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_ledger_reconciles_to_zero() {
    let util = BrokerageLedgerUtil::new();
    let result = util.reconcile_from_string("[]").await.unwrap();
    for (_, p) in result.iter() {
        assert_eq!(p.opening_total, Decimal::ZERO);
        assert_eq!(p.closing_total, Decimal::ZERO);
        assert!(p.rows.is_empty());
    }
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let util = BrokerageLedgerUtil::new();
    assert!(util.reconcile_from_string("not json").await.is_err());
    assert!(util.reconcile_from_string(r#"["row"]"#).await.is_err());
}

#[tokio::test]
async fn out_of_range_amounts_do_not_break_the_batch() {
    let payload = r#"[
        {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "OPENING BALANCE", "CR_AMT": "50000000000000000000000000000"},
        {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "OPENING BALANCE", "CR_AMT": "50000000000000000000000000000"},
        {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "BILL NO 7", "CR_AMT": "50000000000000000000000000000"},
        {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "BILL NO 8", "CR_AMT": 5e28, "DR_AMT": "10"},
        {"COCD": "NSE", "ACCOUNTCODE": "C100", "NARRATION": "RECEIPT", "CR_AMT": "25.50"}
    ]"#;
    let util = BrokerageLedgerUtil::new();
    let result = util.reconcile_from_string(payload).await.unwrap();

    assert_eq!(result.group1.opening_total, Decimal::ZERO);
    let amounts: Vec<Decimal> = result.group1.rows.iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![Decimal::ZERO, dec!(-10), dec!(25.50)]);
    assert_eq!(result.group1.closing_total, dec!(15.50));
}

#[tokio::test]
async fn reads_csv_and_json_files() {
    let dir = std::env::temp_dir().join(format!("brokerage-ledger-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();

    let csv_path = dir.join("ledger.csv");
    tokio::fs::write(
        &csv_path,
        "COCD,ACCOUNTCODE,NARRATION,CR_AMT,DR_AMT\n\
         NSE,C100,OPENING BALANCE,50,0\n\
         NSE,C100,BILL NO 1101,0,20\n",
    )
    .await
    .unwrap();
    let json_path = dir.join("ledger.json");
    tokio::fs::write(&json_path, LEDGER_JSON).await.unwrap();

    let util = BrokerageLedgerUtil::new();
    let from_csv = util.reconcile_from_file(&csv_path).await.unwrap();
    assert_eq!(from_csv.group1.closing_total, dec!(30));
    let from_json = util.reconcile_from_file(&json_path).await.unwrap();
    assert_eq!(from_json.group1.closing_total, dec!(60));

    assert!(util.reconcile_from_file(dir.join("missing.json")).await.is_err());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
