// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

use fluxo::models::TransactionKind;
use fluxo::store;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE transactions(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
            amount TEXT NOT NULL,
            description TEXT NOT NULL,
            occurred_at TEXT NOT NULL,
            month INTEGER NOT NULL,
            year INTEGER NOT NULL
        );
        CREATE TABLE fixed_expenses(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            amount TEXT NOT NULL,
            due_day INTEGER NOT NULL,
            month INTEGER NOT NULL,
            year INTEGER NOT NULL,
            paid INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE monthly_limits(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            month INTEGER NOT NULL,
            year INTEGER NOT NULL,
            amount TEXT NOT NULL,
            UNIQUE(month, year)
        );
        "#,
    )
    .unwrap();
    conn
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn transaction_month_year_derived_from_date() {
    let conn = setup();
    let tx = store::insert_transaction(
        &conn,
        TransactionKind::Income,
        dec("5000"),
        "salary",
        date(2025, 8, 5),
    )
    .unwrap();
    assert_eq!(tx.month, 8);
    assert_eq!(tx.year, 2025);
}

#[test]
fn transactions_filtered_by_period_and_sorted_date_desc() {
    let conn = setup();
    for (d, desc) in [
        (date(2025, 8, 1), "first"),
        (date(2025, 8, 20), "last"),
        (date(2025, 8, 10), "middle"),
        (date(2025, 7, 31), "other month"),
        (date(2024, 8, 15), "other year"),
    ] {
        store::insert_transaction(&conn, TransactionKind::Expense, dec("10"), desc, d).unwrap();
    }
    let rows = store::list_transactions(&conn, 8, 2025).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].description, "last");
    assert_eq!(rows[1].description, "middle");
    assert_eq!(rows[2].description, "first");

    let year_rows = store::list_transactions_for_year(&conn, 2025).unwrap();
    assert_eq!(year_rows.len(), 4);
}

#[test]
fn delete_transaction_reports_missing_id() {
    let conn = setup();
    let tx = store::insert_transaction(
        &conn,
        TransactionKind::Expense,
        dec("1"),
        "coffee",
        date(2025, 1, 1),
    )
    .unwrap();
    assert!(store::delete_transaction(&conn, tx.id).unwrap());
    assert!(!store::delete_transaction(&conn, tx.id).unwrap());
    assert!(store::list_transactions(&conn, 1, 2025).unwrap().is_empty());
}

#[test]
fn fixed_expenses_sorted_by_due_day() {
    let conn = setup();
    store::insert_fixed_expense(&conn, "internet", dec("80"), 20, 8, 2025).unwrap();
    store::insert_fixed_expense(&conn, "rent", dec("1500"), 5, 8, 2025).unwrap();
    store::insert_fixed_expense(&conn, "gym", dec("40"), 12, 8, 2025).unwrap();

    let rows = store::list_fixed_expenses(&conn, 8, 2025).unwrap();
    let names: Vec<&str> = rows.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["rent", "gym", "internet"]);
}

#[test]
fn fixed_expense_paid_toggle_round_trips() {
    let conn = setup();
    let fe = store::insert_fixed_expense(&conn, "rent", dec("1500"), 5, 8, 2025).unwrap();
    assert!(!fe.paid);

    assert!(store::set_fixed_expense_paid(&conn, fe.id, true).unwrap());
    let rows = store::list_fixed_expenses(&conn, 8, 2025).unwrap();
    assert!(rows[0].paid);

    assert!(store::set_fixed_expense_paid(&conn, fe.id, false).unwrap());
    let rows = store::list_fixed_expenses(&conn, 8, 2025).unwrap();
    assert!(!rows[0].paid);

    assert!(!store::set_fixed_expense_paid(&conn, 9999, true).unwrap());
}

#[test]
fn fixed_expense_instances_are_per_month() {
    let conn = setup();
    store::insert_fixed_expense(&conn, "rent", dec("1500"), 5, 8, 2025).unwrap();
    // September has no instance until one is created explicitly
    assert!(store::list_fixed_expenses(&conn, 9, 2025).unwrap().is_empty());
}

#[test]
fn limit_upsert_replaces_prior_value() {
    let conn = setup();
    store::set_limit(&conn, 8, 2025, dec("2000")).unwrap();
    store::set_limit(&conn, 8, 2025, dec("1500")).unwrap();

    let l = store::get_limit(&conn, 8, 2025).unwrap().unwrap();
    assert_eq!(l.amount, dec("1500"));
    assert_eq!(store::list_limits(&conn).unwrap().len(), 1);
}

#[test]
fn limit_absent_is_none() {
    let conn = setup();
    assert!(store::get_limit(&conn, 8, 2025).unwrap().is_none());
}

#[test]
fn limits_listed_in_period_order() {
    let conn = setup();
    store::set_limit(&conn, 9, 2025, dec("100")).unwrap();
    store::set_limit(&conn, 1, 2025, dec("200")).unwrap();
    store::set_limit(&conn, 12, 2024, dec("300")).unwrap();

    let limits = store::list_limits(&conn).unwrap();
    let periods: Vec<(u32, i32)> = limits.iter().map(|l| (l.month, l.year)).collect();
    assert_eq!(periods, [(12, 2024), (1, 2025), (9, 2025)]);
}
