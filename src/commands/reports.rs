// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fetch the record sets for a period, run the aggregation engine, and
//! render the result. The engine itself never touches the connection.

use anyhow::Result;
use rusqlite::Connection;

use crate::engine;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, month_label, parse_month, parse_year, pretty_table};

pub fn report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let year = parse_year(sub.get_one::<String>("year").unwrap())?;

    let transactions = store::list_transactions(conn, month, year)?;
    let fixed = store::list_fixed_expenses(conn, month, year)?;
    let limit = store::get_limit(conn, month, year)?.map(|l| l.amount);

    let rep = engine::monthly_report(month, year, &transactions, &fixed, limit);

    if maybe_print_json(json_flag, jsonl_flag, &rep)? {
        return Ok(());
    }

    let mut rows = vec![
        vec!["Income".to_string(), fmt_money(&rep.total_income)],
        vec![
            "Variable expenses".to_string(),
            fmt_money(&rep.total_variable_expenses),
        ],
        vec![
            "Fixed expenses".to_string(),
            fmt_money(&rep.total_fixed_expenses),
        ],
        vec![
            "  paid".to_string(),
            fmt_money(&rep.fixed_expenses_paid),
        ],
        vec![
            "  pending".to_string(),
            fmt_money(&rep.fixed_expenses_pending),
        ],
        vec!["Balance".to_string(), fmt_money(&rep.balance)],
    ];
    if let Some(l) = rep.configured_limit {
        rows.push(vec!["Limit".to_string(), fmt_money(&l)]);
    }
    println!("Report for {}/{}", month, year);
    println!("{}", pretty_table(&["Metric", "Amount"], rows));
    if rep.limit_exceeded {
        let spend = rep.total_variable_expenses + rep.total_fixed_expenses;
        println!(
            "⚠️  Spending limit exceeded: spent {} against a limit of {}",
            fmt_money(&spend),
            fmt_money(&rep.configured_limit.unwrap_or_default())
        );
    }

    if !transactions.is_empty() {
        let rows: Vec<Vec<String>> = transactions
            .iter()
            .map(|t| {
                vec![
                    t.occurred_at.to_string(),
                    t.kind.to_string(),
                    fmt_money(&t.amount),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Kind", "Amount", "Description"], rows)
        );
    }
    if !fixed.is_empty() {
        let rows: Vec<Vec<String>> = fixed
            .iter()
            .map(|f| {
                vec![
                    f.name.clone(),
                    fmt_money(&f.amount),
                    f.due_day.to_string(),
                    if f.paid { "paid" } else { "pending" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Fixed expense", "Amount", "Due day", "Status"], rows)
        );
    }
    Ok(())
}

pub fn dashboard(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = parse_year(sub.get_one::<String>("year").unwrap())?;

    let transactions = store::list_transactions_for_year(conn, year)?;
    let fixed = store::list_fixed_expenses_for_year(conn, year)?;

    let rollup = engine::dashboard_rollup(year, &transactions, &fixed);

    if !maybe_print_json(json_flag, jsonl_flag, &rollup)? {
        let rows: Vec<Vec<String>> = rollup
            .iter()
            .map(|s| {
                vec![
                    month_label(s.month).to_string(),
                    fmt_money(&s.income),
                    fmt_money(&s.total_expenses),
                    fmt_money(&s.variable_expenses),
                    fmt_money(&s.fixed_expenses),
                    fmt_money(&s.balance),
                ]
            })
            .collect();
        println!("Dashboard for {}", year);
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expenses", "Variable", "Fixed", "Balance"],
                rows
            )
        );
    }
    Ok(())
}
