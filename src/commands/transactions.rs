// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{Transaction, TransactionKind};
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, parse_month, parse_year, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TransactionKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    let tx = store::insert_transaction(conn, kind, amount, description, date)?;
    println!(
        "Recorded {} of {} on {} ('{}', id {})",
        tx.kind,
        fmt_money(&tx.amount),
        tx.occurred_at,
        tx.description,
        tx.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.occurred_at.to_string(),
                    t.kind.to_string(),
                    fmt_money(&t.amount),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Kind", "Amount", "Description"], rows)
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store::delete_transaction(conn, id)? {
        println!("Deleted transaction {}", id);
        Ok(())
    } else {
        Err(anyhow::anyhow!("Transaction {} not found", id))
    }
}

/// Resolve the list filters from the CLI matches and fetch matching rows.
/// A month filter only makes sense inside a year.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let month = sub.get_one::<String>("month").map(|s| parse_month(s)).transpose()?;
    let year = sub.get_one::<String>("year").map(|s| parse_year(s)).transpose()?;
    match (month, year) {
        (Some(m), Some(y)) => store::list_transactions(conn, m, y),
        (None, Some(y)) => store::list_transactions_for_year(conn, y),
        (Some(_), None) => Err(anyhow::anyhow!("--month requires --year")),
        (None, None) => store::list_all_transactions(conn),
    }
}
