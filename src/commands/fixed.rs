// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;
use crate::utils::{
    fmt_money, maybe_print_json, parse_amount, parse_due_day, parse_month, parse_year, pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("pay", sub)) => set_paid(conn, sub, true)?,
        Some(("unpay", sub)) => set_paid(conn, sub, false)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let due_day = parse_due_day(sub.get_one::<String>("due-day").unwrap())?;
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let year = parse_year(sub.get_one::<String>("year").unwrap())?;

    let fe = store::insert_fixed_expense(conn, name, amount, due_day, month, year)?;
    println!(
        "Added fixed expense '{}' of {} due day {} for {}/{} (id {})",
        fe.name,
        fmt_money(&fe.amount),
        fe.due_day,
        fe.month,
        fe.year,
        fe.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub.get_one::<String>("month").map(|s| parse_month(s)).transpose()?;
    let year = sub.get_one::<String>("year").map(|s| parse_year(s)).transpose()?;
    let data = match (month, year) {
        (Some(m), Some(y)) => store::list_fixed_expenses(conn, m, y)?,
        (None, Some(y)) => store::list_fixed_expenses_for_year(conn, y)?,
        (Some(_), None) => return Err(anyhow::anyhow!("--month requires --year")),
        (None, None) => return Err(anyhow::anyhow!("Provide --month and --year, or --year")),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|f| {
                vec![
                    f.id.to_string(),
                    f.name.clone(),
                    fmt_money(&f.amount),
                    f.due_day.to_string(),
                    format!("{}/{}", f.month, f.year),
                    if f.paid { "paid" } else { "pending" }.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Amount", "Due day", "Period", "Status"],
                rows
            )
        );
    }
    Ok(())
}

fn set_paid(conn: &Connection, sub: &clap::ArgMatches, paid: bool) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store::set_fixed_expense_paid(conn, id, paid)? {
        println!(
            "Fixed expense {} marked {}",
            id,
            if paid { "paid" } else { "pending" }
        );
        Ok(())
    } else {
        Err(anyhow::anyhow!("Fixed expense {} not found", id))
    }
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store::delete_fixed_expense(conn, id)? {
        println!("Deleted fixed expense {}", id);
        Ok(())
    } else {
        Err(anyhow::anyhow!("Fixed expense {} not found", id))
    }
}
