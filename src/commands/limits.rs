// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store;
use crate::utils::{fmt_money, parse_amount, parse_month, parse_year, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("list", _)) => list(conn)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let year = parse_year(sub.get_one::<String>("year").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    store::set_limit(conn, month, year, amount)?;
    println!("Limit set for {}/{} = {}", month, year, fmt_money(&amount));
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let year = parse_year(sub.get_one::<String>("year").unwrap())?;
    match store::get_limit(conn, month, year)? {
        Some(l) => println!("Limit for {}/{} = {}", month, year, fmt_money(&l.amount)),
        None => println!("No limit configured for {}/{}", month, year),
    }
    Ok(())
}

fn list(conn: &Connection) -> Result<()> {
    let limits = store::list_limits(conn)?;
    let rows: Vec<Vec<String>> = limits
        .iter()
        .map(|l| {
            vec![
                format!("{}/{}", l.month, l.year),
                fmt_money(&l.amount),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Period", "Limit"], rows));
    Ok(())
}
