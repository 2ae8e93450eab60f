// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<u32> {
    let m: u32 = s
        .parse()
        .with_context(|| format!("Invalid month '{}', expected 1-12", s))?;
    if !(1..=12).contains(&m) {
        anyhow::bail!("Month {} out of range, expected 1-12", m);
    }
    Ok(m)
}

pub fn parse_year(s: &str) -> Result<i32> {
    s.parse::<i32>()
        .with_context(|| format!("Invalid year '{}'", s))
}

pub fn parse_due_day(s: &str) -> Result<u32> {
    let d: u32 = s
        .parse()
        .with_context(|| format!("Invalid due day '{}', expected 1-31", s))?;
    if !(1..=31).contains(&d) {
        anyhow::bail!("Due day {} out of range, expected 1-31", d);
    }
    Ok(d)
}

/// Amounts must be finite, non-negative decimals before they reach the
/// store or the engine.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = s
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    if d.is_sign_negative() {
        anyhow::bail!("Amount '{}' must not be negative", s);
    }
    Ok(d)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
