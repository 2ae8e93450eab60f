// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed access to the sqlite record store. Amounts are stored as TEXT
//! decimal strings and parsed back into `Decimal` here, so everything
//! past this module only sees validated records.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;

use crate::models::{FixedExpense, MonthlyLimit, Transaction, TransactionKind};

fn transaction_from_row(r: &Row<'_>) -> Result<Transaction> {
    let id: i64 = r.get(0)?;
    let kind_s: String = r.get(1)?;
    let amount_s: String = r.get(2)?;
    let description: String = r.get(3)?;
    let occurred_s: String = r.get(4)?;
    let month: u32 = r.get(5)?;
    let year: i32 = r.get(6)?;
    let kind = kind_s
        .parse::<TransactionKind>()
        .with_context(|| format!("Transaction {} has invalid kind", id))?;
    let amount = amount_s
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}' for transaction {}", amount_s, id))?;
    let occurred_at = NaiveDate::parse_from_str(&occurred_s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' for transaction {}", occurred_s, id))?;
    Ok(Transaction {
        id,
        kind,
        amount,
        description,
        occurred_at,
        month,
        year,
    })
}

fn fixed_expense_from_row(r: &Row<'_>) -> Result<FixedExpense> {
    let id: i64 = r.get(0)?;
    let name: String = r.get(1)?;
    let amount_s: String = r.get(2)?;
    let amount = amount_s
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}' for fixed expense {}", amount_s, id))?;
    Ok(FixedExpense {
        id,
        name,
        amount,
        due_day: r.get(3)?,
        month: r.get(4)?,
        year: r.get(5)?,
        paid: r.get(6)?,
    })
}

const TX_COLS: &str = "id, kind, amount, description, occurred_at, month, year";
const FIXED_COLS: &str = "id, name, amount, due_day, month, year, paid";

/// Insert a transaction, deriving its month/year from the date.
pub fn insert_transaction(
    conn: &Connection,
    kind: TransactionKind,
    amount: Decimal,
    description: &str,
    occurred_at: NaiveDate,
) -> Result<Transaction> {
    conn.execute(
        "INSERT INTO transactions(kind, amount, description, occurred_at, month, year)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            kind.as_str(),
            amount.to_string(),
            description,
            occurred_at.to_string(),
            occurred_at.month(),
            occurred_at.year()
        ],
    )?;
    Ok(Transaction {
        id: conn.last_insert_rowid(),
        kind,
        amount,
        description: description.to_string(),
        occurred_at,
        month: occurred_at.month(),
        year: occurred_at.year(),
    })
}

pub fn list_transactions(conn: &Connection, month: u32, year: i32) -> Result<Vec<Transaction>> {
    let sql = format!(
        "SELECT {TX_COLS} FROM transactions WHERE month=?1 AND year=?2
         ORDER BY occurred_at DESC, id DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![month, year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(transaction_from_row(r)?);
    }
    Ok(out)
}

pub fn list_transactions_for_year(conn: &Connection, year: i32) -> Result<Vec<Transaction>> {
    let sql = format!(
        "SELECT {TX_COLS} FROM transactions WHERE year=?1 ORDER BY occurred_at DESC, id DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(transaction_from_row(r)?);
    }
    Ok(out)
}

pub fn list_all_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let sql = format!("SELECT {TX_COLS} FROM transactions ORDER BY occurred_at DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(transaction_from_row(r)?);
    }
    Ok(out)
}

/// Returns false when no row had the given id.
pub fn delete_transaction(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    Ok(n > 0)
}

pub fn insert_fixed_expense(
    conn: &Connection,
    name: &str,
    amount: Decimal,
    due_day: u32,
    month: u32,
    year: i32,
) -> Result<FixedExpense> {
    conn.execute(
        "INSERT INTO fixed_expenses(name, amount, due_day, month, year, paid)
         VALUES (?1, ?2, ?3, ?4, ?5, 0)",
        params![name, amount.to_string(), due_day, month, year],
    )?;
    Ok(FixedExpense {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        amount,
        due_day,
        month,
        year,
        paid: false,
    })
}

pub fn list_fixed_expenses(conn: &Connection, month: u32, year: i32) -> Result<Vec<FixedExpense>> {
    let sql = format!(
        "SELECT {FIXED_COLS} FROM fixed_expenses WHERE month=?1 AND year=?2
         ORDER BY due_day ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![month, year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(fixed_expense_from_row(r)?);
    }
    Ok(out)
}

pub fn list_fixed_expenses_for_year(conn: &Connection, year: i32) -> Result<Vec<FixedExpense>> {
    let sql = format!(
        "SELECT {FIXED_COLS} FROM fixed_expenses WHERE year=?1 ORDER BY month ASC, due_day ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params![year])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(fixed_expense_from_row(r)?);
    }
    Ok(out)
}

pub fn set_fixed_expense_paid(conn: &Connection, id: i64, paid: bool) -> Result<bool> {
    let n = conn.execute(
        "UPDATE fixed_expenses SET paid=?2 WHERE id=?1",
        params![id, paid],
    )?;
    Ok(n > 0)
}

pub fn delete_fixed_expense(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM fixed_expenses WHERE id=?1", params![id])?;
    Ok(n > 0)
}

/// Upsert: setting a limit for a (month, year) replaces any prior one.
pub fn set_limit(conn: &Connection, month: u32, year: i32, amount: Decimal) -> Result<()> {
    conn.execute(
        "INSERT INTO monthly_limits(month, year, amount) VALUES (?1, ?2, ?3)
         ON CONFLICT(month, year) DO UPDATE SET amount=excluded.amount",
        params![month, year, amount.to_string()],
    )?;
    Ok(())
}

pub fn get_limit(conn: &Connection, month: u32, year: i32) -> Result<Option<MonthlyLimit>> {
    let amount_s: Option<String> = conn
        .query_row(
            "SELECT amount FROM monthly_limits WHERE month=?1 AND year=?2",
            params![month, year],
            |r| r.get(0),
        )
        .optional()?;
    match amount_s {
        Some(s) => {
            let amount = s
                .parse::<Decimal>()
                .with_context(|| format!("Invalid limit '{}' for {}/{}", s, month, year))?;
            Ok(Some(MonthlyLimit {
                month,
                year,
                amount,
            }))
        }
        None => Ok(None),
    }
}

pub fn list_limits(conn: &Connection) -> Result<Vec<MonthlyLimit>> {
    let mut stmt =
        conn.prepare("SELECT month, year, amount FROM monthly_limits ORDER BY year, month")?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let month: u32 = r.get(0)?;
        let year: i32 = r.get(1)?;
        let amount_s: String = r.get(2)?;
        let amount = amount_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid limit '{}' for {}/{}", amount_s, month, year))?;
        out.push(MonthlyLimit {
            month,
            year,
            amount,
        });
    }
    Ok(out)
}
