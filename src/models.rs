// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("Unknown transaction kind '{0}', expected 'income' or 'expense'")]
pub struct ParseKindError(pub String);

/// Closed set of transaction kinds. Anything else is rejected at the
/// boundary before a record exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense entry. `month`/`year` are always derived
/// from `occurred_at` when the record is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub occurred_at: NaiveDate,
    pub month: u32,
    pub year: i32,
}

/// One month's instance of a recurring obligation. Instances are not
/// rolled over automatically; each month is created on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub due_day: u32,
    pub month: u32,
    pub year: i32,
    pub paid: bool,
}

/// Spending ceiling for one (month, year). At most one exists per pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyLimit {
    pub month: u32,
    pub year: i32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub total_income: Decimal,
    pub total_variable_expenses: Decimal,
    pub total_fixed_expenses: Decimal,
    pub fixed_expenses_paid: Decimal,
    pub fixed_expenses_pending: Decimal,
    pub balance: Decimal,
    pub configured_limit: Option<Decimal>,
    pub limit_exceeded: bool,
}

/// One row of the yearly dashboard. The rollup always yields twelve of
/// these, calendar order, zero-filled when a month has no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: u32,
    pub income: Decimal,
    pub total_expenses: Decimal,
    pub variable_expenses: Decimal,
    pub fixed_expenses: Decimal,
    pub balance: Decimal,
}
