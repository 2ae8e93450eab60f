// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over already-fetched record sets. Nothing in here
//! touches the database or any ambient state; callers fetch, we fold.

use rust_decimal::Decimal;

use crate::models::{FixedExpense, MonthSummary, MonthlyReport, Transaction, TransactionKind};

/// Compute the report for one month from its record sets.
///
/// `transactions` and `fixed_expenses` must already be filtered to the
/// target (month, year); this function only sums what it is given. The
/// limit check compares variable + fixed spend against the ceiling with
/// strict `>` — income never participates, and a spend exactly equal to
/// the limit does not trip the alert.
pub fn monthly_report(
    month: u32,
    year: i32,
    transactions: &[Transaction],
    fixed_expenses: &[FixedExpense],
    limit: Option<Decimal>,
) -> MonthlyReport {
    let mut total_income = Decimal::ZERO;
    let mut total_variable = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TransactionKind::Income => total_income += t.amount,
            TransactionKind::Expense => total_variable += t.amount,
        }
    }

    let mut paid = Decimal::ZERO;
    let mut pending = Decimal::ZERO;
    for f in fixed_expenses {
        if f.paid {
            paid += f.amount;
        } else {
            pending += f.amount;
        }
    }
    let total_fixed = paid + pending;

    let spend = total_variable + total_fixed;
    let limit_exceeded = match limit {
        Some(ceiling) => spend > ceiling,
        None => false,
    };

    MonthlyReport {
        month,
        year,
        total_income,
        total_variable_expenses: total_variable,
        total_fixed_expenses: total_fixed,
        fixed_expenses_paid: paid,
        fixed_expenses_pending: pending,
        balance: total_income - spend,
        configured_limit: limit,
        limit_exceeded,
    }
}

/// Roll a year's records into exactly twelve per-month summaries.
///
/// Index `i` always corresponds to calendar month `i + 1`; months with
/// no records come back zero-filled, so chart consumers never see a
/// sparse sequence. Transactions are bucketed by their derived month,
/// fixed expenses by their explicit one.
pub fn dashboard_rollup(
    year: i32,
    transactions: &[Transaction],
    fixed_expenses: &[FixedExpense],
) -> Vec<MonthSummary> {
    (1..=12)
        .map(|month| {
            let mut income = Decimal::ZERO;
            let mut variable = Decimal::ZERO;
            for t in transactions.iter().filter(|t| t.month == month && t.year == year) {
                match t.kind {
                    TransactionKind::Income => income += t.amount,
                    TransactionKind::Expense => variable += t.amount,
                }
            }
            let fixed: Decimal = fixed_expenses
                .iter()
                .filter(|f| f.month == month && f.year == year)
                .map(|f| f.amount)
                .sum();
            MonthSummary {
                month,
                income,
                total_expenses: variable + fixed,
                variable_expenses: variable,
                fixed_expenses: fixed,
                balance: income - variable - fixed,
            }
        })
        .collect()
}
