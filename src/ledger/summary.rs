use std::collections::BTreeMap;

use chrono::Datelike;

use crate::domain::EntryKind;

use super::Ledger;

/// Income, expense, and balance totals over the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Aggregated totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyTotals {
    /// Zero-padded sort key, e.g. `2024-03`.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Chart axis label, e.g. `Mar 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", month_label(self.month), self.year)
    }
}

impl Ledger {
    /// Totals over every transaction, ignoring any listing filters.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for transaction in self.transactions() {
            match transaction.kind {
                EntryKind::Income => summary.total_income += transaction.amount,
                EntryKind::Expense => summary.total_expenses += transaction.amount,
            }
        }
        summary.balance = summary.total_income - summary.total_expenses;
        summary
    }

    /// Per-month income and expense totals in ascending calendar order.
    pub fn monthly_series(&self) -> Vec<MonthlyTotals> {
        let mut buckets: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
        for transaction in self.transactions() {
            let slot = buckets
                .entry((transaction.date.year(), transaction.date.month()))
                .or_default();
            match transaction.kind {
                EntryKind::Income => slot.0 += transaction.amount,
                EntryKind::Expense => slot.1 += transaction.amount,
            }
        }
        buckets
            .into_iter()
            .map(|((year, month), (income, expense))| MonthlyTotals {
                year,
                month,
                income,
                expense,
            })
            .collect()
    }
}

fn month_label(month: u32) -> &'static str {
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
        _ => "",
    }
}
