//! CSV export of the transaction list.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::currency::CurrencyCode;
use crate::domain::{Category, Transaction};
use crate::errors::Result;

const HEADER: &str = "Type,Amount,Currency,Date,Category,Notes\n";

/// Default file name for an export, derived from the active currency.
pub fn export_file_name(currency: &CurrencyCode) -> String {
    format!("finance-transactions-{currency}.csv")
}

/// Writes every transaction as CSV: a bare header line, then one fully
/// quoted record per transaction in insertion order. Amounts are written as
/// plain numbers and the active currency code repeats on each row. A
/// transaction whose category no longer resolves exports as `Unknown`.
pub fn write_csv<W: Write>(
    transactions: &[Transaction],
    categories: &[Category],
    currency: &CurrencyCode,
    mut writer: W,
) -> Result<()> {
    writer.write_all(HEADER.as_bytes())?;
    let mut records = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);
    for transaction in transactions {
        let category_name = categories
            .iter()
            .find(|category| category.id == transaction.category_id)
            .map(|category| category.name.as_str())
            .unwrap_or("Unknown");
        records.write_record([
            transaction.kind.to_string().as_str(),
            transaction.amount.to_string().as_str(),
            currency.as_str(),
            transaction.date.to_string().as_str(),
            category_name,
            transaction.notes.as_str(),
        ])?;
    }
    records.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use insta::assert_snapshot;

    use crate::domain::EntryKind;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn export_to_string(
        transactions: &[Transaction],
        categories: &[Category],
        currency: &CurrencyCode,
    ) -> String {
        let mut buffer = Vec::new();
        write_csv(transactions, categories, currency, &mut buffer).expect("export");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn exports_header_and_quoted_rows() {
        let categories = Category::default_set();
        let transactions = vec![
            Transaction::new(1, EntryKind::Income, 1200.0, date(2024, 1, 5), 1, "pay"),
            Transaction::new(2, EntryKind::Expense, 42.5, date(2024, 3, 1), 5, "lunch"),
        ];
        let output = export_to_string(&transactions, &categories, &CurrencyCode::default());
        assert_snapshot!(output, @r###"
        Type,Amount,Currency,Date,Category,Notes
        "income","1200","USD","2024-01-05","Salary","pay"
        "expense","42.5","USD","2024-03-01","Food","lunch"
        "###);
    }

    #[test]
    fn dangling_category_references_export_as_unknown() {
        let transactions = vec![Transaction::new(
            1,
            EntryKind::Expense,
            9.99,
            date(2024, 2, 2),
            77,
            "",
        )];
        let output = export_to_string(&transactions, &[], &CurrencyCode::new("GBP"));
        assert_snapshot!(output, @r###"
        Type,Amount,Currency,Date,Category,Notes
        "expense","9.99","GBP","2024-02-02","Unknown",""
        "###);
    }

    #[test]
    fn notes_with_delimiters_stay_a_single_field() {
        let categories = Category::default_set();
        let transactions = vec![Transaction::new(
            1,
            EntryKind::Expense,
            5.0,
            date(2024, 4, 4),
            5,
            "coffee, \"extra\" shot",
        )];
        let output = export_to_string(&transactions, &categories, &CurrencyCode::default());
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(output.as_bytes());
        let record = reader
            .records()
            .next()
            .expect("one record")
            .expect("valid csv");
        assert_eq!(record.len(), 6);
        assert_eq!(&record[5], "coffee, \"extra\" shot");
    }

    #[test]
    fn empty_ledgers_export_just_the_header() {
        let output = export_to_string(&[], &[], &CurrencyCode::default());
        assert_eq!(output, HEADER);
    }

    #[test]
    fn file_name_carries_the_currency_code() {
        assert_eq!(
            export_file_name(&CurrencyCode::new("EUR")),
            "finance-transactions-EUR.csv"
        );
    }
}
