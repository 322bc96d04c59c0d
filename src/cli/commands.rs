//! Command table and handlers for the tracker shell.

use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use crate::cli::core::{parse_amount, parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::currency::{format_amount, CURRENCY_FORMATS};
use crate::domain::{CategoryId, EntryKind, TransactionId};
use crate::export;
use crate::ledger::TransactionFilter;

pub(crate) type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub(crate) struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub(crate) struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|definition| definition.handler)
    }
}

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record a transaction",
            "add <income|expense> <amount> <YYYY-MM-DD> <category> [notes...]",
            cmd_add,
        ),
        CommandDefinition::new(
            "rm",
            "Delete a transaction by id",
            "rm <transaction_id>",
            cmd_rm,
        ),
        CommandDefinition::new(
            "list",
            "List transactions, optionally filtered",
            "list [--type <income|expense>] [--category <id|name>] [--from <date>] [--to <date>]",
            cmd_list,
        ),
        CommandDefinition::new(
            "summary",
            "Show income, expense, and balance totals",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "monthly",
            "Show totals bucketed by calendar month",
            "monthly",
            cmd_monthly,
        ),
        CommandDefinition::new("categories", "List categories", "categories", cmd_categories),
        CommandDefinition::new(
            "add-category",
            "Create a category",
            "add-category <income|expense> <name...>",
            cmd_add_category,
        ),
        CommandDefinition::new(
            "rm-category",
            "Delete an unused category",
            "rm-category <id|name>",
            cmd_rm_category,
        ),
        CommandDefinition::new(
            "currency",
            "Show or change the display currency",
            "currency [code]",
            cmd_currency,
        ),
        CommandDefinition::new(
            "export",
            "Write transactions to a CSV file",
            "export [path]",
            cmd_export,
        ),
        CommandDefinition::new(
            "clear-all",
            "Delete every transaction and restore the default categories",
            "clear-all",
            cmd_clear_all,
        ),
        CommandDefinition::new("help", "Show available commands", "help [command]", cmd_help),
        CommandDefinition::new("version", "Show version information", "version", cmd_version),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

/// Accepts a raw category id or a case-insensitive category name. Numeric
/// input passes through unchecked so deletions by id stay benign.
fn resolve_category(context: &ShellContext, reference: &str) -> Result<CategoryId, CommandError> {
    if let Ok(id) = reference.parse::<CategoryId>() {
        return Ok(id);
    }
    context
        .tracker()
        .ledger()
        .categories()
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(reference))
        .map(|category| category.id)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "category `{}` not found. Use `categories` to view available names.",
                reference
            ))
        })
}

fn resolve_existing_category(
    context: &ShellContext,
    reference: &str,
) -> Result<CategoryId, CommandError> {
    let id = resolve_category(context, reference)?;
    if context.tracker().ledger().category(id).is_none() {
        return Err(CommandError::InvalidArguments(format!(
            "category `{}` not found. Use `categories` to view available names.",
            reference
        )));
    }
    Ok(id)
}

fn parse_filter(context: &ShellContext, args: &[&str]) -> Result<TransactionFilter, CommandError> {
    let mut filter = TransactionFilter::default();
    let mut remaining = args;
    while let Some((&flag, rest)) = remaining.split_first() {
        let Some((&value, rest)) = rest.split_first() else {
            return Err(CommandError::InvalidArguments(format!(
                "`{}` requires a value",
                flag
            )));
        };
        match flag {
            "--type" => filter.kind = Some(value.parse()?),
            "--category" => filter.category_id = Some(resolve_category(context, value)?),
            "--from" => filter.from = Some(parse_date(value)?),
            "--to" => filter.to = Some(parse_date(value)?),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown list option `{}`",
                    other
                )))
            }
        }
        remaining = rest;
    }
    Ok(filter)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 4 {
        return Err(CommandError::InvalidArguments(
            "usage: add <income|expense> <amount> <YYYY-MM-DD> <category> [notes...]".into(),
        ));
    }
    let kind: EntryKind = args[0].parse()?;
    let amount = parse_amount(args[1])?;
    let date = parse_date(args[2])?;
    let category_id = resolve_existing_category(context, args[3])?;
    let notes = args[4..].join(" ");

    let transaction = context
        .tracker_mut()
        .add_transaction(kind, amount, date, category_id, notes)?;
    let rendered = format_amount(
        transaction.amount,
        context.tracker().ledger().currency().format(),
    );
    output::success(format!(
        "Recorded {} of {} on {} (id {}).",
        transaction.kind, rendered, transaction.date, transaction.id
    ));
    Ok(())
}

fn cmd_rm(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: rm <transaction_id>".into(),
        ));
    };
    let id: TransactionId = raw.parse().map_err(|_| {
        CommandError::InvalidArguments("transaction_id must be numeric".into())
    })?;
    match context.tracker_mut().remove_transaction(id)? {
        Some(transaction) => {
            output::success(format!("Transaction {} removed.", transaction.id));
        }
        None => output::warning(format!("No transaction with id {}.", id)),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = parse_filter(context, args)?;
    let ledger = context.tracker().ledger();
    let matches = ledger.filter(&filter);
    if matches.is_empty() {
        output::info("No transactions match.");
        return Ok(());
    }

    let format = ledger.currency().format();
    for transaction in matches {
        let sign = match transaction.kind {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        };
        let category = ledger
            .category(transaction.category_id)
            .map(|category| category.name.as_str())
            .unwrap_or("Unknown");
        let mut line = format!(
            "  [{:>3}] {}  {:<8} {:>14}  {}",
            transaction.id,
            transaction.date,
            transaction.kind.to_string(),
            format!("{}{}", sign, format_amount(transaction.amount, format)),
            category
        );
        if !transaction.notes.is_empty() {
            line.push_str("  ");
            line.push_str(&transaction.notes);
        }
        output::info(line);
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.tracker().ledger();
    let summary = ledger.summary();
    let format = ledger.currency().format();
    output::section("Summary");
    output::info(format!(
        "  Income  : {}",
        format_amount(summary.total_income, format)
    ));
    output::info(format!(
        "  Expenses: {}",
        format_amount(summary.total_expenses, format)
    ));
    output::info(format!(
        "  Balance : {}",
        format_amount(summary.balance, format)
    ));
    Ok(())
}

fn cmd_monthly(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.tracker().ledger();
    let series = ledger.monthly_series();
    if series.is_empty() {
        output::info("No transactions recorded.");
        return Ok(());
    }

    let format = ledger.currency().format();
    output::section("Monthly totals");
    for month in series {
        output::info(format!(
            "  {}  {:<9} income {:>14}  expense {:>14}",
            month.key(),
            month.label(),
            format_amount(month.income, format),
            format_amount(month.expense, format)
        ));
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.tracker().ledger();
    output::section("Categories");
    for category in ledger.categories() {
        output::info(format!(
            "  [{:>3}] {:<16} {}",
            category.id,
            category.name,
            category.kind.to_string()
        ));
    }
    Ok(())
}

fn cmd_add_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: add-category <income|expense> <name...>".into(),
        ));
    }
    let kind: EntryKind = args[0].parse()?;
    let name = args[1..].join(" ");
    let category = context.tracker_mut().add_category(&name, kind)?;
    output::success(format!(
        "Category `{}` added (id {}).",
        category.name, category.id
    ));
    Ok(())
}

fn cmd_rm_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(reference) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: rm-category <id|name>".into(),
        ));
    };
    let id = resolve_category(context, reference)?;
    match context.tracker_mut().remove_category(id)? {
        Some(category) => output::success(format!("Category `{}` removed.", category.name)),
        None => output::warning(format!("No category with id {}.", id)),
    }
    Ok(())
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(code) => {
            let currency = context.tracker_mut().set_currency(code)?;
            output::success(format!("Currency set to {}.", currency));
        }
        None => {
            let ledger = context.tracker().ledger();
            output::info(format!("Active currency: {}", ledger.currency()));
            let codes: Vec<&str> = CURRENCY_FORMATS.iter().map(|format| format.code).collect();
            output::info(format!("Supported: {}", codes.join(", ")));
        }
    }
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let count = context.tracker().ledger().transaction_count();
    if count == 0 {
        output::warning("No transactions to export.");
        return Ok(());
    }

    let path = match args.first() {
        Some(raw) => PathBuf::from(raw),
        None => PathBuf::from(export::export_file_name(
            context.tracker().ledger().currency(),
        )),
    };
    let file = File::create(&path)?;
    context.tracker().export_csv(file)?;
    output::success(format!(
        "Exported {} transactions to {}.",
        count,
        path.display()
    ));
    Ok(())
}

fn cmd_clear_all(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.confirm_action("Delete every transaction and restore the default categories?")? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    context.tracker_mut().clear_all()?;
    output::success("All data cleared.");
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.command(&name) {
            output::section(format!("Help: {}", entry.name));
            output::info(format!("  Description: {}", entry.description));
            output::info(format!("  Usage: {}", entry.usage));
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    output::section("Available commands");
    for entry in context.registry().iter() {
        output::info(format!("  {:<14} {}", entry.name, entry.description));
    }
    output::info("Use `help <command>` for details.");
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(format!("fintrack_core {}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
