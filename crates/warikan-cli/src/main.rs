//! Warikan CLI - split shared expenses from the terminal
//!
//! Talks to a running Warikan API server.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use api::{CreateExpenseRequest, ParticipantResponse, WarikanClient};
use config::Config;

/// Heading for per-participant owed totals (shares, not payments)
const TOTALS_HEADING: &str = "Share of expenses:";

#[derive(Parser)]
#[command(name = "warikan")]
#[command(about = "Warikan CLI - split shared expenses", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL for this invocation (overrides config)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage participants
    Participant {
        #[command(subcommand)]
        action: ParticipantAction,
    },

    /// Manage expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Show spending totals and who owes whom
    Summary,

    /// Preview how an amount would be split
    Split {
        /// Total amount (e.g. 100.00)
        amount: Decimal,
        /// Participant names or IDs
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ParticipantAction {
    /// List all participants
    List,
    /// Add a participant
    Add {
        /// Participant name
        name: String,
    },
    /// Remove a participant
    Remove {
        /// Participant ID or name
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ExpenseAction {
    /// List all expenses, newest first
    List,
    /// Record an expense (prompts for anything not given)
    Add {
        /// What the expense was for
        #[arg(short, long)]
        description: Option<String>,
        /// Total amount
        #[arg(short, long)]
        amount: Option<Decimal>,
        /// Who paid (name or ID)
        #[arg(short, long)]
        payer: Option<String>,
        /// Who shares it (comma-separated names or IDs)
        #[arg(short, long, value_delimiter = ',')]
        split: Vec<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Remove an expense
    Remove {
        /// Expense ID
        id: Uuid,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the API base URL
    SetUrl {
        /// Base URL (e.g. https://warikan.example.com)
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.url.as_deref());

    match cli.command {
        Commands::Participant { action } => cmd_participant(&base_url, action).await,
        Commands::Expense { action } => cmd_expense(&base_url, action).await,
        Commands::Summary => cmd_summary(&base_url).await,
        Commands::Split { amount, names } => cmd_split(&base_url, amount, names).await,
        Commands::Config { action } => cmd_config(config, action).await,
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_participant(base_url: &str, action: ParticipantAction) -> Result<()> {
    let client = WarikanClient::new(base_url);

    match action {
        ParticipantAction::List => {
            let participants = client
                .list_participants()
                .await
                .context("Failed to load participants. Please try again.")?;

            if participants.is_empty() {
                println!("No participants yet.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  warikan participant add <name>");
                return Ok(());
            }

            println!("{}", "Participants:".bold());
            for p in participants {
                println!("  {} {}", p.id.to_string().dimmed(), p.name.cyan());
            }
        }

        ParticipantAction::Add { name } => {
            if name.trim().is_empty() {
                bail!("Please enter a name");
            }

            let participant = client
                .create_participant(name.trim())
                .await
                .context("Failed to add participant. Please try again.")?;

            println!("{} Added {}", "✓".green(), participant.name.cyan());
        }

        ParticipantAction::Remove { id, yes } => {
            let participants = client
                .list_participants()
                .await
                .context("Failed to load participants. Please try again.")?;
            let participant = resolve_participant(&participants, &id)?;

            if !yes && !confirm(&format!("Remove participant '{}'?", participant.name))? {
                println!("Cancelled.");
                return Ok(());
            }

            client.delete_participant(participant.id).await?;
            println!("{} Removed {}", "✓".green(), participant.name.cyan());
        }
    }

    Ok(())
}

async fn cmd_expense(base_url: &str, action: ExpenseAction) -> Result<()> {
    let client = WarikanClient::new(base_url);

    match action {
        ExpenseAction::List => {
            let expenses = client
                .list_expenses()
                .await
                .context("Failed to load expenses. Please try again.")?;

            if expenses.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }

            println!("{}", "Expenses:".bold());
            for e in expenses {
                println!(
                    "  {} {} {} {}",
                    format_date(e.expense_date).dimmed(),
                    e.description.cyan().bold(),
                    format_money(e.total_amount).green(),
                    format!("paid by {}", e.payer_name).dimmed()
                );
                for share in &e.participants {
                    println!("      {} {}", share.name, format_money(share.amount_owed));
                }
                println!("      {}", e.id.to_string().dimmed());
            }
        }

        ExpenseAction::Add {
            description,
            amount,
            payer,
            split,
            date,
        } => {
            let participants = client
                .list_participants()
                .await
                .context("Failed to load participants. Please try again.")?;

            if participants.is_empty() {
                bail!("No participants yet. Add some with 'warikan participant add <name>'.");
            }

            let description = match description {
                Some(d) => d,
                None => Input::new()
                    .with_prompt("What was it for?")
                    .interact_text()
                    .context("Failed to read input")?,
            };

            let amount = match amount {
                Some(a) => a,
                None => Input::<Decimal>::new()
                    .with_prompt("Total amount")
                    .interact_text()
                    .context("Failed to read input")?,
            };

            let names: Vec<&str> = participants.iter().map(|p| p.name.as_str()).collect();

            let payer = match payer {
                Some(key) => resolve_participant(&participants, &key)?,
                None => {
                    let index = Select::new()
                        .with_prompt("Who paid?")
                        .items(&names)
                        .default(0)
                        .interact()
                        .context("Failed to read selection")?;
                    participants[index].clone()
                }
            };

            let participant_ids: Vec<Uuid> = if split.is_empty() {
                let defaults = vec![true; participants.len()];
                let selected = MultiSelect::new()
                    .with_prompt("Split between")
                    .items(&names)
                    .defaults(&defaults)
                    .interact()
                    .context("Failed to read selection")?;
                selected.into_iter().map(|i| participants[i].id).collect()
            } else {
                split
                    .iter()
                    .map(|key| resolve_participant(&participants, key).map(|p| p.id))
                    .collect::<Result<_>>()?
            };

            if participant_ids.is_empty() {
                bail!("At least one participant must be selected");
            }

            let request = CreateExpenseRequest {
                description,
                total_amount: amount,
                paid_by: payer.id,
                participant_ids,
                expense_date: date,
            };

            let expense = client
                .create_expense(&request)
                .await
                .context("Failed to add expense. Please try again.")?;

            println!(
                "{} {} {} on {}",
                "✓".green(),
                expense.description.cyan(),
                format_money(expense.total_amount).green(),
                format_date(expense.expense_date)
            );
            for share in &expense.participants {
                println!("    {} owes {}", share.name, format_money(share.amount_owed));
            }
        }

        ExpenseAction::Remove { id, yes } => {
            if !yes && !confirm(&format!("Delete expense {}?", id))? {
                println!("Cancelled.");
                return Ok(());
            }

            client
                .delete_expense(id)
                .await
                .context("Failed to delete expense. Please try again.")?;
            println!("{} Expense deleted", "✓".green());
        }
    }

    Ok(())
}

async fn cmd_summary(base_url: &str) -> Result<()> {
    let client = WarikanClient::new(base_url);
    let summary = client
        .summary()
        .await
        .context("Failed to load summary. Please try again.")?;

    if summary.expense_count == 0 {
        println!("No expenses recorded.");
        return Ok(());
    }

    println!("{}", TOTALS_HEADING.bold());
    for total in &summary.totals {
        println!("  {:<20} {}", total.name.cyan(), format_money(total.total));
    }
    println!(
        "  {:<20} {} ({} expenses)",
        "Total".bold(),
        format_money(summary.grand_total).bold(),
        summary.expense_count
    );

    println!("\n{}", "Balances:".bold());
    for b in &summary.balances {
        let net = if b.net > Decimal::ZERO {
            format!("is owed {}", format_money(b.net)).green()
        } else if b.net < Decimal::ZERO {
            format!("owes {}", format_money(-b.net)).red()
        } else {
            "settled".dimmed()
        };

        println!(
            "  {:<20} {} {}",
            b.name.cyan(),
            net,
            format!("(paid {}, share {})", format_money(b.paid), format_money(b.owes)).dimmed()
        );
    }

    Ok(())
}

async fn cmd_split(base_url: &str, amount: Decimal, names: Vec<String>) -> Result<()> {
    let client = WarikanClient::new(base_url);
    let participants = client
        .list_participants()
        .await
        .context("Failed to load participants. Please try again.")?;

    let ids = names
        .iter()
        .map(|key| resolve_participant(&participants, key).map(|p| p.id))
        .collect::<Result<Vec<_>>>()?;

    let preview = client.preview_split(amount, ids).await?;

    println!(
        "{} split {} ways ({})",
        format_money(amount).bold(),
        preview.shares.len(),
        preview.policy.dimmed()
    );
    for share in &preview.shares {
        let name = participants
            .iter()
            .find(|p| p.id == share.participant_id)
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        println!("  {:<20} {}", name.cyan(), format_money(share.amount));
    }

    if let Some(note) = rounding_note(preview.unassigned) {
        println!("  {}", note.yellow());
    }

    Ok(())
}

async fn cmd_config(mut config: Config, action: Option<ConfigAction>) -> Result<()> {
    match action {
        None => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
        }

        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(&url);

            let client = WarikanClient::new(&config.base_url);
            print!("Testing connection... ");
            match client.health().await {
                Ok(true) => println!("{}", "OK".green()),
                _ => println!("{}", "unreachable (saved anyway)".yellow()),
            }

            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

/// Find a participant by ID or case-insensitive name
fn resolve_participant(participants: &[ParticipantResponse], key: &str) -> Result<ParticipantResponse> {
    let key = key.trim();

    let found = match Uuid::parse_str(key) {
        Ok(id) => participants.iter().find(|p| p.id == id),
        Err(_) => participants.iter().find(|p| p.name.eq_ignore_ascii_case(key)),
    };

    found
        .cloned()
        .with_context(|| format!("No participant named '{}'", key))
}

/// Render an amount with exactly two decimals
fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Describe the gap between a total and the sum of its rounded shares
fn rounding_note(unassigned: Decimal) -> Option<String> {
    if unassigned > Decimal::ZERO {
        Some(format!("{} left over from rounding", format_money(unassigned)))
    } else if unassigned < Decimal::ZERO {
        Some(format!("{} over-assigned by rounding", format_money(-unassigned)))
    } else {
        None
    }
}

/// Render a date like "Oct 16, 2026"
fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
