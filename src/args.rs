//! These structs provide the CLI interface for the fintrack CLI.

use crate::search::SortKey;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// fintrack: a single-user personal finance tracker.
///
/// Record what you spend, search it with regular expressions, and keep an eye on a monthly
/// budget cap. Everything is stored as JSON files in a local data directory; there is no
/// server and no account.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Record a new transaction.
    Add(AddArgs),
    /// Change the fields of an existing transaction.
    Update(UpdateArgs),
    /// Delete a transaction.
    Delete(DeleteArgs),
    /// List transactions, optionally filtered by a regex search and reordered.
    List(ListArgs),
    /// Show the dashboard: totals, the trailing week, the budget line, and a category chart.
    Dashboard,
    /// Show or change the budget cap and currency conversion rates.
    #[command(subcommand)]
    Settings(SettingsSubcommand),
    /// Convert a base amount into each configured currency.
    Convert(ConvertArgs),
    /// Write all transactions to a pretty-printed JSON file.
    Export(ExportArgs),
    /// Replace all transactions with the contents of a JSON export file.
    Import(ImportArgs),
    /// Delete every transaction. Settings are kept.
    Clear(ClearArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where fintrack data is held. Defaults to ~/.fintrack
    #[arg(long, env = "FINTRACK_HOME", default_value_t = default_fintrack_home())]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf) -> Self {
        Self {
            log_level,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// Args for the `fintrack add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// What the money was spent on. 3-100 characters, no repeated words.
    #[arg(long, short = 'd')]
    description: String,

    /// The amount spent, e.g. 12.50. Positive, at most two decimal places.
    #[arg(long, short = 'a')]
    amount: String,

    /// A free-text category label, e.g. Food.
    #[arg(long, short = 'c')]
    category: String,

    /// The transaction date as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<String>,
}

impl AddArgs {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Args for the `fintrack update` command.
#[derive(Debug, Parser, Clone)]
pub struct UpdateArgs {
    /// The ID of the transaction to change.
    #[arg(long)]
    id: String,

    /// A new description.
    #[arg(long, short = 'd')]
    description: Option<String>,

    /// A new amount.
    #[arg(long, short = 'a')]
    amount: Option<String>,

    /// A new category.
    #[arg(long, short = 'c')]
    category: Option<String>,

    /// A new date as YYYY-MM-DD.
    #[arg(long)]
    date: Option<String>,
}

impl UpdateArgs {
    pub fn new(
        id: impl Into<String>,
        description: Option<String>,
        amount: Option<String>,
        category: Option<String>,
        date: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description,
            amount,
            category,
            date,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Args for the `fintrack delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The ID of the transaction to delete.
    #[arg(long)]
    id: String,

    /// Skip the confirmation question.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl DeleteArgs {
    pub fn new(id: impl Into<String>, yes: bool) -> Self {
        Self { id: id.into(), yes }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

/// Args for the `fintrack list` command.
#[derive(Debug, Default, Parser, Clone)]
pub struct ListArgs {
    /// A regular expression tested against each transaction's description, category and amount.
    #[arg(long, short = 's')]
    search: Option<String>,

    /// Make the search pattern case-sensitive.
    #[arg(long)]
    case_sensitive: bool,

    /// The ordering of the listing.
    #[arg(long, value_enum, default_value_t = SortKey::DateDesc)]
    sort: SortKey,
}

impl ListArgs {
    pub fn new(search: Option<String>, case_sensitive: bool, sort: SortKey) -> Self {
        Self {
            search,
            case_sensitive,
            sort,
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsSubcommand {
    /// Print the current settings.
    Show,
    /// Set the budget cap.
    Budget(BudgetArgs),
    /// Set the currency conversion rates.
    Rates(RatesArgs),
}

/// Args for the `fintrack settings budget` command.
#[derive(Debug, Parser, Clone)]
pub struct BudgetArgs {
    /// The new budget cap. May be 0, never negative.
    cap: Decimal,
}

impl BudgetArgs {
    pub fn new(cap: Decimal) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> Decimal {
        self.cap
    }
}

/// Args for the `fintrack settings rates` command.
#[derive(Debug, Parser, Clone)]
pub struct RatesArgs {
    /// The conversion factor from the base unit into EUR.
    #[arg(long)]
    eur: Decimal,

    /// The conversion factor from the base unit into GBP.
    #[arg(long)]
    gbp: Decimal,
}

impl RatesArgs {
    pub fn new(eur: Decimal, gbp: Decimal) -> Self {
        Self { eur, gbp }
    }

    pub fn eur(&self) -> Decimal {
        self.eur
    }

    pub fn gbp(&self) -> Decimal {
        self.gbp
    }
}

/// Args for the `fintrack convert` command.
#[derive(Debug, Parser, Clone)]
pub struct ConvertArgs {
    /// The base amount to convert.
    amount: Decimal,
}

impl ConvertArgs {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Args for the `fintrack export` command.
#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Where to write the export file. Defaults to ./transactions-<today>.json
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(out: Option<PathBuf>) -> Self {
        Self { out }
    }

    pub fn out(&self) -> Option<&Path> {
        self.out.as_deref()
    }
}

/// Args for the `fintrack import` command.
#[derive(Debug, Parser, Clone)]
pub struct ImportArgs {
    /// The JSON file to import. Must contain a JSON array of transactions.
    file: PathBuf,

    /// Skip the confirmation question.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl ImportArgs {
    pub fn new(file: impl Into<PathBuf>, yes: bool) -> Self {
        Self {
            file: file.into(),
            yes,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

/// Args for the `fintrack clear` command.
#[derive(Debug, Parser, Clone)]
pub struct ClearArgs {
    /// Skip the confirmation question.
    #[arg(long, short = 'y')]
    yes: bool,
}

impl ClearArgs {
    pub fn new(yes: bool) -> Self {
        Self { yes }
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

fn default_fintrack_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join(".fintrack"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or FINTRACK_HOME instead of relying on the default \
                fintrack home directory. If you continue using the program right now, you may \
                have problems!",
            );
            PathBuf::from(".fintrack")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
