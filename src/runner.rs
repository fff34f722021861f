use std::io::Write;

use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::db::{
    AccountStore, BalanceFilter, CustomerAccount, DatabaseError, SqliteAccountStore,
    database_exists,
};
use crate::report::{self, AccountLine};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Connected,
    SchemaReady,
    Seeded,
    AlreadyPopulated,
    Aggregated,
    Reported,
}

fn enter(stage: Stage) {
    info!(stage = ?stage, "batch stage reached");
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub seeded: bool,
    pub average: Option<f64>,
    pub accounts: Vec<CustomerAccount>,
}

/// Opens the configured database and runs the whole batch against it.
/// The connection lives for the duration of this call and is released on
/// every return path.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, RunError> {
    let database = &config.database;

    writeln!(out, "{}", report::CONNECTING)?;
    let path = database.database_path();
    info!(
        path = %path.display(),
        exists = database_exists(&database.data_dir, &database.filename),
        "opening customer database"
    );

    let mut store = SqliteAccountStore::open(&path)?;
    info!(path = store.path(), "customer database connected");
    enter(Stage::Connected);

    execute(&mut store, config, out)
}

/// Runs the batch steps against an already connected store.
pub fn execute<S, W>(store: &mut S, config: &Config, out: &mut W) -> Result<RunSummary, RunError>
where
    S: AccountStore,
    W: Write,
{
    let database = &config.database;
    let filter = BalanceFilter::from(&config.report);

    writeln!(out, "{}", report::CHECKING_TABLE)?;
    store.ensure_schema(&database.schema_script)?;
    enter(Stage::SchemaReady);

    let seeded = if store.has_rows(&database.table)? {
        enter(Stage::AlreadyPopulated);
        false
    } else {
        writeln!(out, "{}", report::SEEDING_TABLE)?;
        store.load_seed(&database.seed_script)?;
        enter(Stage::Seeded);
        true
    };

    writeln!(out, "{}", report::COMPUTING_AVERAGE)?;
    let average = store.average_balance(&filter)?;
    writeln!(out, "{}", report::average_line(average))?;
    enter(Stage::Aggregated);

    writeln!(out, "{}", report::LISTING_ACCOUNTS)?;
    let accounts = store.list_accounts(&filter)?;
    for account in &accounts {
        writeln!(out, "{}", AccountLine(account))?;
    }
    enter(Stage::Reported);

    Ok(RunSummary {
        seeded,
        average,
        accounts,
    })
}
