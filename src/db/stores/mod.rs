use std::path::Path;

use super::DatabaseError;
use super::models::{BalanceFilter, CustomerAccount};

pub trait AccountStore {
    /// Runs the table definition script. Expected to be safe on every run.
    fn ensure_schema(&mut self, script: &Path) -> Result<(), DatabaseError>;
    /// True when `table` holds at least one row.
    fn has_rows(&mut self, table: &str) -> Result<bool, DatabaseError>;
    /// Runs the bulk insert script. Callers guard it with `has_rows`.
    fn load_seed(&mut self, script: &Path) -> Result<(), DatabaseError>;
    /// Mean balance of the filtered accounts, `None` when nothing matches.
    fn average_balance(&mut self, filter: &BalanceFilter) -> Result<Option<f64>, DatabaseError>;
    /// Filtered accounts, highest balance first.
    fn list_accounts(
        &mut self,
        filter: &BalanceFilter,
    ) -> Result<Vec<CustomerAccount>, DatabaseError>;
}
