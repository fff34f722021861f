use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::dsl::avg;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::db::schema::tb_customer_account;

use super::{
    AccountStore, DatabaseError,
    models::{BalanceFilter, CustomerAccount},
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tb_customer_account)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct DbCustomerAccount {
    id_customer: i32,
    document_id: String,
    name: String,
    active: bool,
    total_value: f64,
}

impl DbCustomerAccount {
    fn into_customer_account(self) -> CustomerAccount {
        CustomerAccount {
            id_customer: self.id_customer,
            document_id: self.document_id,
            name: self.name,
            active: self.active,
            total_value: self.total_value,
        }
    }
}

#[derive(QueryableByName)]
struct RowProbe {
    #[diesel(sql_type = Integer)]
    present: i32,
}

/// Whether the database file `name` already exists under `data_dir`.
pub fn database_exists(data_dir: &Path, name: &str) -> bool {
    data_dir.join(name).is_file()
}

fn establish_connection(path: &str) -> Result<SqliteConnection, DatabaseError> {
    SqliteConnection::establish(path).map_err(|e| DatabaseError::Connection(e.to_string()))
}

fn read_script(path: &Path) -> Result<String, DatabaseError> {
    std::fs::read_to_string(path).map_err(|e| DatabaseError::from_script_io(path.to_path_buf(), e))
}

fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Account store over a single sqlite connection. The connection is closed when
/// the store is dropped.
pub struct SqliteAccountStore {
    conn: SqliteConnection,
    path: String,
}

impl SqliteAccountStore {
    /// Opens the database file at `path`, creating it when absent.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        let path = path
            .to_str()
            .ok_or_else(|| {
                DatabaseError::Connection(format!(
                    "database path {} is not valid UTF-8",
                    path.display()
                ))
            })?
            .to_string();

        let conn = establish_connection(&path)?;
        debug!(path = %path, "sqlite connection opened");

        Ok(Self { conn, path })
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self, DatabaseError> {
        Self::open(Path::new(":memory:"))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    // The whole script runs in one transaction; a failing statement rolls back
    // everything the script did before it.
    fn execute_script(&mut self, script: &Path) -> Result<(), DatabaseError> {
        let sql = read_script(script)?;
        debug!(script = %script.display(), bytes = sql.len(), "executing sql script");

        self.conn.transaction::<_, DatabaseError, _>(|conn| {
            conn.batch_execute(&sql)
                .map_err(|e| DatabaseError::Script(e.to_string()))
        })
    }
}

impl Drop for SqliteAccountStore {
    fn drop(&mut self) {
        debug!(path = %self.path, "sqlite connection closed");
    }
}

impl AccountStore for SqliteAccountStore {
    fn ensure_schema(&mut self, script: &Path) -> Result<(), DatabaseError> {
        self.execute_script(script)
    }

    fn has_rows(&mut self, table: &str) -> Result<bool, DatabaseError> {
        let query = format!(
            "SELECT 1 AS present FROM {} LIMIT 1",
            quote_identifier(table)
        );

        let probe = diesel::sql_query(query)
            .get_result::<RowProbe>(&mut self.conn)
            .optional()
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        Ok(probe.is_some_and(|row| row.present == 1))
    }

    fn load_seed(&mut self, script: &Path) -> Result<(), DatabaseError> {
        self.execute_script(script)
    }

    fn average_balance(&mut self, filter: &BalanceFilter) -> Result<Option<f64>, DatabaseError> {
        use crate::db::schema::tb_customer_account::dsl::*;

        tb_customer_account
            .filter(id_customer.between(filter.min_customer_id, filter.max_customer_id))
            .filter(total_value.gt(filter.min_total_value))
            .select(avg(total_value))
            .get_result::<Option<f64>>(&mut self.conn)
            .map_err(|e| DatabaseError::Query(e.to_string()))
    }

    fn list_accounts(
        &mut self,
        filter: &BalanceFilter,
    ) -> Result<Vec<CustomerAccount>, DatabaseError> {
        use crate::db::schema::tb_customer_account::dsl::*;

        let rows = tb_customer_account
            .filter(id_customer.between(filter.min_customer_id, filter.max_customer_id))
            .filter(total_value.gt(filter.min_total_value))
            .order((total_value.desc(), id_customer.asc()))
            .select(DbCustomerAccount::as_select())
            .load::<DbCustomerAccount>(&mut self.conn)
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(DbCustomerAccount::into_customer_account)
            .collect())
    }
}
