//! Console wording of the batch run.

use std::fmt;

use crate::db::CustomerAccount;

pub const CONNECTING: &str = "Conectando a base de dados...";
pub const CHECKING_TABLE: &str = "Checando tabela de clientes...";
pub const SEEDING_TABLE: &str = "Populando tabela de clientes...";
pub const COMPUTING_AVERAGE: &str = "Calculando média...";
pub const LISTING_ACCOUNTS: &str = "Clientes usados no cálculo de média...";

const NO_DATA: &str = "sem dados";

pub fn average_line(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("Média total: {value:.2}"),
        None => format!("Média total: {NO_DATA}"),
    }
}

pub struct AccountLine<'a>(pub &'a CustomerAccount);

impl fmt::Display for AccountLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.0;
        write!(
            f,
            "ID: {}, CPF/CNPJ: {}, Nome: {}, Ativo: {}, Saldo: {:.2}",
            account.id_customer,
            account.document_id,
            account.name,
            if account.active { "Sim" } else { "Não" },
            account.total_value
        )
    }
}
