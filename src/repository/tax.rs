use diesel::prelude::*;

use crate::domain::tax::{NewTax, Tax};
use crate::domain::types::TaxId;
use crate::models::tax::{NewTax as DbNewTax, Tax as DbTax};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TaxReader, TaxWriter};

impl TaxReader for DieselRepository {
    fn get_tax_by_id(&self, id: TaxId) -> RepositoryResult<Option<Tax>> {
        use crate::schema::taxes;

        let mut conn = self.conn()?;

        let tax = taxes::table
            .find(id.get())
            .first::<DbTax>(&mut conn)
            .optional()?;

        let tax = tax.map(TryInto::try_into).transpose()?;
        Ok(tax)
    }
}

impl TaxWriter for DieselRepository {
    fn create_tax(&self, tax: &NewTax) -> RepositoryResult<usize> {
        use crate::schema::taxes;

        let mut conn = self.conn()?;
        let db_tax: DbNewTax = tax.clone().into();

        let affected = diesel::insert_into(taxes::table)
            .values(db_tax)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
