use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let categories = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(categories)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let affected = diesel::insert_into(categories::table)
            .values(db_category)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
