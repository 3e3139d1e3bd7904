use diesel::prelude::*;

use crate::domain::order::{NewOrder, Order};
use crate::domain::types::OrderId;
use crate::models::order::{NewOrder as DbNewOrder, Order as DbOrder};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let order = orders::table
            .find(id.get())
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let order = order.map(TryInto::try_into).transpose()?;
        Ok(order)
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, order: &NewOrder) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_order: DbNewOrder = order.clone().into();

        let affected = diesel::insert_into(orders::table)
            .values(db_order)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
