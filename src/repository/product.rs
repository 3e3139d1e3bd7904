use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::product::{NewProduct, Product};
use crate::domain::tax::Tax;
use crate::domain::types::{CategoryId, CategoryName, ProductSlug};
use crate::domain::variant::{NewVariant, Variant};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::models::tax::Tax as DbTax;
use crate::models::variant::{NewVariant as DbNewVariant, Variant as DbVariant};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

/// Resolves the tax, category and variant relations of a product row and
/// assembles the domain record.
fn load_product(conn: &mut DbConnection, row: DbProduct) -> RepositoryResult<Product> {
    use crate::schema::{categories, category_product, taxes, variants};

    let tax: Tax = taxes::table
        .find(row.tax_id)
        .first::<DbTax>(conn)?
        .try_into()?;

    let category_names = category_product::table
        .inner_join(categories::table)
        .filter(category_product::product_id.eq(row.id))
        .order(categories::name.asc())
        .select(categories::name)
        .load::<String>(conn)?
        .into_iter()
        .map(CategoryName::new)
        .collect::<Result<Vec<_>, _>>()?;

    let product_variants = variants::table
        .filter(variants::product_slug.eq(&row.slug))
        .order(variants::id.asc())
        .load::<DbVariant>(conn)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<Variant>, _>>()?;

    Ok(row.into_domain(tax, category_names, product_variants)?)
}

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::{categories, category_product, products};

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();
            if query.available_only {
                items = items.filter(products::available.eq(true));
            }
            if let Some(search) = &query.search {
                items = items.filter(products::title.like(format!("%{search}%")));
            }
            if let Some(category) = &query.category {
                items = items.filter(
                    products::id.eq_any(
                        category_product::table
                            .inner_join(categories::table)
                            .filter(categories::name.eq(category.as_str()))
                            .select(category_product::product_id),
                    ),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items
            .order(products::title.asc())
            .load::<DbProduct>(&mut conn)?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(load_product(&mut conn, row)?);
        }

        Ok((total, result))
    }

    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .filter(products::slug.eq(slug.as_str()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(load_product(&mut conn, row)?)),
            None => Ok(None),
        }
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(
        &self,
        product: &NewProduct,
        category_ids: &[CategoryId],
    ) -> RepositoryResult<usize> {
        use crate::schema::{category_product, products};

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let affected = conn.transaction(|conn| {
            let product_id: i32 = diesel::insert_into(products::table)
                .values(&db_product)
                .returning(products::id)
                .get_result(conn)?;

            for category_id in category_ids {
                diesel::insert_into(category_product::table)
                    .values((
                        category_product::product_id.eq(product_id),
                        category_product::category_id.eq(category_id.get()),
                    ))
                    .execute(conn)?;
            }

            Ok::<usize, diesel::result::Error>(1)
        })?;

        Ok(affected)
    }

    fn create_variant(&self, variant: &NewVariant) -> RepositoryResult<usize> {
        use crate::schema::variants;

        let mut conn = self.conn()?;
        let db_variant: DbNewVariant = variant.clone().into();

        let affected = diesel::insert_into(variants::table)
            .values(db_variant)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
