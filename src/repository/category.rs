use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::category::Category;
use crate::models::category::Category as DbCategory;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, DieselRepository};

define_sql_function! {
    /// SQL `lower`, used for case-insensitive category lookups.
    fn lower(x: Text) -> Text;
}

impl CategoryReader for DieselRepository {
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(lower(categories::name).eq(name.to_lowercase()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}
