use color_eyre::Result;

use super::models::CategoryModel;
use super::Db;

impl Db {
    pub async fn categories(&self) -> Result<Vec<CategoryModel>> {
        let categories =
            sqlx::query_as::<_, CategoryModel>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }
}
