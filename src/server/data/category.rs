use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository for catalog categories
pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a category.
    ///
    /// Fails with a unique constraint violation if the slug is taken.
    pub async fn create(
        &self,
        name: &str,
        slug: &str,
        image_url: Option<String>,
    ) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    /// Get the category using a slug, if any
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// All categories ordered by name
    pub async fn list(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    /// Deletes a category
    ///
    /// Returns OK regardless of the category existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
