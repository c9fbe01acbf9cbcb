use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

/// Repository for delivery areas
pub struct AreaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AreaRepository<'a, C> {
    /// Creates a new instance of [`AreaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active area
    pub async fn create(
        &self,
        name: &str,
        pincode: Option<String>,
    ) -> Result<entity::area::Model, DbErr> {
        let area = entity::area::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            pincode: ActiveValue::Set(pincode),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        area.insert(self.db).await
    }

    /// Get an area by ID
    pub async fn get(&self, area_id: i32) -> Result<Option<entity::area::Model>, DbErr> {
        entity::prelude::Area::find_by_id(area_id).one(self.db).await
    }

    /// All areas by name, each with the sellers assigned to it
    pub async fn list_with_sellers(
        &self,
    ) -> Result<Vec<(entity::area::Model, Vec<entity::seller::Model>)>, DbErr> {
        entity::prelude::Area::find()
            .order_by_asc(entity::area::Column::Name)
            .order_by_asc(entity::area::Column::Id)
            .find_with_related(entity::seller::Entity)
            .all(self.db)
            .await
    }

    /// Set whether an area accepts orders
    ///
    /// Returns `None` if the area does not exist.
    pub async fn set_active(
        &self,
        area_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::area::Model>, DbErr> {
        let Some(area) = self.get(area_id).await? else {
            return Ok(None);
        };

        let mut area_am = area.into_active_model();
        area_am.is_active = ActiveValue::Set(is_active);

        let area = area_am.update(self.db).await?;

        Ok(Some(area))
    }
}

#[cfg(test)]
mod tests {

    mod list_with_sellers {
        use bazaar_test_utils::prelude::*;
        use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

        use crate::server::data::area::AreaRepository;

        /// Expect areas sorted by name with their assigned sellers attached
        #[tokio::test]
        async fn attaches_sellers() -> Result<(), TestError> {
            let test = TestBuilder::new().with_seller_tables().build().await?;
            let whitefield = test.seller().insert_area("Whitefield").await?;
            test.seller().insert_area("Adugodi").await?;
            let (_, seller) = test
                .seller()
                .insert_seller(TEST_SELLER_PHONE, "Fresh Farms")
                .await?;
            let mut seller_am = seller.into_active_model();
            seller_am.area_id = ActiveValue::Set(Some(whitefield.id));
            seller_am.update(&test.db).await?;

            let area_repo = AreaRepository::new(&test.db);
            let result = area_repo.list_with_sellers().await?;

            assert_eq!(result.len(), 2);
            assert_eq!(result[0].0.name, "Adugodi");
            assert!(result[0].1.is_empty());
            assert_eq!(result[1].0.name, "Whitefield");
            assert_eq!(result[1].1.len(), 1);

            Ok(())
        }
    }

    mod set_active {
        use bazaar_test_utils::prelude::*;

        use crate::server::data::area::AreaRepository;

        /// Expect the flag to be written
        #[tokio::test]
        async fn deactivates_area() -> Result<(), TestError> {
            let test = TestBuilder::new().with_seller_tables().build().await?;
            let area = test.seller().insert_area("Whitefield").await?;

            let area_repo = AreaRepository::new(&test.db);
            let result = area_repo.set_active(area.id, false).await?;

            assert!(!result.unwrap().is_active);

            Ok(())
        }

        /// Expect None when the area does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_area() -> Result<(), TestError> {
            let test = TestBuilder::new().with_seller_tables().build().await?;

            let area_repo = AreaRepository::new(&test.db);
            let result = area_repo.set_active(1, false).await?;

            assert!(result.is_none());

            Ok(())
        }
    }
}
