use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::api::PageRequest, server::data::contains_ignore_case};

/// Which profiles a user list query returns
#[derive(Debug, Default, Clone)]
pub struct ProfileFilter {
    /// Case-insensitive match against name or phone
    pub search: Option<String>,
    /// Only these user IDs
    pub include_user_ids: Option<Vec<i32>>,
    /// Never these user IDs
    pub exclude_user_ids: Vec<i32>,
}

impl ProfileFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let search = search.trim();
            condition = condition.add(
                Condition::any()
                    .add(contains_ignore_case(entity::profile::Column::Name, search))
                    .add(contains_ignore_case(entity::profile::Column::Phone, search)),
            );
        }

        if let Some(user_ids) = &self.include_user_ids {
            condition = condition.add(entity::profile::Column::UserId.is_in(user_ids.clone()));
        }

        if !self.exclude_user_ids.is_empty() {
            condition = condition
                .add(entity::profile::Column::UserId.is_not_in(self.exclude_user_ids.clone()));
        }

        condition
    }
}

/// Repository for user profiles
pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the profile of a user
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        phone: Option<String>,
    ) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let profile = entity::profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            phone: ActiveValue::Set(phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    /// Get the profile of a user, if they have one
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Update the name & phone of a user's profile
    ///
    /// # Returns
    /// - `Some(`[`entity::profile::Model`]`)`: the updated profile
    /// - `None`: the user has no profile
    pub async fn update(
        &self,
        user_id: i32,
        name: &str,
        phone: Option<String>,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = self.find_by_user_id(user_id).await? else {
            return Ok(None);
        };

        let mut profile_am = profile.into_active_model();
        profile_am.name = ActiveValue::Set(name.to_string());
        profile_am.phone = ActiveValue::Set(phone);
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }

    /// Profiles of the given users, in no particular order
    pub async fn find_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.is_in(user_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// One page of profiles matching the filter, newest first, with the total match count
    pub async fn search(
        &self,
        filter: &ProfileFilter,
        page: PageRequest,
    ) -> Result<(Vec<entity::profile::Model>, u64), DbErr> {
        let paginator = entity::prelude::Profile::find()
            .filter(filter.condition())
            .order_by_desc(entity::profile::Column::CreatedAt)
            .order_by_desc(entity::profile::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let profiles = paginator.fetch_page(page.index()).await?;

        Ok((profiles, total))
    }
}
