use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

/// Repository for the role assigned to each user
pub struct UserRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRoleRepository<'a, C> {
    /// Creates a new instance of [`UserRoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the explicitly assigned role of a user, if any
    pub async fn find_role(&self, user_id: i32) -> Result<Option<Role>, DbErr> {
        let user_role = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(user_role.map(|user_role| user_role.role))
    }

    /// Assign a role to a user, replacing any previous role.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT (user_id) DO UPDATE` against the unique
    /// index on `user_id`, so concurrent writers can never leave two rows for one user.
    pub async fn upsert(&self, user_id: i32, role: Role) -> Result<entity::user_role::Model, DbErr> {
        entity::prelude::UserRole::insert(entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user_role::Column::UserId)
                .update_column(entity::user_role::Column::Role)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Get the role rows of many users at once
    pub async fn find_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<entity::user_role::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.is_in(user_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// IDs of every user whose role row matches `role`
    pub async fn user_ids_with_role(&self, role: Role) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserRole::find()
            .select_only()
            .column(entity::user_role::Column::UserId)
            .filter(entity::user_role::Column::Role.eq(role))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// IDs of every user whose role row holds anything other than `role`
    pub async fn user_ids_without_role(&self, role: Role) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserRole::find()
            .select_only()
            .column(entity::user_role::Column::UserId)
            .filter(entity::user_role::Column::Role.ne(role))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Number of users holding `role`
    pub async fn count_by_role(&self, role: Role) -> Result<u64, DbErr> {
        entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::Role.eq(role))
            .count(self.db)
            .await
    }
}
