use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_account(&self, phone: &str) -> Result<entity::account::Model, TestError> {
        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                phone: ActiveValue::Set(phone.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_profile(
        &self,
        user_id: i32,
        name: &str,
        phone: Option<&str>,
    ) -> Result<entity::profile::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                phone: ActiveValue::Set(phone.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an account with its profile and no role row
    pub async fn insert_user(
        &self,
        phone: &str,
        name: &str,
    ) -> Result<(entity::account::Model, entity::profile::Model), TestError> {
        let account = self.insert_account(phone).await?;
        let profile = self.insert_profile(account.id, name, Some(phone)).await?;

        Ok((account, profile))
    }

    /// Insert an account with its profile and an explicit role row
    pub async fn insert_user_with_role(
        &self,
        phone: &str,
        name: &str,
        role: Role,
    ) -> Result<(entity::account::Model, entity::profile::Model), TestError> {
        let (account, profile) = self.insert_user(phone, name).await?;
        self.insert_role(account.id, role).await?;

        Ok((account, profile))
    }

    pub async fn insert_role(
        &self,
        user_id: i32,
        role: Role,
    ) -> Result<entity::user_role::Model, TestError> {
        Ok(
            entity::prelude::UserRole::insert(entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_address(
        &self,
        user_id: i32,
        is_default: bool,
    ) -> Result<entity::address::Model, TestError> {
        Ok(
            entity::prelude::Address::insert(entity::address::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                house_no: ActiveValue::Set("12B".to_string()),
                landmark: ActiveValue::Set(Some("Near the water tank".to_string())),
                area: ActiveValue::Set("Indiranagar".to_string()),
                pincode: ActiveValue::Set("560038".to_string()),
                name: ActiveValue::Set(None),
                phone: ActiveValue::Set(None),
                is_default: ActiveValue::Set(is_default),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
