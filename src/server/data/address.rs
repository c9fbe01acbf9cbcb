use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Repository for customer delivery addresses
pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    /// Creates a new instance of [`AddressRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get an address by ID
    pub async fn get(&self, address_id: i32) -> Result<Option<entity::address::Model>, DbErr> {
        entity::prelude::Address::find_by_id(address_id)
            .one(self.db)
            .await
    }

    /// All addresses of a user, default address first
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<entity::address::Model>, DbErr> {
        entity::prelude::Address::find()
            .filter(entity::address::Column::UserId.eq(user_id))
            .order_by_desc(entity::address::Column::IsDefault)
            .order_by_desc(entity::address::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
