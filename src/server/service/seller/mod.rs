//! Seller administration and seller account resolution.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        seller::{AreaDto, SellerDetailDto, SellerDto, SellerStatusFilter, UpdateSellerFinancialsDto},
        user::ProfileDto,
    },
    server::{
        data::{area::AreaRepository, profile::ProfileRepository, seller::SellerRepository},
        error::{seller::SellerError, Error},
        policy::finance::SellerTerms,
    },
};

pub struct SellerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SellerService<'a> {
    /// Creates a new instance of [`SellerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seller row owned by the logged in `user_id`.
    ///
    /// # Returns
    /// - `Ok(seller::Model)` - Caller has a seller account
    /// - `Err(Error::SellerError(SellerError::AccountNotFound))` - No seller row for this user
    /// - `Err(Error::DbErr)` - Lookup failed
    pub async fn current_seller(&self, user_id: i32) -> Result<entity::seller::Model, Error> {
        let seller_repo = SellerRepository::new(self.db);

        seller_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| SellerError::AccountNotFound(user_id).into())
    }

    pub async fn list(&self, status: SellerStatusFilter) -> Result<Vec<SellerDto>, Error> {
        let seller_repo = SellerRepository::new(self.db);

        let is_active = match status {
            SellerStatusFilter::All => None,
            SellerStatusFilter::Active => Some(true),
            SellerStatusFilter::Inactive => Some(false),
        };

        let sellers = seller_repo.list(is_active).await?;

        Ok(sellers.into_iter().map(SellerDto::from).collect())
    }

    /// Seller with the owner's profile and assigned area, either of which may be missing
    pub async fn detail(&self, seller_id: i32) -> Result<SellerDetailDto, Error> {
        let seller_repo = SellerRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);

        let Some((seller, maybe_area)) = seller_repo.get_with_area(seller_id).await? else {
            return Err(SellerError::NotFound(seller_id).into());
        };

        let profile = profile_repo.find_by_user_id(seller.user_id).await?;

        Ok(SellerDetailDto {
            seller: SellerDto::from(seller),
            profile: profile.map(ProfileDto::from),
            area: maybe_area.map(AreaDto::from),
        })
    }

    /// Replaces a seller's commercial terms and area assignment.
    ///
    /// A `None` area clears the assignment.
    ///
    /// # Returns
    /// - `Ok(SellerDto)` - Updated seller
    /// - `Err(Error::SellerError(SellerError::InvalidCommission))` - Commission outside 0 to 100
    /// - `Err(Error::SellerError(SellerError::InvalidTechFee))` - Negative tech fee
    /// - `Err(Error::SellerError(SellerError::AreaNotFound))` - Area missing or inactive
    /// - `Err(Error::SellerError(SellerError::NotFound))` - No seller with this ID
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn update_financials(
        &self,
        seller_id: i32,
        update: UpdateSellerFinancialsDto,
    ) -> Result<SellerDto, Error> {
        let seller_repo = SellerRepository::new(self.db);
        let area_repo = AreaRepository::new(self.db);

        let terms = SellerTerms {
            commission_percentage: update.commission_percentage,
            tech_fee_type: update.tech_fee_type,
            tech_fee_amount: update.tech_fee_amount,
        };
        terms.validate()?;

        if let Some(area_id) = update.area_id {
            match area_repo.get(area_id).await? {
                Some(area) if area.is_active => {}
                _ => return Err(SellerError::AreaNotFound(area_id).into()),
            }
        }

        let Some(seller) = seller_repo
            .update_financials(
                seller_id,
                terms.commission_percentage,
                terms.tech_fee_type,
                terms.tech_fee_amount,
                update.area_id,
            )
            .await?
        else {
            return Err(SellerError::NotFound(seller_id).into());
        };

        tracing::info!("Updated commercial terms of seller ID {}", seller.id);

        Ok(SellerDto::from(seller))
    }

    pub async fn set_active(&self, seller_id: i32, is_active: bool) -> Result<SellerDto, Error> {
        let seller_repo = SellerRepository::new(self.db);

        let Some(seller) = seller_repo.set_active(seller_id, is_active).await? else {
            return Err(SellerError::NotFound(seller_id).into());
        };

        tracing::info!("Seller ID {} active: {}", seller.id, seller.is_active);

        Ok(SellerDto::from(seller))
    }
}
