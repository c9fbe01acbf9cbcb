//! Delivery area administration.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::seller::{AreaDto, AreaWithSellerDto, CreateAreaDto, SellerSummaryDto},
    server::{
        data::{area::AreaRepository, seller::SellerRepository},
        error::{seller::SellerError, Error},
    },
};

pub struct AreaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AreaService<'a> {
    /// Creates a new instance of [`AreaService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Areas by name, each with the first seller assigned to it if any
    pub async fn list(&self) -> Result<Vec<AreaWithSellerDto>, Error> {
        let area_repo = AreaRepository::new(self.db);

        let areas = area_repo.list_with_sellers().await?;

        Ok(areas
            .into_iter()
            .map(|(area, sellers)| AreaWithSellerDto {
                area: AreaDto::from(area),
                seller: sellers.into_iter().next().map(SellerSummaryDto::from),
            })
            .collect())
    }

    /// Creates an area and optionally assigns a seller to it.
    ///
    /// Both writes happen in one transaction, so a missing seller leaves no area behind.
    ///
    /// # Returns
    /// - `Ok(AreaWithSellerDto)` - Area created, with the assigned seller if requested
    /// - `Err(Error::SellerError(SellerError::InvalidAreaName))` - Blank name
    /// - `Err(Error::SellerError(SellerError::NotFound))` - Seller to assign does not exist
    /// - `Err(Error::DbErr)` - Query failed
    pub async fn create(&self, create: CreateAreaDto) -> Result<AreaWithSellerDto, Error> {
        let name = create.name.trim();
        if name.is_empty() {
            return Err(SellerError::InvalidAreaName.into());
        }
        let pincode = create
            .pincode
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let txn = self.db.begin().await?;
        let area_repo = AreaRepository::new(&txn);
        let seller_repo = SellerRepository::new(&txn);

        let area = area_repo.create(name, pincode).await?;

        let seller = match create.seller_id {
            Some(seller_id) => {
                let assigned = seller_repo.assign_area(seller_id, area.id).await?;
                let Some(seller) = assigned else {
                    txn.rollback().await?;

                    return Err(SellerError::NotFound(seller_id).into());
                };

                Some(seller)
            }
            None => None,
        };

        txn.commit().await?;

        tracing::info!("Created area {} with ID {}", area.name, area.id);

        Ok(AreaWithSellerDto {
            area: AreaDto::from(area),
            seller: seller.map(SellerSummaryDto::from),
        })
    }

    pub async fn set_active(&self, area_id: i32, is_active: bool) -> Result<AreaDto, Error> {
        let area_repo = AreaRepository::new(self.db);

        let Some(area) = area_repo.set_active(area_id, is_active).await? else {
            return Err(SellerError::AreaNotFound(area_id).into());
        };

        tracing::info!("Area ID {} active: {}", area.id, area.is_active);

        Ok(AreaDto::from(area))
    }
}
