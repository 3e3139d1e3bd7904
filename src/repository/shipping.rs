use diesel::prelude::*;

use crate::domain::shipping::{NewShippingProfile, ShippingProfile};
use crate::domain::types::ShippingProfileId;
use crate::models::shipping::{
    NewShippingProfile as DbNewShippingProfile, ShippingProfile as DbShippingProfile,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ShippingProfileReader, ShippingProfileWriter};

impl ShippingProfileReader for DieselRepository {
    fn list_shipping_profiles(&self) -> RepositoryResult<Vec<ShippingProfile>> {
        use crate::schema::shipping_profiles;

        let mut conn = self.conn()?;

        let profiles = shipping_profiles::table
            .order(shipping_profiles::title.asc())
            .load::<DbShippingProfile>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ShippingProfile>, _>>()?;

        Ok(profiles)
    }

    fn get_shipping_profile_by_id(
        &self,
        id: ShippingProfileId,
    ) -> RepositoryResult<Option<ShippingProfile>> {
        use crate::schema::shipping_profiles;

        let mut conn = self.conn()?;

        let profile = shipping_profiles::table
            .find(id.get())
            .first::<DbShippingProfile>(&mut conn)
            .optional()?;

        let profile = profile.map(TryInto::try_into).transpose()?;
        Ok(profile)
    }
}

impl ShippingProfileWriter for DieselRepository {
    fn create_shipping_profile(&self, profile: &NewShippingProfile) -> RepositoryResult<usize> {
        use crate::schema::shipping_profiles;

        let mut conn = self.conn()?;
        let db_profile: DbNewShippingProfile = profile.clone().into();

        let affected = diesel::insert_into(shipping_profiles::table)
            .values(db_profile)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_shipping_profile(&self, id: ShippingProfileId) -> RepositoryResult<usize> {
        use crate::schema::shipping_profiles;

        let mut conn = self.conn()?;

        // Referencing products keep their profile id; reassignment is a
        // separate CP concern.
        let affected =
            diesel::delete(shipping_profiles::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
