use crate::CP_ACCESS_ROLE;
use crate::domain::auth::{AuthenticatedUser, check_role};
use crate::domain::shipping::ShippingProfile;
use crate::domain::types::ShippingProfileId;
use crate::forms::shipping::AddShippingProfileFormPayload;
use crate::repository::{ShippingProfileReader, ShippingProfileWriter};

use super::{ServiceError, ServiceResult};

/// Lists all shipping profiles for the control panel.
pub fn show_shipping_profiles<R>(
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Vec<ShippingProfile>>
where
    R: ShippingProfileReader,
{
    if !check_role(CP_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    match repo.list_shipping_profiles() {
        Ok(profiles) => Ok(profiles),
        Err(e) => {
            log::error!("Failed to list shipping profiles: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Creates a shipping profile from the control panel.
pub fn add_shipping_profile<R>(
    payload: AddShippingProfileFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ShippingProfileWriter,
{
    if !check_role(CP_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    match repo.create_shipping_profile(&payload.profile) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create shipping profile: {e}");
            Ok(false)
        }
    }
}

/// Deletes a shipping profile from the control panel.
///
/// Products referencing the profile are not modified.
pub fn delete_shipping_profile<R>(
    id: i32,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ShippingProfileReader + ShippingProfileWriter,
{
    if !check_role(CP_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = match ShippingProfileId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_shipping_profile_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get shipping profile: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_shipping_profile(id) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete shipping profile: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ProfileTitle;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            email: "admin@example.com".into(),
            name: "Admin".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn sample_profile(id: i32) -> ShippingProfile {
        ShippingProfile {
            id: ShippingProfileId::new(id).unwrap(),
            title: ProfileTitle::new("Standard").unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn delete_removes_exactly_one_profile() {
        let repo = TestRepository::default().with_profiles(vec![sample_profile(1)]);
        let user = sample_user(&[CP_ACCESS_ROLE]);
        assert_eq!(repo.profile_count(), 1);

        assert!(delete_shipping_profile(1, &user, &repo).unwrap());
        assert_eq!(repo.profile_count(), 0);
    }

    #[test]
    fn delete_requires_the_admin_role() {
        let repo = TestRepository::default().with_profiles(vec![sample_profile(1)]);
        let user = sample_user(&[]);

        let err = delete_shipping_profile(1, &user, &repo).unwrap_err();
        assert_eq!(err, ServiceError::Unauthorized);
        assert_eq!(repo.profile_count(), 1);
    }

    #[test]
    fn deleting_a_missing_profile_is_not_found() {
        let repo = TestRepository::default();
        let user = sample_user(&[CP_ACCESS_ROLE]);

        let err = delete_shipping_profile(99, &user, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn listing_requires_the_admin_role() {
        let repo = TestRepository::default();
        let user = sample_user(&[]);

        let err = show_shipping_profiles(&user, &repo).unwrap_err();
        assert_eq!(err, ServiceError::Unauthorized);
    }
}
