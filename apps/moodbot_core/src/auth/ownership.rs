use sea_orm::DatabaseConnection;

use super::gate::current_identity;
use super::identity::Identity;
use crate::errors::AppError;

/// A row that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

/// Owner or admin may mutate; everybody else is refused.
pub fn assert_owner_or_admin<R: Owned + ?Sized>(
    identity: &Identity,
    resource: &R,
) -> Result<(), AppError> {
    if identity.subject_id == resource.owner_id() || identity.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Ownership check as used by the mutating routes.
///
/// Owners pass without I/O. For anybody else the admin claim is re-read from
/// the users table first, so a demoted admin holding an old token is refused.
pub async fn authorize_mutation<R: Owned + ?Sized>(
    db: &DatabaseConnection,
    identity: &Identity,
    resource: &R,
) -> Result<(), AppError> {
    if identity.subject_id == resource.owner_id() {
        return Ok(());
    }
    let current = current_identity(db, identity).await?;
    assert_owner_or_admin(&current, resource)
}
