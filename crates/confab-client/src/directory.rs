//! One-shot query for conversation partners.

use std::future::Future;

use uuid::Uuid;

use confab_types::models::User;

use crate::error::DirectoryError;

/// Backend query listing every registered user.
pub trait UserDirectory {
    fn users(&self) -> impl Future<Output = Result<Vec<User>, DirectoryError>> + Send;
}

/// Everyone the local user can start a conversation with: all registered
/// users except themselves. An empty result after that exclusion is an
/// error the caller renders as "no users available".
pub async fn list_contacts<D: UserDirectory>(
    directory: &D,
    local_id: Uuid,
) -> Result<Vec<User>, DirectoryError> {
    let mut users = directory.users().await?;
    users.retain(|u| u.id != local_id);
    if users.is_empty() {
        return Err(DirectoryError::NoUsers);
    }
    Ok(users)
}
