use super::UserService;
use crate::errors::Result;
use crate::models::users::entities::User;

pub async fn list_users(service: &UserService) -> Result<Vec<User>> {
    service.storage().list_users().await
}
