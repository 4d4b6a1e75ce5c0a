use uuid::Uuid;
use crate::api::models::{ Credentials, User };
use crate::api::{ ApiError, DataAccessService, DataError, PasswordService };

/// Registration and credential checks.
#[derive(Clone)]
pub struct AccountService {
    data_access_service: DataAccessService,
    password_service: PasswordService
}

impl AccountService {
    pub fn new(data_access_service: DataAccessService, password_service: PasswordService) -> AccountService {
        AccountService { data_access_service, password_service }
    }

    /// Assigns a fresh id, replaces the plaintext password with its hash and
    /// stores the user.
    pub async fn register(&self, mut user: User) -> Result<User, ApiError> {
        let plaintext = std::mem::take(&mut user.password);
        user.password = self.password_service.hash(plaintext).await?;
        user.id = Some(Uuid::new_v4());
        self.data_access_service.insert_user(&user).await?;
        log::info!("Registered user {}", user.id.map(|id| id.to_string()).unwrap_or_default());
        Ok(user)
    }

    /// Returns the user's id when the password matches the stored hash. An
    /// unknown email and a wrong password fail identically.
    pub async fn authenticate(&self, credentials: Credentials) -> Result<String, ApiError> {
        let user = match self.data_access_service.find_user_by_email(&credentials.email).await {
            Ok(user) => user,
            Err(DataError::NotFound) => {
                log::info!("Login rejected");
                return Err(ApiError::InvalidCredentials);
            },
            Err(error) => return Err(error.into())
        };
        let user_id = user.id.map(|id| id.to_string()).ok_or(ApiError::InvalidCredentials)?;
        if !self.password_service.verify(credentials.password, user.password).await {
            log::info!("Login rejected");
            return Err(ApiError::InvalidCredentials);
        }
        log::info!("User {} logged in", user_id);
        Ok(user_id)
    }
}
