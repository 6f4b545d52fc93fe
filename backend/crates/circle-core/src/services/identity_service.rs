use crate::{
    CoreError, CoreResult, CredentialHasher, InsertOutcome, Page, PageRequest, User, UserStore,
    normalize_email,
};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Raw signup fields as received from the caller
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SignupInput {
    /// First required field that is empty after trimming, in declaration order
    fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("email", &self.email),
            ("username", &self.username),
            ("password", &self.password),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

pub struct IdentityService<'a, S: UserStore + ?Sized, H: CredentialHasher + ?Sized> {
    users: &'a S,
    hasher: &'a H,
}

impl<'a, S: UserStore + ?Sized, H: CredentialHasher + ?Sized> IdentityService<'a, S, H> {
    pub fn new(users: &'a S, hasher: &'a H) -> Self {
        Self { users, hasher }
    }

    /// Create a user. Nothing is written unless every field is present.
    pub async fn create_user(&self, input: SignupInput) -> CoreResult<User> {
        if let Some(field) = input.first_missing_field() {
            return Err(CoreError::missing_field(field));
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let user = User::new(
            &input.email,
            input.username.trim().to_string(),
            input.first_name.trim().to_string(),
            input.last_name.trim().to_string(),
            password_hash,
        );

        match self.users.insert(&user).await? {
            InsertOutcome::Inserted => Ok(user),
            InsertOutcome::Duplicate => Err(CoreError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Unknown email, blank input and a wrong password all look the same
    pub async fn authenticate(&self, email: &str, password: &str) -> CoreResult<User> {
        let email = normalize_email(email);
        let user = if email.is_empty() || password.is_empty() {
            None
        } else {
            self.users.find_by_email(&email).await?
        };

        if let Some(user) = user {
            if self.hasher.verify(password, &user.password_hash).await {
                return Ok(user);
            }
        }

        Err(CoreError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn find_by_id(&self, id: Uuid) -> CoreResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("User", id))
    }

    pub async fn search_by_email_exact(
        &self,
        email: &str,
        page: PageRequest,
    ) -> CoreResult<Page<User>> {
        self.users
            .search_by_email(&email.to_lowercase(), page)
            .await
    }

    pub async fn search_by_name_contains(
        &self,
        fragment: &str,
        page: PageRequest,
    ) -> CoreResult<Page<User>> {
        self.users.search_by_name(fragment, page).await
    }
}
