//! In-memory profile repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::Profile;
use crate::ports::ProfileRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }

    /// Adds a profile, as the identity provider would on account creation.
    pub async fn add(&self, profile: Profile) {
        self.profiles.write().await.push(profile);
    }

    async fn modify<F>(&self, id: &UserId, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut Profile) + Send,
    {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.iter_mut().find(|p| &p.id == id).ok_or_else(|| {
            DomainError::new(ErrorCode::ProfileNotFound, format!("Profile {} not found", id))
                .with_detail("user_id", id.to_string())
        })?;
        change(profile);
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| &p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.profiles.read().await.clone())
    }

    async fn update_names(
        &self,
        id: &UserId,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<(), DomainError> {
        self.modify(id, |p| {
            p.first_name = first_name;
            p.last_name = last_name;
        })
        .await
    }

    async fn set_avatar_url(&self, id: &UserId, avatar_url: &str) -> Result<(), DomainError> {
        let avatar_url = avatar_url.to_string();
        self.modify(id, |p| p.avatar_url = Some(avatar_url)).await
    }

    async fn set_active(&self, id: &UserId, is_active: bool) -> Result<(), DomainError> {
        self.modify(id, |p| p.is_active = is_active).await
    }

    async fn activate_by_email(&self, email: &str) -> Result<usize, DomainError> {
        let mut profiles = self.profiles.write().await;
        let mut activated = 0;
        for profile in profiles
            .iter_mut()
            .filter(|p| p.email.as_deref() == Some(email))
        {
            profile.is_active = true;
            activated += 1;
        }
        Ok(activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, email: &str) -> Profile {
        Profile::new(UserId::new(id).unwrap(), email)
    }

    #[tokio::test]
    async fn activate_by_email_counts_matches() {
        let repo = InMemoryProfileRepository::with_profiles(vec![
            profile("u1", "amy@example.com"),
            profile("u2", "zack@example.com"),
        ]);
        assert_eq!(repo.activate_by_email("amy@example.com").await.unwrap(), 1);
        assert_eq!(repo.activate_by_email("nobody@example.com").await.unwrap(), 0);

        let amy = repo.find_by_id(&UserId::new("u1").unwrap()).await.unwrap().unwrap();
        assert!(amy.is_active);
    }

    #[tokio::test]
    async fn updates_names_and_avatar() {
        let repo = InMemoryProfileRepository::with_profiles(vec![profile("u1", "amy@example.com")]);
        let id = UserId::new("u1").unwrap();
        repo.update_names(&id, Some("Amy".to_string()), None).await.unwrap();
        repo.set_avatar_url(&id, "https://cdn.example.com/u1/1.png").await.unwrap();

        let amy = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(amy.display_name(), "Amy");
        assert_eq!(amy.avatar_url.as_deref(), Some("https://cdn.example.com/u1/1.png"));
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let repo = InMemoryProfileRepository::new();
        let err = repo
            .set_active(&UserId::new("ghost").unwrap(), true)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }
}
