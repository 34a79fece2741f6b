use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::{PatientError, RegisterRequest, UpdateProfileRequest, UserProfile};

pub struct ProfileService {
    profile: RwLock<UserProfile>,
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}

impl ProfileService {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }

    pub async fn current(&self) -> UserProfile {
        self.profile.read().await.clone()
    }

    pub async fn display_name(&self) -> String {
        self.profile.read().await.name.clone()
    }

    /// Applies a settings change. Fields left as `None` keep their value;
    /// the password changes only when a non-empty new password is confirmed.
    pub async fn update(&self, request: UpdateProfileRequest) -> Result<UserProfile, PatientError> {
        debug!("Updating user profile");

        if let Some(name) = &request.name {
            validate_name(name)?;
        }
        if let Some(email) = &request.email {
            validate_email(email)?;
        }

        let new_password = request
            .new_password
            .as_deref()
            .filter(|password| !password.is_empty());

        if let Some(password) = new_password {
            if request.confirm_new_password.as_deref() != Some(password) {
                warn!("Rejected password change: confirmation does not match");
                return Err(PatientError::PasswordMismatch);
            }
        }

        let mut profile = self.profile.write().await;
        if let Some(name) = request.name {
            profile.name = name.trim().to_string();
        }
        if let Some(email) = request.email {
            profile.email = email.trim().to_string();
        }
        if let Some(phone) = request.phone {
            profile.phone = phone.trim().to_string();
        }
        if let Some(password) = new_password {
            profile.password = password.to_string();
            info!("Password updated");
        }

        info!("Profile updated for {}", profile.email);
        Ok(profile.clone())
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserProfile, PatientError> {
        validate_name(&request.name)?;
        validate_email(&request.email)?;

        if request.password.is_empty() {
            return Err(PatientError::ValidationError("Password is required".to_string()));
        }
        if request.password != request.confirm_password {
            return Err(PatientError::PasswordMismatch);
        }

        let mut profile = self.profile.write().await;
        profile.name = request.name.trim().to_string();
        profile.email = request.email.trim().to_string();
        profile.password = request.password;

        info!("Registered {}", profile.email);
        Ok(profile.clone())
    }
}

fn validate_name(name: &str) -> Result<(), PatientError> {
    if name.trim().is_empty() {
        return Err(PatientError::ValidationError("Name cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), PatientError> {
    if !email.contains('@') {
        return Err(PatientError::ValidationError(format!("Invalid email address: {}", email)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let service = ProfileService::default();
        let updated = service
            .update(UpdateProfileRequest {
                phone: Some("555-000-1111".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.phone, "555-000-1111");
        assert_eq!(updated.name, "Usuario Ejemplo");
        assert_eq!(updated.password, "********");
    }

    #[tokio::test]
    async fn empty_new_password_leaves_password_alone() {
        let service = ProfileService::default();
        let updated = service
            .update(UpdateProfileRequest {
                new_password: Some(String::new()),
                confirm_new_password: Some("ignored".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.password, "********");
    }

    #[tokio::test]
    async fn mismatched_password_changes_nothing() {
        let service = ProfileService::default();
        let result = service
            .update(UpdateProfileRequest {
                name: Some("Otra Persona".to_string()),
                new_password: Some("secreta1".to_string()),
                confirm_new_password: Some("secreta2".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(result, Err(PatientError::PasswordMismatch));
        assert_eq!(service.display_name().await, "Usuario Ejemplo");
    }
}
