//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tokengate_auth::Registration;
use tokengate_entity::post::{NewPost, PostUpdate};
use tokengate_entity::user::UserProfileUpdate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Given name.
    #[validate(length(min = 2, max = 50, message = "First name must be 2 to 50 characters"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 2, max = 50, message = "Last name must be 2 to 50 characters"))]
    pub last_name: String,
    /// Age in years.
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: i32,
    /// Email address.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Plaintext password; policy is checked by the account service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<SignupRequest> for Registration {
    fn from(req: SignupRequest) -> Self {
        Registration {
            first_name: req.first_name,
            last_name: req.last_name,
            age: req.age,
            email: req.email,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Profile update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Given name.
    #[validate(length(min = 2, max = 50, message = "First name must be 2 to 50 characters"))]
    pub first_name: Option<String>,
    /// Family name.
    #[validate(length(min = 2, max = 50, message = "Last name must be 2 to 50 characters"))]
    pub last_name: Option<String>,
    /// Age in years.
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: Option<i32>,
}

impl From<UpdateUserRequest> for UserProfileUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        UserProfileUpdate {
            first_name: req.first_name,
            last_name: req.last_name,
            age: req.age,
        }
    }
}

/// Post creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Title.
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 10, message = "Body must be at least 10 characters"))]
    pub body: String,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        NewPost {
            title: req.title,
            body: req.body,
        }
    }
}

/// Post update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    /// Title.
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: Option<String>,
    /// Body text.
    #[validate(length(min = 10, message = "Body must be at least 10 characters"))]
    pub body: Option<String>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(req: UpdatePostRequest) -> Self {
        PostUpdate {
            title: req.title,
            body: req.body,
        }
    }
}
