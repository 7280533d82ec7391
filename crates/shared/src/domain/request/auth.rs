use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        custom(function = "crate::utils::required", message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,

    #[validate(custom(function = "crate::utils::required", message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        custom(function = "crate::utils::required", message = "Name is required"),
        length(min = 2, message = "Name must be at least 2 characters"),
        custom(
            function = "crate::utils::name_max",
            message = "Name must be less than 50 characters"
        )
    )]
    pub name: String,

    #[validate(
        custom(function = "crate::utils::required", message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,

    #[validate(
        custom(function = "crate::utils::required", message = "Password is required"),
        length(min = 5, message = "Password must be at least 5 characters"),
        custom(
            function = "crate::utils::password_max",
            message = "Password must be at most 10 characters"
        )
    )]
    pub password: String,
}
