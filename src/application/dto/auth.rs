// src/application/dto/auth.rs
use crate::domain::user::UserId;

/// The caller as identified by the upstream authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}
