use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Display, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Body of every 401 emitted by the gate guarding this role.
    pub fn unauthenticated_message(&self) -> &'static str {
        match self {
            Role::Admin => "You are not authenticated!",
            Role::User => "Unauthorized Access",
        }
    }

    pub fn already_exists_message(&self) -> &'static str {
        match self {
            Role::Admin => "Admin already exists",
            Role::User => "User already exists",
        }
    }

    pub fn created_message(&self) -> &'static str {
        match self {
            Role::Admin => "Admin created successfully",
            Role::User => "User created successfully",
        }
    }
}
