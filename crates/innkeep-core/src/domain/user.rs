use serde::{Deserialize, Serialize};

/// User role as the backend spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Customer,
    Administrator,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from_wire(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "cliente",
            Role::Administrator => "administrador",
        }
    }

    /// Parse a backend role string; anything unrecognized is a customer.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "administrador" | "admin" => Role::Administrator,
            _ => Role::Customer,
        }
    }
}

/// User entity - the public view of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(rename = "tipo")]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }
}

/// Username and password pair sent to the login endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Bearer token plus the denormalized user it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}
