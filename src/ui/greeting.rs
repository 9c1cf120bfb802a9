//! Greeting demo: the rendered text depends on the current role.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    #[default]
    User,
    Guest,
}

impl Role {
    /// "ADMIN" and "USER" are recognised exactly; anything else is a guest.
    pub fn parse(name: &str) -> Self {
        match name {
            "ADMIN" => Role::Admin,
            "USER" => Role::User,
            _ => Role::Guest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Guest => "GUEST",
        }
    }

    /// Admin -> User -> Guest -> Admin.
    pub fn cycle(self) -> Self {
        match self {
            Role::Admin => Role::User,
            Role::User => Role::Guest,
            Role::Guest => Role::Admin,
        }
    }
}

pub fn greeting(role: Role) -> &'static str {
    match role {
        Role::Admin => "Welcome ADMIN",
        Role::User => "Welcome User",
        Role::Guest => "Welcome Guest",
    }
}
