use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Client,
    Freelancer,
    Admin,
}

impl UserRole {
    /// Admin passes every role requirement.
    pub fn satisfies(self, required: UserRole) -> bool {
        self == required || self == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_satisfies_everything() {
        assert!(UserRole::Admin.satisfies(UserRole::Client));
        assert!(UserRole::Admin.satisfies(UserRole::Freelancer));
        assert!(UserRole::Client.satisfies(UserRole::Client));
        assert!(!UserRole::Client.satisfies(UserRole::Freelancer));
        assert!(!UserRole::Freelancer.satisfies(UserRole::Admin));
    }
}
