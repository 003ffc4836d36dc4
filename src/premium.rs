use std::collections::HashSet;

use crate::config::Config;

/// Entitlement gate for the premium features (external model, meme images).
#[derive(Debug, Clone, Default)]
pub struct PremiumAccess {
    owner_id: Option<String>,
    allow_list: HashSet<String>,
}

impl PremiumAccess {
    pub fn new(owner_id: Option<String>, allow_list: impl IntoIterator<Item = String>) -> Self {
        PremiumAccess {
            owner_id,
            allow_list: allow_list.into_iter().collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.owner_id.clone(), config.premium_users.clone())
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner_id.as_deref() == Some(user_id)
    }

    /// The owner is always premium.
    pub fn is_premium(&self, user_id: &str) -> bool {
        self.is_owner(user_id) || self.allow_list.contains(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_premium() {
        let access = PremiumAccess::new(Some("1".to_string()), Vec::new());
        assert!(access.is_owner("1"));
        assert!(access.is_premium("1"));
        assert!(!access.is_premium("2"));
    }

    #[test]
    fn test_allow_list() {
        let access = PremiumAccess::new(None, vec!["2".to_string(), "3".to_string()]);
        assert!(access.is_premium("2"));
        assert!(access.is_premium("3"));
        assert!(!access.is_premium("4"));
        assert!(!access.is_owner("2"));
        assert!(!access.is_premium(""));
    }
}
