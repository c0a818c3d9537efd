//! # Static Security Registry
//!
//! A TOML file of users and their page read grants backs both the permission
//! resolver and the user directory. The registry is loaded once at bootstrap;
//! unknown users resolve to default-deny permissions and an absent directory
//! entry.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{PermissionSet, User};
use crate::services::{PermissionResolver, UserDirectory};

/// One `[[users]]` entry in the registry file.
#[derive(Debug, Clone, Deserialize)]
struct RegistryEntry {
    username: String,
    #[serde(default)]
    allow_all: bool,
    #[serde(default)]
    exceptions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    users: Vec<RegistryEntry>,
}

/// Parsed security registry shared by the resolver and the directory.
#[derive(Debug)]
pub struct SecurityRegistry {
    grants: HashMap<String, PermissionSet>,
}

impl SecurityRegistry {
    /// Parse registry TOML. Duplicate usernames keep the last entry.
    pub fn parse(raw: &str) -> ServiceResult<Self> {
        let file: RegistryFile =
            toml::from_str(raw).map_err(|e| ServiceError::Registry(e.to_string()))?;

        let grants = file
            .users
            .into_iter()
            .map(|entry| {
                let perms = PermissionSet {
                    allow_all: entry.allow_all,
                    exceptions: entry.exceptions.into_iter().collect::<HashSet<_>>(),
                };
                (entry.username, perms)
            })
            .collect();

        Ok(Self { grants })
    }

    /// Load the registry file from disk. A missing file yields an empty
    /// registry: every request is then denied, never errored.
    pub async fn load(path: &Path) -> ServiceResult<Arc<Self>> {
        let registry = match tokio::fs::read_to_string(path).await {
            Ok(raw) => Self::parse(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self {
                grants: HashMap::new(),
            },
            Err(e) => return Err(e.into()),
        };

        info!(
            users = registry.grants.len(),
            registry = %path.display(),
            "Security registry loaded"
        );
        Ok(Arc::new(registry))
    }

    fn permissions_for(&self, username: &str) -> PermissionSet {
        self.grants
            .get(username)
            .cloned()
            .unwrap_or_else(PermissionSet::deny_all)
    }

    fn contains(&self, username: &str) -> bool {
        self.grants.contains_key(username)
    }
}

/// Permission resolver over the static registry.
pub struct StaticPermissionResolver {
    registry: Arc<SecurityRegistry>,
}

impl StaticPermissionResolver {
    pub fn new(registry: Arc<SecurityRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl PermissionResolver for StaticPermissionResolver {
    async fn user_permissions(&self, username: &str) -> ServiceResult<PermissionSet> {
        Ok(self.registry.permissions_for(username))
    }
}

/// User directory over the static registry.
pub struct StaticUserDirectory {
    registry: Arc<SecurityRegistry>,
}

impl StaticUserDirectory {
    pub fn new(registry: Arc<SecurityRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn find_user(&self, username: &str) -> ServiceResult<Option<User>> {
        Ok(self.registry.contains(username).then(|| User {
            username: username.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = r#"
        [[users]]
        username = "admin"
        allow_all = true

        [[users]]
        username = "bob"
        exceptions = ["sales"]
    "#;

    #[tokio::test]
    async fn test_known_user_grants() {
        let registry = Arc::new(SecurityRegistry::parse(REGISTRY).unwrap());
        let resolver = StaticPermissionResolver::new(registry);

        let admin = resolver.user_permissions("admin").await.unwrap();
        assert!(admin.allow_all);

        let bob = resolver.user_permissions("bob").await.unwrap();
        assert!(!bob.allow_all);
        assert!(bob.exceptions.contains("sales"));
    }

    #[tokio::test]
    async fn test_unknown_user_is_denied_not_errored() {
        let registry = Arc::new(SecurityRegistry::parse(REGISTRY).unwrap());
        let resolver = StaticPermissionResolver::new(registry);

        let perms = resolver.user_permissions("mallory").await.unwrap();
        assert_eq!(perms, PermissionSet::deny_all());
    }

    #[tokio::test]
    async fn test_directory_lookup() {
        let registry = Arc::new(SecurityRegistry::parse(REGISTRY).unwrap());
        let directory = StaticUserDirectory::new(registry);

        assert!(directory.find_user("bob").await.unwrap().is_some());
        assert!(directory.find_user("mallory").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_registry_file_denies_everyone() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SecurityRegistry::load(&dir.path().join("absent.toml"))
            .await
            .unwrap();
        assert!(!registry.contains("admin"));
    }

    #[test]
    fn test_malformed_registry_is_an_error() {
        assert!(matches!(
            SecurityRegistry::parse("users = 3").unwrap_err(),
            ServiceError::Registry(_)
        ));
    }
}
