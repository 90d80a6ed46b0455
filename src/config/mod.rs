//! Dashboard configuration loading
//!
//! Each resource on a dashboard is described by data, not code: its REST
//! path, its searchable-field whitelist, the identifier field, and whether
//! requests need the bearer token. Configuration is YAML, loaded once at
//! startup.
//!
//! ```yaml
//! resources:
//!   - name: illegal-vehicles
//!     path: /illegal-vehicles
//!     searchable_fields: [vehicle_number, location, status]
//!   - name: extortion-cases
//!     path: /extortion-cases
//!     searchable_fields: [area, outfit, amount]
//!     id_field: case_id
//!     requires_auth: true
//! ```

use crate::client::{ApiClients, ResourceClient};
use crate::core::error::{ConfigError, ListwiseResult};
use crate::core::record::DynRecord;
use crate::view::ListView;
use serde::{Deserialize, Serialize};

fn default_id_field() -> String {
    "id".to_string()
}

fn default_page_size() -> usize {
    10
}

/// Configuration for one listed resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Display name, also the lookup key
    pub name: String,

    /// REST path relative to the API base URL
    pub path: String,

    /// Fields eligible for free-text matching
    pub searchable_fields: Vec<String>,

    /// Field holding the unique identifier
    #[serde(default = "default_id_field")]
    pub id_field: String,

    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether requests must carry the bearer token
    #[serde(default)]
    pub requires_auth: bool,
}

impl ResourceConfig {
    /// Fresh list view wired with this resource's page size and whitelist
    pub fn list_view(&self) -> ListView<DynRecord> {
        ListView::new(self.page_size, self.searchable_fields.iter().cloned())
    }

    /// CRUD client for this resource, picking the authenticated instance
    /// when the resource requires it
    pub fn client(&self, clients: &ApiClients) -> ResourceClient<DynRecord> {
        let api = if self.requires_auth {
            &clients.authenticated
        } else {
            &clients.anonymous
        };
        api.resource(self.path.clone())
    }
}

/// Complete configuration for a dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub resources: Vec<ResourceConfig>,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> ListwiseResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string(),
                }
            } else {
                ConfigError::IoError {
                    message: e.to_string(),
                }
            }
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| {
                ConfigError::ParseError {
                    file: Some(path.to_string()),
                    message: e.to_string(),
                }
                .into()
            })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ListwiseResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Look up a resource by name
    pub fn resource(&self, name: &str) -> ListwiseResult<&ResourceConfig> {
        self.resources
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| {
                ConfigError::UnknownResource {
                    name: name.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
resources:
  - name: illegal-vehicles
    path: /illegal-vehicles
    searchable_fields: [vehicle_number, location, status]
  - name: extortion-cases
    path: /extortion-cases
    searchable_fields: [area, outfit]
    id_field: case_id
    page_size: 25
    requires_auth: true
"#;

    #[test]
    fn test_from_yaml_str() {
        let config = DashboardConfig::from_yaml_str(SAMPLE).expect("sample should parse");
        assert_eq!(config.resources.len(), 2);
    }

    #[test]
    fn test_defaults_applied() {
        let config = DashboardConfig::from_yaml_str(SAMPLE).unwrap();
        let vehicles = config.resource("illegal-vehicles").unwrap();
        assert_eq!(vehicles.id_field, "id");
        assert_eq!(vehicles.page_size, 10);
        assert!(!vehicles.requires_auth);
    }

    #[test]
    fn test_overrides_respected() {
        let config = DashboardConfig::from_yaml_str(SAMPLE).unwrap();
        let cases = config.resource("extortion-cases").unwrap();
        assert_eq!(cases.id_field, "case_id");
        assert_eq!(cases.page_size, 25);
        assert!(cases.requires_auth);
    }

    #[test]
    fn test_unknown_resource() {
        let config = DashboardConfig::from_yaml_str(SAMPLE).unwrap();
        let err = config.resource("missing").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_RESOURCE");
    }

    #[test]
    fn test_missing_file() {
        let err = DashboardConfig::from_yaml_file("/no/such/dashboard.yaml").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_FILE_NOT_FOUND");
    }

    #[test]
    fn test_list_view_uses_config() {
        let config = DashboardConfig::from_yaml_str(SAMPLE).unwrap();
        let view = config.resource("extortion-cases").unwrap().list_view();
        assert_eq!(view.query().page_size(), 25);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = DashboardConfig::from_yaml_str("resources: {not a list").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }
}
