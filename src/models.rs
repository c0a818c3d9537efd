//! # Transfer Domain Models
//!
//! Plain serde models exchanged with the collaborator services: page layout
//! templates as stored on disk, per-user permission sets, user directory
//! entries, and the export scope selector.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A named, stored page-layout definition the dashboard renders.
///
/// The HTTP layer never inspects the contents; only the catalog
/// implementation deserializes these documents. Field names follow the JSON
/// documents produced by the dashboard editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTemplate {
    pub name: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub layout_properties: HashMap<String, String>,
    #[serde(default)]
    pub rows: Vec<LayoutRow>,
}

/// One row of a layout, a horizontal band of columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRow {
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub layout_columns: Vec<LayoutColumn>,
}

/// A column within a row, holding renderable components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutColumn {
    #[serde(default)]
    pub span: Option<String>,
    #[serde(default)]
    pub layout_components: Vec<LayoutComponent>,
}

/// A renderable component placed in a column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutComponent {
    pub drag_type_name: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

/// A user's read-access descriptor over page names.
///
/// Invariant: a page is readable for listing iff `allow_all` is set or its
/// name appears in `exceptions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PermissionSet {
    pub allow_all: bool,
    pub exceptions: HashSet<String>,
}

impl PermissionSet {
    /// Default-deny set handed out for users the registry does not know.
    pub fn deny_all() -> Self {
        Self::default()
    }

    /// Listing rule: blanket access or an explicit per-page grant.
    pub fn can_list(&self, page: &str) -> bool {
        self.allow_all || self.exceptions.contains(page)
    }

    /// Per-page read rule: only an explicit grant counts.
    pub fn has_explicit_grant(&self, page: &str) -> bool {
        self.exceptions.contains(page)
    }
}

/// A user directory entry. Existence is all the transfer layer checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: String,
}

/// Export scope selector handed to the export collaborator.
///
/// The HTTP layer only ever requests a full export; the filter fields exist
/// for callers that drive partial exports programmatically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataTransferExportModel {
    pub export_all: bool,
    pub datasets: Vec<String>,
    pub pages: Vec<String>,
    pub export_navigation: bool,
}

impl DataTransferExportModel {
    /// Everything: all datasets, all pages, navigation included.
    pub fn export_all() -> Self {
        Self {
            export_all: true,
            datasets: Vec::new(),
            pages: Vec::new(),
            export_navigation: true,
        }
    }

    /// A restricted export of the named pages and datasets.
    pub fn of(datasets: Vec<String>, pages: Vec<String>, export_navigation: bool) -> Self {
        Self {
            export_all: false,
            datasets,
            pages,
            export_navigation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_set_listing_rule() {
        let mut perms = PermissionSet::deny_all();
        assert!(!perms.can_list("home"));

        perms.exceptions.insert("sales".to_string());
        assert!(perms.can_list("sales"));
        assert!(!perms.can_list("home"));

        perms.allow_all = true;
        assert!(perms.can_list("home"));
    }

    #[test]
    fn test_explicit_grant_ignores_allow_all() {
        let perms = PermissionSet {
            allow_all: true,
            exceptions: HashSet::new(),
        };
        assert!(!perms.has_explicit_grant("home"));
    }

    #[test]
    fn test_layout_template_round_trip() {
        let doc = serde_json::json!({
            "name": "sales",
            "style": "FLUID",
            "layoutProperties": {"background": "white"},
            "rows": [{
                "height": "12",
                "layoutColumns": [{
                    "span": "12",
                    "layoutComponents": [{
                        "dragTypeName": "org.dashbuilder.DisplayerComponent",
                        "properties": {"json": "{}"}
                    }]
                }]
            }]
        });

        let template: LayoutTemplate = serde_json::from_value(doc).unwrap();
        assert_eq!(template.name, "sales");
        assert_eq!(template.rows.len(), 1);
        assert_eq!(
            template.rows[0].layout_columns[0].layout_components[0].drag_type_name,
            "org.dashbuilder.DisplayerComponent"
        );
    }

    #[test]
    fn test_export_all_scope() {
        let model = DataTransferExportModel::export_all();
        assert!(model.export_all);
        assert!(model.datasets.is_empty());
        assert!(model.export_navigation);
    }
}
