//! Terraform JSON plan parser
//!
//! This module validates the output of `terraform show -json <planfile>` and
//! turns it into a [`Plan`]. Checks run in a fixed order so the first defect
//! reported is always the same for a given document:
//! JSON syntax, top-level object, `format_version`, `terraform_version`,
//! `resource_changes`, then each resource change in array order.

use serde_json::{Map, Value};

use super::error::{PlanError, StructureDefect};
use super::types::{ChangeAction, Plan, PlanFile, ResourceChange};

/// Parser for Terraform JSON plan documents
pub struct PlanParser;

impl Default for PlanParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse plan JSON and return a validated Plan
    pub fn parse(&self, content: &str) -> Result<Plan, PlanError> {
        let document: Value = serde_json::from_str(content)
            .map_err(|err| PlanError::InvalidJson(err.to_string()))?;

        let root = document.as_object().ok_or(StructureDefect::NotAnObject)?;

        let format_version = Self::required_version(root, "format_version")?;
        let terraform_version = Self::required_version(root, "terraform_version")?;

        let entries = root
            .get("resource_changes")
            .and_then(Value::as_array)
            .ok_or(StructureDefect::MissingResourceChanges)?;

        let resource_changes = entries
            .iter()
            .map(Self::parse_resource_change)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Plan::new(format_version, terraform_version, resource_changes))
    }

    /// Parse the content of a plan file read from disk
    pub fn parse_file(&self, file: &PlanFile) -> Result<Plan, PlanError> {
        self.parse(&file.content)
    }

    /// Fetch a version string that must be present and not blank
    fn required_version<'a>(
        root: &'a Map<String, Value>,
        field: &'static str,
    ) -> Result<&'a str, StructureDefect> {
        root.get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
            .ok_or(StructureDefect::InvalidVersionField(field))
    }

    /// Validate and convert a single `resource_changes` entry
    fn parse_resource_change(entry: &Value) -> Result<ResourceChange, PlanError> {
        let address = Self::non_empty_str(entry, "address");
        let resource_type = Self::non_empty_str(entry, "type");
        let name = Self::non_empty_str(entry, "name");
        let change = entry.get("change").and_then(Value::as_object);

        let (Some(address), Some(resource_type), Some(name), Some(change)) =
            (address, resource_type, name, change)
        else {
            return Err(StructureDefect::ResourceChangeFields.into());
        };

        let actions = change
            .get("actions")
            .and_then(Value::as_array)
            .ok_or(StructureDefect::ActionsNotArray)?
            .iter()
            .map(|action| {
                action
                    .as_str()
                    .map(ChangeAction::from)
                    .ok_or(StructureDefect::ActionsNotStrings)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResourceChange::new(address, resource_type, name, actions)
            .with_before(Self::state(change, "before"))
            .with_after(Self::state(change, "after")))
    }

    fn non_empty_str<'a>(entry: &'a Value, field: &str) -> Option<&'a str> {
        entry
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resource state, with JSON null and a missing key both treated as absent
    fn state(change: &Map<String, Value>, field: &str) -> Option<Value> {
        change.get(field).filter(|value| !value.is_null()).cloned()
    }
}
