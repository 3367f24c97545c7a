//! Data types for parsed Terraform plans
//!
//! This module defines the validated plan model produced by the parser and
//! consumed by the renderers.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// An action Terraform intends to take on a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ChangeAction {
    /// Resource will be created
    Create,
    /// Resource will be updated in-place
    Update,
    /// Resource will be destroyed
    Delete,
    /// Data source read
    Read,
    /// No changes
    NoOp,
    /// Action name this tool does not know about, kept verbatim
    Other(String),
}

impl ChangeAction {
    /// Get the name Terraform uses for this action in JSON plans
    pub fn as_str(&self) -> &str {
        match self {
            ChangeAction::Create => "create",
            ChangeAction::Update => "update",
            ChangeAction::Delete => "delete",
            ChangeAction::Read => "read",
            ChangeAction::NoOp => "no-op",
            ChangeAction::Other(name) => name,
        }
    }
}

impl From<&str> for ChangeAction {
    fn from(name: &str) -> Self {
        match name {
            "create" => ChangeAction::Create,
            "update" => ChangeAction::Update,
            "delete" => ChangeAction::Delete,
            "read" => ChangeAction::Read,
            "no-op" => ChangeAction::NoOp,
            other => ChangeAction::Other(other.to_string()),
        }
    }
}

impl From<ChangeAction> for String {
    fn from(action: ChangeAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section a resource change is listed under in the rendered summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Update,
    Destroy,
}

impl ChangeKind {
    /// Classification order: the first kind whose action a change carries wins
    pub const PRIORITY: [ChangeKind; 3] = [ChangeKind::Create, ChangeKind::Update, ChangeKind::Destroy];

    /// Get the symbol used to represent this change kind
    pub fn symbol(&self) -> &'static str {
        match self {
            ChangeKind::Create => "+",
            ChangeKind::Update => "~",
            ChangeKind::Destroy => "-",
        }
    }

    /// Get the section header for this change kind
    pub fn section_title(&self) -> &'static str {
        match self {
            ChangeKind::Create => "Resources to be created:",
            ChangeKind::Update => "Resources to be updated:",
            ChangeKind::Destroy => "Resources to be destroyed:",
        }
    }

    /// The plan action that puts a resource change in this section
    pub fn action(&self) -> ChangeAction {
        match self {
            ChangeKind::Create => ChangeAction::Create,
            ChangeKind::Update => ChangeAction::Update,
            ChangeKind::Destroy => ChangeAction::Delete,
        }
    }
}

/// A single resource change entry from `resource_changes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceChange {
    address: String,

    #[serde(rename = "type")]
    resource_type: String,

    name: String,

    actions: Vec<ChangeAction>,

    /// State before the change (None when the resource does not exist yet)
    before: Option<Value>,

    /// State after the change (None when the resource will be gone)
    after: Option<Value>,
}

impl ResourceChange {
    /// Create a new resource change without before/after state
    pub fn new(address: &str, resource_type: &str, name: &str, actions: Vec<ChangeAction>) -> Self {
        Self {
            address: address.to_string(),
            resource_type: resource_type.to_string(),
            name: name.to_string(),
            actions,
            before: None,
            after: None,
        }
    }

    /// Set the prior state
    pub fn with_before(mut self, before: Option<Value>) -> Self {
        self.before = before;
        self
    }

    /// Set the planned state
    pub fn with_after(mut self, after: Option<Value>) -> Self {
        self.after = after;
        self
    }

    /// Full resource address (e.g., "module.vpc.aws_subnet.main")
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Resource type (e.g., "aws_subnet")
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[ChangeAction] {
        &self.actions
    }

    pub fn before(&self) -> Option<&Value> {
        self.before.as_ref()
    }

    pub fn after(&self) -> Option<&Value> {
        self.after.as_ref()
    }

    /// Section this change is rendered under, if any.
    ///
    /// A change carrying several actions is classified by the first of
    /// create, update, delete it contains, in that order. A `["update", "delete"]`
    /// change is therefore only ever an update.
    pub fn kind(&self) -> Option<ChangeKind> {
        ChangeKind::PRIORITY
            .into_iter()
            .find(|kind| self.actions.contains(&kind.action()))
    }

    /// Actions joined for display, e.g. "delete, create"
    pub fn actions_label(&self) -> String {
        self.actions
            .iter()
            .map(ChangeAction::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Summary statistics for the plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanSummary {
    /// Number of resources to add
    pub to_add: usize,

    /// Number of resources to change
    pub to_change: usize,

    /// Number of resources to destroy
    pub to_destroy: usize,
}

impl PlanSummary {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.to_add > 0 || self.to_change > 0 || self.to_destroy > 0
    }

    /// Get total number of changes
    pub fn total_changes(&self) -> usize {
        self.to_add + self.to_change + self.to_destroy
    }

    fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Create => self.to_add += 1,
            ChangeKind::Update => self.to_change += 1,
            ChangeKind::Destroy => self.to_destroy += 1,
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plan: {} to add, {} to change, {} to destroy.",
            self.to_add, self.to_change, self.to_destroy
        )
    }
}

/// A validated Terraform plan
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    format_version: String,
    terraform_version: String,
    resource_changes: Vec<ResourceChange>,
}

impl Plan {
    pub fn new(
        format_version: &str,
        terraform_version: &str,
        resource_changes: Vec<ResourceChange>,
    ) -> Self {
        Self {
            format_version: format_version.to_string(),
            terraform_version: terraform_version.to_string(),
            resource_changes,
        }
    }

    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    pub fn terraform_version(&self) -> &str {
        &self.terraform_version
    }

    pub fn resource_changes(&self) -> &[ResourceChange] {
        &self.resource_changes
    }

    /// Resource changes of one kind, in plan order
    pub fn changes_of(&self, kind: ChangeKind) -> impl Iterator<Item = &ResourceChange> {
        self.resource_changes
            .iter()
            .filter(move |change| change.kind() == Some(kind))
    }

    /// Count resource changes per kind
    pub fn summary(&self) -> PlanSummary {
        let mut summary = PlanSummary::default();

        for kind in self.resource_changes.iter().filter_map(ResourceChange::kind) {
            summary.record(kind);
        }

        summary
    }
}

/// Raw plan file content as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFile {
    pub path: String,
    pub content: String,
}

impl PlanFile {
    pub fn new(path: &str, content: String) -> Self {
        Self {
            path: path.to_string(),
            content,
        }
    }
}
