//! MPLS switching actions attached to nexthop group entries.

use itertools::Itertools;
use pbr_types::{MplsActionType, MplsLabel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An MPLS switching operation paired with an ordered label stack.
///
/// The first element of the stack is the outermost label: the stack is
/// applied outside-in, so insertion prepends and a label pushed last
/// ends up outermost. Comparison is structural, the action type first
/// and then the stack lexicographically (a stack that is a strict
/// prefix of another sorts first).
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MplsAction {
    action_type: MplsActionType,
    label_stack: Vec<MplsLabel>,
}

impl MplsAction {
    /// Creates an action with the given switching operation and no labels.
    pub fn new(action_type: MplsActionType) -> Self {
        Self {
            action_type,
            label_stack: Vec::new(),
        }
    }

    /// Creates an action with a full label stack, outermost label first.
    pub fn with_labels(
        action_type: MplsActionType,
        labels: impl IntoIterator<Item = MplsLabel>,
    ) -> Self {
        Self {
            action_type,
            label_stack: labels.into_iter().collect(),
        }
    }

    /// The switching operation for this action.
    pub fn action_type(&self) -> MplsActionType {
        self.action_type
    }

    /// Replaces the switching operation. Any transition is allowed;
    /// whether the resulting operation sequence is forwardable is the
    /// forwarding layer's concern.
    pub fn set_action_type(&mut self, action_type: MplsActionType) {
        self.action_type = action_type;
    }

    /// The label stack, outermost label first.
    pub fn label_stack(&self) -> &[MplsLabel] {
        &self.label_stack
    }

    /// Replaces the whole label stack.
    pub fn set_label_stack(&mut self, labels: Vec<MplsLabel>) {
        self.label_stack = labels;
    }

    /// Prepends `label`, making it the new outermost label.
    pub fn push_label(&mut self, label: MplsLabel) {
        self.label_stack.insert(0, label);
    }

    /// Removes every occurrence of `label` from the stack. Removing an
    /// absent label leaves the stack unchanged.
    pub fn remove_label(&mut self, label: MplsLabel) {
        self.label_stack.retain(|l| *l != label);
    }

    /// True for the inert action: no operation and an empty stack,
    /// meaning plain IP forwarding.
    pub fn is_noop(&self) -> bool {
        self.action_type == MplsActionType::None && self.label_stack.is_empty()
    }
}

impl fmt::Display for MplsAction {
    /// Renders as `none` for the inert action, otherwise
    /// `<operation>[<outermost>,...,<innermost>]`, e.g. `push[100,200]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            return f.write_str("none");
        }
        write!(
            f,
            "{}[{}]",
            self.action_type,
            self.label_stack.iter().join(",")
        )
    }
}

/// Error when parsing an [`MplsAction`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMplsActionError {
    pub message: String,
}

impl fmt::Display for ParseMplsActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid MPLS action: {}", self.message)
    }
}

impl std::error::Error for ParseMplsActionError {}

impl FromStr for MplsAction {
    type Err = ParseMplsActionError;

    /// Parses the [`Display`] form: `none`, or `<operation>[l1,l2,...]`
    /// with labels outermost-first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "none" {
            return Ok(Self::default());
        }

        let (op, rest) = s.split_once('[').ok_or_else(|| ParseMplsActionError {
            message: format!("expected <operation>[labels], got: {}", s),
        })?;
        let labels = rest.strip_suffix(']').ok_or_else(|| ParseMplsActionError {
            message: format!("missing closing bracket: {}", s),
        })?;

        let action_type = op.parse::<MplsActionType>().map_err(|e| ParseMplsActionError {
            message: e.to_string(),
        })?;

        let mut label_stack = Vec::new();
        if !labels.is_empty() {
            for part in labels.split(',') {
                let label =
                    part.trim()
                        .parse::<MplsLabel>()
                        .map_err(|e| ParseMplsActionError {
                            message: e.to_string(),
                        })?;
                label_stack.push(label);
            }
        }

        Ok(Self {
            action_type,
            label_stack,
        })
    }
}
