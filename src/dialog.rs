//! Dialog descriptors handed to a presentation backend.
//!
//! A [`DialogRequest`] is built on demand, given to a
//! [`DialogPresenter`](crate::platform::DialogPresenter) and then dropped.
//! Nothing here keeps state between requests.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Zero-argument action run when the user picks a button.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Wrap a closure as a [`Callback`].
pub fn callback<F>(f: F) -> Callback
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Visual and behavioral role of a dialog button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Default,
    Destructive,
    Cancel,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Default => "default",
            ActionKind::Destructive => "destructive",
            ActionKind::Cancel => "cancel",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Serialize)]
pub struct DialogAction {
    label: String,
    kind: ActionKind,
    #[serde(rename = "has_callback", serialize_with = "serialize_presence")]
    on_select: Option<Callback>,
}

impl DialogAction {
    pub fn new(label: impl Into<String>, kind: ActionKind, on_select: Option<Callback>) -> Self {
        Self {
            label: label.into(),
            kind,
            on_select,
        }
    }

    pub fn default_with(label: impl Into<String>, on_select: Callback) -> Self {
        Self::new(label, ActionKind::Default, Some(on_select))
    }

    pub fn destructive(label: impl Into<String>, on_select: Callback) -> Self {
        Self::new(label, ActionKind::Destructive, Some(on_select))
    }

    /// Default-kind button that only closes the dialog.
    pub fn acknowledge(label: impl Into<String>) -> Self {
        Self::new(label, ActionKind::Default, None)
    }

    pub fn cancel(label: impl Into<String>) -> Self {
        Self::new(label, ActionKind::Cancel, None)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn callback(&self) -> Option<&Callback> {
        self.on_select.as_ref()
    }

    pub fn has_callback(&self) -> bool {
        self.on_select.is_some()
    }

    /// Run the attached callback, if any.
    pub fn select(&self) {
        if let Some(on_select) = &self.on_select {
            on_select();
        }
    }
}

// Closures are opaque, so equality only checks that both sides agree on
// whether a callback is attached.
impl PartialEq for DialogAction {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.kind == other.kind
            && self.has_callback() == other.has_callback()
    }
}

impl Eq for DialogAction {}

impl fmt::Debug for DialogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogAction")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

fn serialize_presence<S>(
    on_select: &Option<Callback>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bool(on_select.is_some())
}

/// Confirm-then-cancel button pair.
///
/// The confirming action always comes first and the cancel action, which
/// carries no callback, always comes last.
pub fn confirm_buttons(confirm: DialogAction, cancel_label: &str) -> Vec<DialogAction> {
    debug_assert!(confirm.kind() != ActionKind::Cancel);
    vec![confirm, DialogAction::cancel(cancel_label)]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogRequest {
    title: String,
    body: String,
    actions: Vec<DialogAction>,
}

impl DialogRequest {
    /// Build a request from an arbitrary action list.
    ///
    /// The list must be non-empty and hold at most one cancel action, placed
    /// last.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        actions: Vec<DialogAction>,
    ) -> Result<Self> {
        validate_actions(&actions)?;
        Ok(Self::from_parts(title, body, actions))
    }

    pub(crate) fn single(
        title: impl Into<String>,
        body: impl Into<String>,
        action: DialogAction,
    ) -> Self {
        Self::from_parts(title, body, vec![action])
    }

    pub(crate) fn with_cancel(
        title: impl Into<String>,
        body: impl Into<String>,
        confirm: DialogAction,
        cancel_label: &str,
    ) -> Self {
        Self::from_parts(title, body, confirm_buttons(confirm, cancel_label))
    }

    fn from_parts(
        title: impl Into<String>,
        body: impl Into<String>,
        actions: Vec<DialogAction>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            actions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn actions(&self) -> &[DialogAction] {
        &self.actions
    }

    pub fn cancel_index(&self) -> Option<usize> {
        self.actions
            .iter()
            .position(|action| action.kind() == ActionKind::Cancel)
    }

    /// First action that is not a cancel action.
    pub fn primary_index(&self) -> Option<usize> {
        self.actions
            .iter()
            .position(|action| action.kind() != ActionKind::Cancel)
    }

    /// Index an interactive presenter should pre-select.
    ///
    /// Prefers the cancel action, then the first non-destructive action. A
    /// destructive action is only returned when it is the sole choice.
    pub fn safe_default_index(&self) -> usize {
        self.cancel_index()
            .or_else(|| {
                self.actions
                    .iter()
                    .position(|action| action.kind() != ActionKind::Destructive)
            })
            .unwrap_or(0)
    }

    /// Select the action at `index` and run its callback.
    ///
    /// Returns `None` without side effects when `index` is out of range.
    pub fn choose(&self, index: usize) -> Option<&DialogAction> {
        let action = self.actions.get(index)?;
        action.select();
        Some(action)
    }
}

fn validate_actions(actions: &[DialogAction]) -> Result<()> {
    if actions.is_empty() {
        return Err(Error::invalid_dialog("a dialog needs at least one action"));
    }

    let cancels: Vec<usize> = actions
        .iter()
        .enumerate()
        .filter(|(_, action)| action.kind() == ActionKind::Cancel)
        .map(|(index, _)| index)
        .collect();

    match cancels.as_slice() {
        [] => Ok(()),
        [index] if *index == actions.len() - 1 => Ok(()),
        [index] => Err(Error::invalid_dialog(format!(
            "cancel action '{}' must be the last action",
            actions[*index].label()
        ))),
        _ => Err(Error::invalid_dialog(format!(
            "at most one cancel action is allowed, found {}",
            cancels.len()
        ))),
    }
}
