use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a toast, unique within the store that issued it.
///
/// Ids are handed out monotonically from a per-store counter and never
/// reused, so the id of a dismissed toast stays dead for the rest of the
/// process lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ToastId(pub(crate) u64);

impl ToastId {
    /// The raw counter value behind this id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Presentation kind of a toast.
///
/// The store carries the variant verbatim; styling it (informational vs.
/// error-like) is the rendering surface's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Caller-facing request for a new toast. Every field is optional; an
/// empty input is accepted and simply renders nothing of substance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToastInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ToastVariant,
    /// Time-to-live in milliseconds. `None` falls back to the store's
    /// configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// One transient user-facing message, as held in the active list and
/// delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: ToastVariant,
    /// Time-to-live granted at enqueue time. Fixed for the lifetime of the
    /// toast; not extendable or resettable.
    pub duration: Duration,
    /// Liveness flag. Entries in the active list always carry `true`;
    /// dismissal removes the entry instead of flipping it.
    pub open: bool,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(
        input: ToastInput,
        id: ToastId,
        default_duration: Duration,
        created_at: DateTime<Utc>,
    ) -> Self {
        let duration = input
            .duration_ms
            .map(Duration::from_millis)
            .unwrap_or(default_duration);
        Self {
            id,
            title: input.title,
            description: input.description,
            variant: input.variant,
            duration,
            open: true,
            created_at,
        }
    }
}

/// Why a toast left the active list. Carried on log lines only; the
/// snapshot a subscriber sees is the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissReason {
    /// Explicit dismissal through `dismiss` or a `ToastHandle`.
    ByUser,
    /// The time-to-live elapsed.
    Expired,
    /// Pushed out by a newer toast when the stack was at capacity.
    Evicted,
    /// Removed by `dismiss_all`.
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toast_variant_default_and_serde() {
        assert_eq!(ToastVariant::default(), ToastVariant::Default);
        let serialized = serde_json::to_string(&ToastVariant::Destructive).unwrap();
        assert_eq!(serialized, "\"destructive\"");
        let deserialized: ToastVariant = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, ToastVariant::Destructive);
    }

    #[test]
    fn toast_input_minimal_json_fills_defaults() {
        let input: ToastInput = serde_json::from_str(r#"{"title": "Saved"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Saved"));
        assert_eq!(input.description, None);
        assert_eq!(input.variant, ToastVariant::Default);
        assert_eq!(input.duration_ms, None);
    }

    #[test]
    fn toast_input_empty_json_is_accepted() {
        let input: ToastInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, ToastInput::default());
    }

    #[test]
    fn toast_new_defaults_duration_when_unspecified() {
        let input = ToastInput {
            title: Some("Order filled".to_string()),
            ..Default::default()
        };
        let toast = Toast::new(input, ToastId(7), Duration::from_millis(5000), Utc::now());
        assert_eq!(toast.duration, Duration::from_millis(5000));
        assert!(toast.open);
        assert_eq!(toast.variant, ToastVariant::Default);
    }

    #[test]
    fn toast_new_honors_caller_duration() {
        let input = ToastInput {
            duration_ms: Some(250),
            ..Default::default()
        };
        let toast = Toast::new(input, ToastId(8), Duration::from_millis(5000), Utc::now());
        assert_eq!(toast.duration, Duration::from_millis(250));
    }

    #[test]
    fn toast_id_display() {
        assert_eq!(ToastId(42).to_string(), "toast-42");
    }

    #[test]
    fn dismiss_reason_serde() {
        let serialized = serde_json::to_string(&DismissReason::ByUser).unwrap();
        assert_eq!(serialized, "\"by-user\"");
        let deserialized: DismissReason = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, DismissReason::ByUser);
    }
}
