//! Configuration document model
//!
//! Wire shape of the config file:
//!
//! ```text
//! {
//!   "app": "DailySignals",
//!   "version": "1.0",
//!   "signal_groups": [
//!     {
//!       "id": "...", "name": "GYM", "active": true,
//!       "signals": [
//!         {"id": "...", "label": "Cardio duration", "type": "quantity",
//!          "unit": "min", "required": false, "default": null, "active": true}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `unit` only exists on the unit-bearing signal types (quantity, hours,
//! number); the other types cannot carry one at the type level.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application name written into every new document.
pub const APP_NAME: &str = "DailySignals";

/// Document format version.
pub const CONFIG_VERSION: &str = "1.0";

/// Soft-delete lifecycle state.
///
/// Disabled entities are preserved in the document so that historical
/// readings keep resolving; they are only excluded from the active views.
/// Serialized as the JSON boolean `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Lifecycle {
    Active,
    Disabled,
}

impl Lifecycle {
    /// Returns true for [`Lifecycle::Active`].
    pub fn is_active(self) -> bool {
        matches!(self, Lifecycle::Active)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::Active
    }
}

impl From<bool> for Lifecycle {
    fn from(active: bool) -> Self {
        if active {
            Lifecycle::Active
        } else {
            Lifecycle::Disabled
        }
    }
}

impl From<Lifecycle> for bool {
    fn from(state: Lifecycle) -> bool {
        state.is_active()
    }
}

/// Signal type tag plus the attributes meaningful for that tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SignalType {
    /// Measured amount with an optional unit (kg, min, CAD, ...)
    Quantity {
        #[serde(default)]
        unit: Option<String>,
    },
    /// Boolean flag
    Yesno,
    /// Time of day
    Time,
    /// Duration in hours with an optional unit
    Hours {
        #[serde(default)]
        unit: Option<String>,
    },
    /// Plain number with an optional unit
    Number {
        #[serde(default)]
        unit: Option<String>,
    },
    /// Free text
    Text,
}

impl SignalType {
    /// Returns the lowercase type tag as written into reading rows.
    pub fn tag(&self) -> &'static str {
        match self {
            SignalType::Quantity { .. } => "quantity",
            SignalType::Yesno => "yesno",
            SignalType::Time => "time",
            SignalType::Hours { .. } => "hours",
            SignalType::Number { .. } => "number",
            SignalType::Text => "text",
        }
    }

    /// Returns the unit, if this type carries one.
    pub fn unit(&self) -> Option<&str> {
        match self {
            SignalType::Quantity { unit }
            | SignalType::Hours { unit }
            | SignalType::Number { unit } => unit.as_deref(),
            _ => None,
        }
    }

    /// Whether this type can carry a unit at all.
    pub fn bears_unit(&self) -> bool {
        matches!(
            self,
            SignalType::Quantity { .. } | SignalType::Hours { .. } | SignalType::Number { .. }
        )
    }

    /// Builds a type from its tag string. The unit is attached only to
    /// unit-bearing tags and silently dropped otherwise.
    pub fn from_tag(tag: &str, unit: Option<String>) -> Option<Self> {
        let unit = unit.filter(|u| !u.trim().is_empty());
        match tag {
            "quantity" => Some(SignalType::Quantity { unit }),
            "yesno" => Some(SignalType::Yesno),
            "time" => Some(SignalType::Time),
            "hours" => Some(SignalType::Hours { unit }),
            "number" => Some(SignalType::Number { unit }),
            "text" => Some(SignalType::Text),
            _ => None,
        }
    }
}

/// One trackable metric definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Stable opaque identifier, assigned once, never reused.
    pub id: String,
    /// Display text.
    pub label: String,
    #[serde(flatten)]
    pub signal_type: SignalType,
    /// Advisory only; nothing enforces presence of a value.
    #[serde(default)]
    pub required: bool,
    /// Optional seed value for input surfaces.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub active: Lifecycle,
}

impl Signal {
    /// Creates an active signal with a fresh id.
    pub fn new(label: impl Into<String>, signal_type: SignalType, required: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            signal_type,
            required,
            default: None,
            active: Lifecycle::Active,
        }
    }

    /// Soft delete: the signal stays in the document, its history intact.
    pub fn disable(&mut self) {
        self.active = Lifecycle::Disabled;
    }

    /// Changes the display label. The id stays put, so historical rows
    /// keep their old `signal_label` snapshot.
    pub fn relabel(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replaces the type. A unit that does not fit the new type is gone by
    /// construction; there is no nullable field to clear.
    pub fn retype(&mut self, signal_type: SignalType) {
        self.signal_type = signal_type;
    }
}

/// A named collection of signals. Order is display order, not storage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalGroup {
    /// Stable opaque identifier, assigned once, never reused.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: Lifecycle,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

impl SignalGroup {
    /// Creates an active group with a fresh id and no signals.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            active: Lifecycle::Active,
            signals: Vec::new(),
        }
    }

    /// The single place the signal soft-delete filter is applied.
    pub fn active_signals(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(|s| s.active.is_active())
    }

    pub fn signal(&self, id: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.id == id)
    }

    pub fn signal_mut(&mut self, id: &str) -> Option<&mut Signal> {
        self.signals.iter_mut().find(|s| s.id == id)
    }

    /// Soft delete: the group and its signals stay in the document.
    pub fn disable(&mut self) {
        self.active = Lifecycle::Disabled;
    }

    /// Changes the display name. The id stays put, so historical rows
    /// keep their old `group_name` snapshot.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Root of the configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub app: String,
    pub version: String,
    #[serde(default)]
    pub signal_groups: Vec<SignalGroup>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            app: APP_NAME.to_string(),
            version: CONFIG_VERSION.to_string(),
            signal_groups: Vec::new(),
        }
    }
}

impl Document {
    /// The single place the group soft-delete filter is applied.
    pub fn active_groups(&self) -> impl Iterator<Item = &SignalGroup> {
        self.signal_groups.iter().filter(|g| g.active.is_active())
    }

    pub fn group(&self, id: &str) -> Option<&SignalGroup> {
        self.signal_groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: &str) -> Option<&mut SignalGroup> {
        self.signal_groups.iter_mut().find(|g| g.id == id)
    }

    /// Appends a new active group and returns its id.
    pub fn add_group(&mut self, name: impl Into<String>) -> String {
        let group = SignalGroup::new(name);
        let id = group.id.clone();
        self.signal_groups.push(group);
        id
    }

    /// Looks a signal up across all groups by id or label, disabled ones
    /// included.
    pub fn find_signal_mut(&mut self, needle: &str) -> Option<&mut Signal> {
        self.signal_groups
            .iter_mut()
            .flat_map(|g| g.signals.iter_mut())
            .find(|s| s.id == needle || s.label == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lifecycle_serializes_as_bool() {
        let group = SignalGroup {
            id: "g1".to_string(),
            name: "GYM".to_string(),
            active: Lifecycle::Disabled,
            signals: Vec::new(),
        };
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["active"], json!(false));

        let back: SignalGroup = serde_json::from_value(value).unwrap();
        assert_eq!(back.active, Lifecycle::Disabled);
    }

    #[test]
    fn test_lifecycle_defaults_to_active_when_missing() {
        let signal: Signal = serde_json::from_value(json!({
            "id": "s1",
            "label": "Mood",
            "type": "text"
        }))
        .unwrap();
        assert!(signal.active.is_active());
        assert!(!signal.required);
        assert_eq!(signal.default, None);
    }

    #[test]
    fn test_signal_type_tag_and_unit_roundtrip() {
        let signal = Signal::new(
            "Cardio duration",
            SignalType::Quantity {
                unit: Some("min".to_string()),
            },
            false,
        );
        let value = serde_json::to_value(&signal).unwrap();
        assert_eq!(value["type"], json!("quantity"));
        assert_eq!(value["unit"], json!("min"));

        let back: Signal = serde_json::from_value(value).unwrap();
        assert_eq!(back.signal_type.unit(), Some("min"));
    }

    #[test]
    fn test_unitless_type_ignores_stray_unit_field() {
        // Files written by older tooling may carry "unit": null on any type.
        let signal: Signal = serde_json::from_value(json!({
            "id": "s1",
            "label": "Slept well",
            "type": "yesno",
            "unit": null,
            "required": false,
            "default": null,
            "active": true
        }))
        .unwrap();
        assert_eq!(signal.signal_type, SignalType::Yesno);
        assert_eq!(signal.signal_type.unit(), None);
    }

    #[test]
    fn test_from_tag_drops_unit_on_unitless_types() {
        let t = SignalType::from_tag("time", Some("min".to_string())).unwrap();
        assert_eq!(t, SignalType::Time);

        let t = SignalType::from_tag("hours", Some("hrs".to_string())).unwrap();
        assert_eq!(t.unit(), Some("hrs"));

        assert_eq!(SignalType::from_tag("bogus", None), None);
    }

    #[test]
    fn test_retype_cannot_keep_foreign_unit() {
        let mut signal = Signal::new(
            "Weight",
            SignalType::Quantity {
                unit: Some("kg".to_string()),
            },
            false,
        );
        signal.retype(SignalType::Text);
        assert_eq!(signal.signal_type.unit(), None);

        let value = serde_json::to_value(&signal).unwrap();
        assert!(value.get("unit").is_none());
    }

    #[test]
    fn test_active_views_filter_disabled_entities() {
        let mut doc = Document::default();
        let gym = doc.add_group("GYM");
        let diet = doc.add_group("Diet");

        let group = doc.group_mut(&gym).unwrap();
        group.signals.push(Signal::new("Cardio", SignalType::Yesno, false));
        let mut sit_ups = Signal::new("Sit-ups", SignalType::Number { unit: None }, false);
        sit_ups.disable();
        group.signals.push(sit_ups);

        doc.group_mut(&diet).unwrap().disable();

        let groups: Vec<_> = doc.active_groups().map(|g| g.name.as_str()).collect();
        assert_eq!(groups, vec!["GYM"]);

        let signals: Vec<_> = doc
            .group(&gym)
            .unwrap()
            .active_signals()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(signals, vec!["Cardio"]);

        // Disabled entities are still reachable by id.
        assert!(doc.group(&diet).is_some());
        assert_eq!(doc.group(&gym).unwrap().signals.len(), 2);
    }

    #[test]
    fn test_find_signal_mut_matches_id_or_label_across_groups() {
        let mut doc = Document::default();
        let gym = doc.add_group("GYM");
        let sleep = doc.add_group("Sleep");
        doc.group_mut(&gym)
            .unwrap()
            .signals
            .push(Signal::new("Cardio", SignalType::Yesno, false));
        let mut rest = Signal::new("Rest day", SignalType::Yesno, false);
        rest.disable();
        let rest_id = rest.id.clone();
        doc.group_mut(&sleep).unwrap().signals.push(rest);

        assert!(doc.find_signal_mut("Cardio").is_some());
        // Disabled signals are still editable, matched by id or label.
        assert!(doc.find_signal_mut(&rest_id).is_some());
        assert!(doc.find_signal_mut("Rest day").is_some());
        assert!(doc.find_signal_mut("nope").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = SignalGroup::new("a");
        let b = SignalGroup::new("b");
        assert_ne!(a.id, b.id);
    }
}
