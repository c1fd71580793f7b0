//! Per-field error flags carried in every snapshot

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields whose updates are range checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangedField {
    Rotate,
    Compression,
    Sharpness,
    ScaleToScreenWidth,
}

impl RangedField {
    pub const ALL: [RangedField; 4] = [
        RangedField::Rotate,
        RangedField::Compression,
        RangedField::Sharpness,
        RangedField::ScaleToScreenWidth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rotate => "rotate",
            Self::Compression => "compression",
            Self::Sharpness => "sharpness",
            Self::ScaleToScreenWidth => "scaleToScreenWidth",
        }
    }
}

impl fmt::Display for RangedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a validated action combines its outcome with the previous error map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Each applied action replaces the whole map with its own outcome.
    /// A flag raised by one field is cleared by the next action on any field.
    #[default]
    Replace,
    /// Each ranged action only touches its own key
    Merge,
}

/// Field name to error flag. Absent keys read as "no error".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<RangedField, bool>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding exactly one entry
    pub fn single(field: RangedField, flagged: bool) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field, flagged);
        Self(map)
    }

    /// Raw entry, `None` when the field was not touched
    pub fn get(&self, field: RangedField) -> Option<bool> {
        self.0.get(&field).copied()
    }

    /// Whether the field is currently flagged
    pub fn is_flagged(&self, field: RangedField) -> bool {
        self.get(field).unwrap_or(false)
    }

    pub fn any_flagged(&self) -> bool {
        self.0.values().any(|flagged| *flagged)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RangedField, bool)> + '_ {
        self.0.iter().map(|(field, flagged)| (*field, *flagged))
    }

    /// Next map after a ranged action on `field` under `policy`
    pub fn record(&self, policy: ErrorPolicy, field: RangedField, flagged: bool) -> Self {
        match policy {
            ErrorPolicy::Replace => Self::single(field, flagged),
            ErrorPolicy::Merge => {
                let mut next = self.clone();
                next.0.insert(field, flagged);
                next
            }
        }
    }

    /// Next map after an unchecked write under `policy`
    pub fn after_unchecked(&self, policy: ErrorPolicy) -> Self {
        match policy {
            ErrorPolicy::Replace => Self::new(),
            ErrorPolicy::Merge => self.clone(),
        }
    }
}
