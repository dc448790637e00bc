use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hook_error::HookError;

/// `<group>:<component>`, e.g. `com.google.firebase:firebase-messaging`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentKey {
    group: String,
    component: String,
}

impl ComponentKey {
    #[must_use]
    pub fn new(group: &str, component: &str) -> Self {
        Self {
            group: group.to_string(),
            component: component.to_string(),
        }
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Display for ComponentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.component)
    }
}

impl FromStr for ComponentKey {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((group, component)) if !group.is_empty() && !component.is_empty() => {
                Ok(Self::new(group.trim(), component.trim()))
            }
            _ => Err(HookError::MalformedComponent(s.to_string())),
        }
    }
}

impl Serialize for ComponentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ComponentKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
