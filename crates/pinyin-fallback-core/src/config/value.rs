// Pinyin Fallback Config Values
// Typed payload of the external key-value store and its lenient coercion

use std::fmt;

use serde::Serialize;

/// A value as delivered by the external key-value store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ConfigValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Str(_) => "string",
        }
    }

    /// Read this value as `T`, falling back when the types do not match.
    /// Never fails: a mismatched value is simply replaced by `fallback`.
    pub fn normalize<T: FromConfigValue>(&self, fallback: T) -> T {
        match T::from_config_value(self) {
            Some(value) => value,
            None => {
                log::debug!(
                    "config value {} is not a {}, using fallback",
                    self,
                    T::TYPE_NAME
                );
                fallback
            }
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(value.into())
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

/// Types that can be read out of a [`ConfigValue`] of the matching kind
pub trait FromConfigValue: Sized {
    const TYPE_NAME: &'static str;

    fn from_config_value(value: &ConfigValue) -> Option<Self>;
}

impl FromConfigValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromConfigValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromConfigValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}
