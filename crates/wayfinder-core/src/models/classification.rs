//! String newtypes used to classify and filter guidance content.
//!
//! The set of modules, categories, and audiences is curated with the content,
//! not the engine, so these accept any value the content declares.

use serde::{Deserialize, Serialize};

use crate::constants::GENERAL_AUDIENCE_TAG;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_newtype!(
    /// Audit module an entry belongs to (e.g. `"1.2"`).
    ModuleCode
);

string_newtype!(
    /// Coarser grouping of modules (e.g. `"before-arrival"`).
    ModuleGroup
);

string_newtype!(
    /// Topic category (e.g. `"physical-access"`).
    Category
);

string_newtype!(
    /// Business or site context used to pick relevant examples
    /// (e.g. `"accommodation"`, `"retail"`, `"tour-operator"`).
    AudienceTag
);

impl AudienceTag {
    /// The catch-all tag whose examples are relevant to every audience.
    pub fn general() -> Self {
        Self(GENERAL_AUDIENCE_TAG.to_string())
    }

    pub fn is_general(&self) -> bool {
        self.0 == GENERAL_AUDIENCE_TAG
    }
}
