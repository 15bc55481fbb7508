//! Strongly-typed identifiers for Lambda Cloud resources.
//!
//! Lambda Cloud identifiers are opaque strings. Wrapping each kind in its own
//! type prevents passing an SSH key ID where an instance ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Macro to generate strongly-typed identifier wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Converts into the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Parses an identifier, rejecting empty input and path separators.
            ///
            /// # Errors
            ///
            /// Returns an error if the string cannot be used as a route segment.
            pub fn parse_str(input: &str) -> Result<Self> {
                if input.is_empty() || input.contains(['/', '?', '#']) {
                    return Err(Error::ValidationError(format!(
                        "invalid {}: `{input}`",
                        stringify!($name)
                    )));
                }
                Ok(Self(input.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_str(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

id_type!(InstanceId, "Instance identifier");
id_type!(SshKeyId, "SSH key identifier");
id_type!(FileSystemId, "File system identifier");
