//! Command metadata descriptors.
//!
//! A [`CommandSpec`] is the declaration half of a command: what the platform
//! needs to show it to users. It serializes directly to the application
//! command JSON body used by the bulk registration endpoint.

use serde::{Serialize, Serializer};

use crate::error::DeclarationError;

const MAX_NAME_LEN: usize = 32;
const MAX_DESCRIPTION_LEN: usize = 100;
const MAX_OPTIONS: usize = 25;

/// Application command type for chat input (slash) commands.
const CHAT_INPUT: u8 = 1;

/// Typed parameter kinds. Serialized as the platform's numeric option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
}

impl OptionKind {
    pub fn code(self) -> u8 {
        match self {
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
        }
    }
}

impl Serialize for OptionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// One declared command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl OptionSpec {
    pub fn new(kind: OptionKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Declaration of one slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    #[serde(rename = "type", serialize_with = "chat_input")]
    kind: (),
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSpec>,
}

fn chat_input<S: Serializer>(_: &(), serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(CHAT_INPUT)
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: (),
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Check the declaration against the platform's naming and size rules.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        check_name(&self.name).map_err(|reason| match reason {
            NameProblem::Empty => DeclarationError::EmptyName,
            NameProblem::TooLong => DeclarationError::NameTooLong(self.name.clone()),
            NameProblem::BadChar => DeclarationError::InvalidName(self.name.clone()),
        })?;

        let description_len = self.description.trim().chars().count();
        if description_len == 0 {
            return Err(DeclarationError::EmptyDescription(self.name.clone()));
        }
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(DeclarationError::DescriptionTooLong(self.name.clone()));
        }

        if self.options.len() > MAX_OPTIONS {
            return Err(DeclarationError::TooManyOptions(self.name.clone()));
        }

        let mut seen_optional = false;
        for (index, option) in self.options.iter().enumerate() {
            let invalid = |reason| DeclarationError::InvalidOption {
                command: self.name.clone(),
                option: option.name.clone(),
                reason,
            };

            check_name(&option.name).map_err(|_| invalid("bad name"))?;
            let len = option.description.trim().chars().count();
            if len == 0 || len > MAX_DESCRIPTION_LEN {
                return Err(invalid("description must be 1-100 characters"));
            }
            // Required options must precede optional ones.
            if option.required && seen_optional {
                return Err(invalid("required option after optional one"));
            }
            seen_optional |= !option.required;

            if self.options[..index].iter().any(|o| o.name == option.name) {
                return Err(DeclarationError::DuplicateOption {
                    command: self.name.clone(),
                    option: option.name.clone(),
                });
            }
        }

        Ok(())
    }
}

enum NameProblem {
    Empty,
    TooLong,
    BadChar,
}

fn check_name(name: &str) -> Result<(), NameProblem> {
    if name.is_empty() {
        return Err(NameProblem::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameProblem::TooLong);
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(NameProblem::BadChar);
    }
    Ok(())
}
