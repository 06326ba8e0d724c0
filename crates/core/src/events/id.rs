// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event identifiers
//!
//! A topic is either a name, compared by value, or a `Token`, compared by
//! identity. Tokens draw from a process-wide counter; their description is
//! only for display.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity-keyed event id
#[derive(Clone, Debug)]
pub struct Token {
    id: u64,
    description: Option<Arc<str>>,
}

impl Token {
    /// Allocate a token distinct from every other token in the process
    pub fn fresh() -> Self {
        Self {
            id: NEXT_TOKEN.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    /// Allocate a fresh token carrying a label for logs
    pub fn described(description: impl Into<String>) -> Self {
        let description: String = description.into();
        Self {
            description: Some(description.into()),
            ..Self::fresh()
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "token#{}({})", self.id, description),
            None => write!(f, "token#{}", self.id),
        }
    }
}

/// Key for the listener table and the emission history
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventId {
    Named(String),
    Token(Token),
}

impl EventId {
    /// A fresh, never-colliding id
    pub fn token() -> Self {
        Self::Token(Token::fresh())
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            EventId::Named(name) => Some(name),
            EventId::Token(_) => None,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, EventId::Token(_))
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventId::Named(name) => write!(f, "{}", name),
            EventId::Token(token) => write!(f, "{}", token),
        }
    }
}

impl From<&str> for EventId {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for EventId {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<&String> for EventId {
    fn from(name: &String) -> Self {
        Self::Named(name.clone())
    }
}

impl From<Token> for EventId {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<&EventId> for EventId {
    fn from(id: &EventId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
