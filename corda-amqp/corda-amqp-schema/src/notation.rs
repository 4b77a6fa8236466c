use std::fmt;

use crate::{
    composite::Composite,
    dependency::{self, Dependency},
    descriptor::Descriptor,
    restricted::{Enum, List, Map, Restricted},
};

/// Properties shared by every type notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: String,
    pub label: Option<String>,
    /// Interfaces the type provides.
    pub provides: Vec<String>,
    pub descriptor: Descriptor,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>, descriptor: Descriptor) -> Self {
        Self {
            name: name.into(),
            label: None,
            provides: Vec::new(),
            descriptor,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_provides<I, S>(mut self, provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provides = provides.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationKind {
    List,
    Map,
    Enum,
    Composite,
}

impl fmt::Display for NotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Map => "map",
            Self::Enum => "enum",
            Self::Composite => "composite",
        })
    }
}

/// One type definition of a schema section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNotation {
    Composite(Composite),
    Restricted(Restricted),
}

impl TypeNotation {
    pub fn info(&self) -> &TypeInfo {
        match self {
            Self::Composite(c) => c.info(),
            Self::Restricted(r) => r.info(),
        }
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.info().descriptor
    }

    pub fn kind(&self) -> NotationKind {
        match self {
            Self::Composite(_) => NotationKind::Composite,
            Self::Restricted(r) => r.kind(),
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Self::Composite(c) => Some(c),
            Self::Restricted(_) => None,
        }
    }

    pub fn as_restricted(&self) -> Option<&Restricted> {
        match self {
            Self::Restricted(r) => Some(r),
            Self::Composite(_) => None,
        }
    }

    /// See [`dependency::depends_on`].
    pub fn depends_on(&self, other: &TypeNotation) -> Dependency {
        dependency::depends_on(self, other)
    }
}

impl From<Composite> for TypeNotation {
    fn from(value: Composite) -> Self {
        Self::Composite(value)
    }
}

impl From<Restricted> for TypeNotation {
    fn from(value: Restricted) -> Self {
        Self::Restricted(value)
    }
}

impl From<List> for TypeNotation {
    fn from(value: List) -> Self {
        Self::Restricted(value.into())
    }
}

impl From<Map> for TypeNotation {
    fn from(value: Map) -> Self {
        Self::Restricted(value.into())
    }
}

impl From<Enum> for TypeNotation {
    fn from(value: Enum) -> Self {
        Self::Restricted(value.into())
    }
}
