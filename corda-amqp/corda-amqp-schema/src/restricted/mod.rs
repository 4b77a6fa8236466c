//! Restricted types: named aliases over a list, a map, or a closed label set.

mod enumeration;
mod list;
mod map;

pub use enumeration::{Choice, Enum};
pub use list::List;
pub use map::Map;

use crate::{
    descriptor::Descriptor,
    error::SchemaError,
    notation::{NotationKind, TypeInfo},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restricted {
    List(List),
    Map(Map),
    Enum(Enum),
}

impl Restricted {
    /// Build the variant selected by `source` (and, for `"list"`, by whether
    /// any choices are present).
    pub fn make(
        info: TypeInfo,
        source: &str,
        choices: Vec<Choice>,
    ) -> Result<Self, SchemaError> {
        match source {
            "list" if !choices.is_empty() => Ok(Self::Enum(Enum::new(info, source, choices))),
            "list" => Ok(Self::List(List::new(info, source)?)),
            "map" => Ok(Self::Map(Map::new(info, source)?)),
            other => Err(SchemaError::UnknownSource {
                name: info.name,
                origin: other.to_string(),
            }),
        }
    }

    pub fn info(&self) -> &TypeInfo {
        match self {
            Self::List(l) => l.info(),
            Self::Map(m) => m.info(),
            Self::Enum(e) => e.info(),
        }
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.info().descriptor
    }

    pub fn source(&self) -> &str {
        match self {
            Self::List(l) => l.source(),
            Self::Map(m) => m.source(),
            Self::Enum(e) => e.source(),
        }
    }

    pub fn kind(&self) -> NotationKind {
        match self {
            Self::List(_) => NotationKind::List,
            Self::Map(_) => NotationKind::Map,
            Self::Enum(_) => NotationKind::Enum,
        }
    }

    /// Names this type is built from: the element type of a list, the key
    /// and value types of a map, the labels of an enum.
    pub fn references(&self) -> Vec<&str> {
        match self {
            Self::List(l) => vec![l.list_of()],
            Self::Map(m) => {
                let (key, value) = m.map_of();
                vec![key, value]
            }
            Self::Enum(e) => e.labels().collect(),
        }
    }

    /// Whether this type structurally uses the type called `name`.
    /// Always `false` for enums.
    pub fn refers_to(&self, name: &str) -> bool {
        match self {
            Self::List(l) => l.refers_to(name),
            Self::Map(m) => m.refers_to(name),
            Self::Enum(_) => false,
        }
    }
}

impl From<List> for Restricted {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}

impl From<Map> for Restricted {
    fn from(value: Map) -> Self {
        Self::Map(value)
    }
}

impl From<Enum> for Restricted {
    fn from(value: Enum) -> Self {
        Self::Enum(value)
    }
}
