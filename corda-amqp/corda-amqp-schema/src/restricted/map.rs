use crate::{error::ParseError, notation::TypeInfo, type_name};

/// A restricted type aliasing an associative container, e.g.
/// `java.util.Map<java.lang.String, java.lang.Integer>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    info: TypeInfo,
    source: String,
    outer: String,
    key: String,
    value: String,
}

impl Map {
    /// Split a map name into its outer name, key type and value type.
    pub fn map_type(name: &str) -> Result<(String, String, String), ParseError> {
        type_name::map_type(name)
    }

    pub fn new(info: TypeInfo, source: impl Into<String>) -> Result<Self, ParseError> {
        let (outer, key, value) = Self::map_type(&info.name)?;
        Ok(Self {
            info,
            source: source.into(),
            outer,
            key,
            value,
        })
    }

    pub fn info(&self) -> &TypeInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn outer(&self) -> &str {
        &self.outer
    }

    /// `(key type, value type)`.
    pub fn map_of(&self) -> (&str, &str) {
        (&self.key, &self.value)
    }

    pub fn refers_to(&self, name: &str) -> bool {
        self.key == name || self.value == name
    }
}
