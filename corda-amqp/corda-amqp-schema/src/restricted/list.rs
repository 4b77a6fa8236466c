use crate::{error::ParseError, notation::TypeInfo, type_name};

/// A restricted type aliasing a sequence, e.g. `java.util.List<java.lang.String>`
/// or, in array notation, `int[p]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    info: TypeInfo,
    source: String,
    /// `None` for array notation.
    outer: Option<String>,
    list_of: String,
}

impl List {
    /// Split a list name into its outer name and element type.
    pub fn list_type(name: &str) -> Result<(String, String), ParseError> {
        type_name::list_type(name)
    }

    pub fn new(info: TypeInfo, source: impl Into<String>) -> Result<Self, ParseError> {
        let (outer, list_of) = match type_name::array_element(&info.name) {
            Some(elem) => (None, elem.to_string()),
            None => {
                let (outer, param) = Self::list_type(&info.name)?;
                (Some(outer), param.trim().to_string())
            }
        };
        Ok(Self {
            info,
            source: source.into(),
            outer,
            list_of,
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

    pub fn outer(&self) -> Option<&str> {
        self.outer.as_deref()
    }

    /// Element type name.
    pub fn list_of(&self) -> &str {
        &self.list_of
    }

    pub fn is_array(&self) -> bool {
        self.outer.is_none()
    }

    pub fn refers_to(&self, name: &str) -> bool {
        self.list_of == name
    }
}
