use corda_amqp_core::Kind;

use crate::{descriptor::Descriptor, notation::TypeInfo};

/// Type name of a field whose value carries its own descriptor.
const ANY: &str = "*";

/// One field of a [`Composite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Declared type name; `*` when the value is self-describing.
    pub type_name: String,
    /// Interfaces the value must implement; the first one stands in for
    /// the type of a `*` field.
    pub requires: Vec<String>,
    pub default: Option<String>,
    pub label: Option<String>,
    pub mandatory: bool,
    pub multiple: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            requires: Vec::new(),
            default: None,
            label: None,
            mandatory: false,
            multiple: false,
        }
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn is_any(&self) -> bool {
        self.type_name == ANY
    }

    /// The type this field refers to: its declared type, or for a `*` field
    /// the first required interface.
    pub fn resolved_type(&self) -> &str {
        match self.requires.first() {
            Some(required) if self.is_any() => required,
            _ => &self.type_name,
        }
    }

    /// The AMQP primitive kind of the field, if its type is a primitive.
    pub fn primitive_kind(&self) -> Option<Kind> {
        Kind::from_type_name(self.resolved_type())
    }
}

/// A named record type with an ordered field list.
///
/// Field order is the order values appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    info: TypeInfo,
    fields: Vec<Field>,
}

impl Composite {
    pub fn new(info: TypeInfo, fields: Vec<Field>) -> Self {
        Self { info, fields }
    }

    pub fn info(&self) -> &TypeInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.info.descriptor
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether any field's resolved type is `name`.
    pub fn refers_to(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.resolved_type() == name)
    }
}
