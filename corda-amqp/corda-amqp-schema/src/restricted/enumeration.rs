use crate::notation::TypeInfo;

/// One constant of an [`Enum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A restricted type with a closed, ordered set of labels.
///
/// Its references are its own labels, never other types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    info: TypeInfo,
    source: String,
    choices: Vec<Choice>,
}

impl Enum {
    pub fn new(info: TypeInfo, source: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            info,
            source: source.into(),
            choices,
        }
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

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Choice labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.name.as_str())
    }

    pub fn ordinal_of(&self, label: &str) -> Option<usize> {
        self.choices.iter().position(|c| c.name == label)
    }

    pub fn label_at(&self, ordinal: usize) -> Option<&str> {
        self.choices.get(ordinal).map(|c| c.name.as_str())
    }
}
