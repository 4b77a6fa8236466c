use std::collections::HashMap;

use corda_amqp_core::Scalar;

use crate::{dependency::dependency_order, error::SchemaError, notation::TypeNotation};

/// The type notations of one schema section, indexed by name and descriptor.
///
/// Immutable once built; notations keep their declaration order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: Vec<TypeNotation>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
    by_code: HashMap<u64, usize>,
}

impl Schema {
    pub fn new(types: Vec<TypeNotation>) -> Result<Self, SchemaError> {
        let mut by_name = HashMap::with_capacity(types.len());
        let mut by_symbol = HashMap::new();
        let mut by_code = HashMap::new();

        for (idx, notation) in types.iter().enumerate() {
            if by_name.insert(notation.name().to_string(), idx).is_some() {
                return Err(SchemaError::DuplicateType {
                    name: notation.name().to_string(),
                });
            }
            let descriptor = notation.descriptor();
            if let Some(symbol) = descriptor.name() {
                by_symbol.entry(symbol.to_string()).or_insert(idx);
            }
            if let Some(code) = descriptor.code() {
                by_code.entry(code).or_insert(idx);
            }
        }

        Ok(Self {
            types,
            by_name,
            by_symbol,
            by_code,
        })
    }

    pub fn get(&self, name: &str) -> Option<&TypeNotation> {
        self.by_name.get(name).map(|&idx| &self.types[idx])
    }

    /// Look up the notation a wire descriptor (`symbol` or `ulong`) identifies.
    pub fn find_by_descriptor(&self, wire: &Scalar) -> Option<&TypeNotation> {
        let idx = match wire {
            Scalar::Symbol(s) | Scalar::String(s) => self.by_symbol.get(s.as_ref()),
            Scalar::U64(code) => self.by_code.get(code),
            _ => None,
        }?;
        Some(&self.types[*idx])
    }

    /// Notations in declaration order.
    pub fn types(&self) -> &[TypeNotation] {
        &self.types
    }

    /// Notations ordered so each follows the types it depends on.
    pub fn ordered(&self) -> Vec<&TypeNotation> {
        dependency_order(&self.types)
            .into_iter()
            .map(|idx| &self.types[idx])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeNotation> {
        self.types.iter()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a TypeNotation;
    type IntoIter = std::slice::Iter<'a, TypeNotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
