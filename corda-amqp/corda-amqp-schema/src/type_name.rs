//! Parsing of parameterized type names.
//!
//! Restricted types are named after the generic they alias, e.g.
//! `java.util.List<java.lang.String>` or
//! `java.util.Map<java.util.Pair<int, int>, java.util.List<string>>`.
//! Parameters may nest to any depth, so the separating commas are only
//! recognized at bracket depth zero.

use crate::error::ParseError;

/// Split `Outer<P1, ..., Pn>` into `Outer`, the text between the outermost
/// brackets, and each top-level parameter (untrimmed).
fn split(name: &str) -> Result<(&str, &str, Vec<&str>), ParseError> {
    let open = name.find('<').ok_or_else(|| ParseError::MissingParameters {
        name: name.to_string(),
    })?;
    let unbalanced = || ParseError::Unbalanced {
        name: name.to_string(),
    };
    if !name.ends_with('>') {
        return Err(unbalanced());
    }

    let inner = &name[open + 1..name.len() - 1];
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            ',' if depth == 0 => {
                params.push(&inner[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    params.push(&inner[start..]);

    if params.iter().any(|p| p.trim().is_empty()) {
        return Err(ParseError::EmptyParameter {
            name: name.to_string(),
        });
    }
    Ok((&name[..open], inner, params))
}

/// Parse `Outer<P1, ..., Pn>` into the outer name and its whitespace-trimmed
/// top-level parameters.
pub fn split_generic(name: &str) -> Result<(String, Vec<String>), ParseError> {
    let (outer, _, params) = split(name)?;
    Ok((
        outer.to_string(),
        params.into_iter().map(|p| p.trim().to_string()).collect(),
    ))
}

/// Parse a single-parameter `Outer<P>` name into `(Outer, P)`.
///
/// `P` is returned exactly as written, so `format!("{outer}<{param}>")`
/// reproduces the input.
pub fn list_type(name: &str) -> Result<(String, String), ParseError> {
    let (outer, inner, params) = split(name)?;
    if params.len() != 1 {
        return Err(ParseError::ParameterCount {
            name: name.to_string(),
            expected: 1,
            found: params.len(),
        });
    }
    Ok((outer.to_string(), inner.to_string()))
}

/// Parse a two-parameter `Outer<K, V>` name into `(Outer, K, V)`, trimming
/// whitespace around each parameter.
pub fn map_type(name: &str) -> Result<(String, String, String), ParseError> {
    let (outer, _, params) = split(name)?;
    match params.as_slice() {
        [key, value] => Ok((
            outer.to_string(),
            key.trim().to_string(),
            value.trim().to_string(),
        )),
        [_] => Err(ParseError::MissingSeparator {
            name: name.to_string(),
        }),
        _ => Err(ParseError::ParameterCount {
            name: name.to_string(),
            expected: 2,
            found: params.len(),
        }),
    }
}

/// Element type of an array-notation name: `T[]` (boxed) or `T[p]`
/// (primitive). `None` for any other name.
pub fn array_element(name: &str) -> Option<&str> {
    name.strip_suffix("[]")
        .or_else(|| name.strip_suffix("[p]"))
        .filter(|elem| !elem.is_empty())
}
