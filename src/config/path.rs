//! Attribute paths into a configuration tree.

use crate::error::{ValidationError, ValidationResult};
use std::fmt;

/// One step of an [`AttributePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Named attribute of an object
    Attribute(String),
    /// Element of a list
    Index(usize),
}

/// Absolute path from the configuration root, e.g. `channels[0].definition`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// The empty path addressing the configuration root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with a named attribute.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::Attribute(name.into()));
        self
    }

    /// Extend the path with a list index.
    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::Index(index));
        self
    }

    /// Path of the enclosing value. The root is its own parent.
    pub fn parent(&self) -> Self {
        let mut steps = self.steps.clone();
        steps.pop();
        Self { steps }
    }

    /// Path of a sibling attribute sharing this path's parent.
    pub fn sibling(&self, name: impl Into<String>) -> Self {
        self.parent().attribute(name)
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Parse the dotted form produced by `Display`, e.g. `channels[0].type`.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let mut path = Self::root();
        if input.is_empty() {
            return Ok(path);
        }

        for segment in input.split('.') {
            let (name, mut rest) = match segment.find('[') {
                Some(pos) => segment.split_at(pos),
                None => (segment, ""),
            };
            if name.is_empty() {
                return Err(ValidationError::EmptyAttributeName);
            }
            path = path.attribute(name);

            while !rest.is_empty() {
                let close = rest.find(']').ok_or_else(|| {
                    ValidationError::custom(format!("Unclosed index in path '{}'", input))
                })?;
                let index = rest[1..close].parse::<usize>().map_err(|_| {
                    ValidationError::custom(format!(
                        "Invalid index '{}' in path '{}'",
                        &rest[1..close],
                        input
                    ))
                })?;
                path = path.index(index);
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(ValidationError::custom(format!(
                        "Unexpected '{}' in path '{}'",
                        rest, input
                    )));
                }
            }
        }

        Ok(path)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if position == 0 => write!(f, "{}", name)?,
                PathStep::Attribute(name) => write!(f, ".{}", name)?,
                PathStep::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
