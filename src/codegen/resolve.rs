//! Mode-aware value resolution.
//!
//! Resolution follows exactly one alias hop: an alias is looked up by id in the
//! full variable set and the target's value under the *same* mode is returned as
//! stored, without resolving it any further.

use crate::domain::error::{ExportError, Result};
use crate::domain::{Variable, VariableValue};

/// Outcome of resolving one variable under the selected mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// The variable holds a literal value for the mode.
    Literal(&'a VariableValue),

    /// The variable aliases `target`.
    ///
    /// `value` is the target's stored value for the same mode. It is `None` when
    /// the target does not define that mode, which is common for aliases into
    /// another collection.
    Alias {
        target: &'a Variable,
        value: Option<&'a VariableValue>,
    },
}

/// Resolves variable values under one selected mode.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    variables: &'a [Variable],
    mode: Option<&'a str>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the full variable set for `mode`.
    #[must_use]
    pub const fn new(variables: &'a [Variable], mode: Option<&'a str>) -> Self {
        Self { variables, mode }
    }

    /// Finds a variable by id.
    #[must_use]
    pub fn variable_by_id(&self, id: &str) -> Option<&'a Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Resolves `variable` under the selected mode.
    ///
    /// Callers filter out variables that do not define the mode before resolving.
    ///
    /// # Errors
    ///
    /// - [`ExportError::NoModeSelected`] if the resolver has no mode
    /// - [`ExportError::DanglingAliasReference`] if an alias target id is unknown
    /// - [`ExportError::MissingModeValue`] if `variable` has no value for the mode
    pub fn resolve(&self, variable: &'a Variable) -> Result<Resolution<'a>> {
        let mode = self.mode.ok_or(ExportError::NoModeSelected)?;
        let value = variable
            .value_for(mode)
            .ok_or_else(|| ExportError::MissingModeValue {
                variable: variable.name.clone(),
                mode: mode.to_string(),
            })?;

        match value.alias_target() {
            None => Ok(Resolution::Literal(value)),
            Some(target_id) => {
                let target = self.variable_by_id(target_id).ok_or_else(|| {
                    ExportError::DanglingAliasReference {
                        variable: variable.name.clone(),
                        target: target_id.to_string(),
                    }
                })?;
                Ok(Resolution::Alias {
                    target,
                    value: target.value_for(mode),
                })
            }
        }
    }

    /// Resolves `variable` all the way to a literal value, through at most one hop.
    ///
    /// # Errors
    ///
    /// Everything [`Resolver::resolve`] returns, plus:
    /// - [`ExportError::UnresolvedAlias`] if the target has no value for the mode
    /// - [`ExportError::NestedAlias`] if the target's value is itself an alias
    pub fn resolve_literal(&self, variable: &'a Variable) -> Result<&'a VariableValue> {
        match self.resolve(variable)? {
            Resolution::Literal(value) => Ok(value),
            Resolution::Alias { target, value: None } => Err(ExportError::UnresolvedAlias {
                variable: variable.name.clone(),
                target: target.name.clone(),
                mode: self.mode.unwrap_or_default().to_string(),
            }),
            Resolution::Alias { target, value: Some(VariableValue::Alias(_)) } => {
                Err(ExportError::NestedAlias {
                    variable: variable.name.clone(),
                    target: target.name.clone(),
                })
            }
            Resolution::Alias { value: Some(value), .. } => Ok(value),
        }
    }
}
