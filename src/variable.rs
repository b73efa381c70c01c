use crate::error::{LayoutError, Result};
use crate::hypothesis::Hypothesis;
use strum_macros::{Display, EnumIter, EnumString};

/// Shape of a physical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum VariableType {
    Scalar,
    Vector,
    /// symmetric second order tensor
    Stensor,
    /// non symmetric second order tensor
    Tensor,
}

impl VariableType {
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<Self>()
            .map_err(|_| LayoutError::UnsupportedVariableType {
                value: name.to_string(),
            })
    }

    /// Number of scalar slots a quantity of this type occupies under the
    /// given hypothesis.
    pub const fn size(self, hypothesis: Hypothesis) -> usize {
        match self {
            VariableType::Scalar => 1,
            VariableType::Vector => hypothesis.space_dimension(),
            VariableType::Stensor => hypothesis.stensor_size(),
            VariableType::Tensor => hypothesis.tensor_size(),
        }
    }
}

/// A named physical quantity attached to a behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    variable_type: VariableType,
}

impl Variable {
    pub fn new(name: impl Into<String>, variable_type: VariableType) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LayoutError::EmptyVariableName);
        }
        Ok(Self {
            name,
            variable_type,
        })
    }

    pub fn scalar(name: impl Into<String>) -> Result<Self> {
        Self::new(name, VariableType::Scalar)
    }

    pub fn vector(name: impl Into<String>) -> Result<Self> {
        Self::new(name, VariableType::Vector)
    }

    pub fn stensor(name: impl Into<String>) -> Result<Self> {
        Self::new(name, VariableType::Stensor)
    }

    pub fn tensor(name: impl Into<String>) -> Result<Self> {
        Self::new(name, VariableType::Tensor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variable_type(&self) -> VariableType {
        self.variable_type
    }
}

/// Returns the number of scalar slots used by `variable`.
pub fn get_variable_size(variable: &Variable, hypothesis: Hypothesis) -> usize {
    variable.variable_type.size(hypothesis)
}

/// Returns the size of an array holding all `variables` back to back.
pub fn get_array_size(variables: &[Variable], hypothesis: Hypothesis) -> usize {
    variables
        .iter()
        .map(|v| get_variable_size(v, hypothesis))
        .sum()
}

/// Returns the offset of the variable called `name` in an array holding all
/// `variables` back to back. If several variables share the name, the first
/// one is used.
pub fn get_variable_offset(
    variables: &[Variable],
    name: &str,
    hypothesis: Hypothesis,
) -> Result<usize> {
    let mut offset = 0;
    for v in variables {
        if v.name == name {
            log::trace!("offset of '{}' under {}: {}", name, hypothesis, offset);
            return Ok(offset);
        }
        offset += get_variable_size(v, hypothesis);
    }
    Err(LayoutError::not_found(name))
}
