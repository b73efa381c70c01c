use crate::error::LayoutError;
use crate::hypothesis::Hypothesis;
use crate::layout::VariableLayout;
use crate::variable::{self, Variable, VariableType};
use numpy::{PyArray1, PyReadonlyArray1, PyReadwriteArray1};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

impl From<LayoutError> for PyErr {
    fn from(err: LayoutError) -> PyErr {
        match err {
            LayoutError::VariableNotFound { .. } => PyKeyError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Wrapper struct for Variable in python
#[pyclass(name = "Variable")]
#[derive(Clone)]
struct PyVariable {
    variable: Variable,
}

#[pymethods]
impl PyVariable {
    #[new]
    fn new(name: String, variable_type: &str) -> PyResult<Self> {
        let variable_type = VariableType::from_name(variable_type)?;
        Ok(Self {
            variable: Variable::new(name, variable_type)?,
        })
    }

    #[getter]
    fn name(&self) -> &str {
        self.variable.name()
    }

    #[getter]
    fn variable_type(&self) -> String {
        self.variable.variable_type().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Variable('{}', '{}')",
            self.variable.name(),
            self.variable.variable_type()
        )
    }
}

fn unwrap_variables(variables: Vec<PyVariable>) -> Vec<Variable> {
    variables.into_iter().map(|v| v.variable).collect()
}

#[pyfunction]
fn get_variable_size(v: PyVariable, hypothesis: &str) -> PyResult<usize> {
    let hypothesis = Hypothesis::from_name(hypothesis)?;
    Ok(variable::get_variable_size(&v.variable, hypothesis))
}

#[pyfunction]
fn get_array_size(variables: Vec<PyVariable>, hypothesis: &str) -> PyResult<usize> {
    let hypothesis = Hypothesis::from_name(hypothesis)?;
    Ok(variable::get_array_size(
        &unwrap_variables(variables),
        hypothesis,
    ))
}

#[pyfunction]
fn get_variable_offset(variables: Vec<PyVariable>, name: &str, hypothesis: &str) -> PyResult<usize> {
    let hypothesis = Hypothesis::from_name(hypothesis)?;
    Ok(variable::get_variable_offset(
        &unwrap_variables(variables),
        name,
        hypothesis,
    )?)
}

/// Wrapper struct for VariableLayout in python
#[pyclass(name = "VariableLayout")]
struct PyVariableLayout {
    layout: VariableLayout,
}

#[pymethods]
impl PyVariableLayout {
    #[new]
    fn new(variables: Vec<PyVariable>, hypothesis: &str) -> PyResult<Self> {
        let hypothesis = Hypothesis::from_name(hypothesis)?;
        Ok(Self {
            layout: VariableLayout::new(&unwrap_variables(variables), hypothesis)?,
        })
    }

    #[getter]
    fn hypothesis(&self) -> String {
        self.layout.hypothesis().to_string()
    }

    #[getter]
    fn array_size(&self) -> usize {
        self.layout.array_size()
    }

    fn __len__(&self) -> usize {
        self.layout.len()
    }

    fn offset(&self, name: &str) -> PyResult<usize> {
        Ok(self.layout.offset(name)?)
    }

    fn size(&self, name: &str) -> PyResult<usize> {
        Ok(self.layout.size(name)?)
    }

    fn n_integration_points(&self, buffer: PyReadonlyArray1<f64>) -> PyResult<usize> {
        Ok(self.layout.n_integration_points(buffer.len())?)
    }

    /// Returns a copy of the values of `name` at integration point `ip`.
    fn extract<'py>(
        &self,
        py: Python<'py>,
        buffer: PyReadonlyArray1<f64>,
        name: &str,
        ip: usize,
    ) -> PyResult<&'py PyArray1<f64>> {
        let view = self.layout.view(buffer.as_slice()?, name, ip)?;
        Ok(PyArray1::from_vec(py, view.iter().copied().collect()))
    }

    /// Overwrites the values of `name` at integration point `ip`.
    fn assign(
        &self,
        mut buffer: PyReadwriteArray1<f64>,
        name: &str,
        ip: usize,
        values: PyReadonlyArray1<f64>,
    ) -> PyResult<()> {
        let values = values.as_slice()?;
        let mut view = self.layout.view_mut(buffer.as_slice_mut()?, name, ip)?;
        if view.len() != values.len() {
            return Err(PyValueError::new_err(format!(
                "'{}' has {} components, got {}",
                name,
                view.len(),
                values.len()
            )));
        }
        view.iter_mut().zip(values).for_each(|(x, v)| *x = *v);
        Ok(())
    }
}

/// Variable layout of mechanical behaviours.
#[pymodule]
fn behaviour_layout(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyVariable>()?;
    m.add_class::<PyVariableLayout>()?;
    m.add_function(wrap_pyfunction!(get_variable_size, m)?)?;
    m.add_function(wrap_pyfunction!(get_array_size, m)?)?;
    m.add_function(wrap_pyfunction!(get_variable_offset, m)?)?;
    Ok(())
}
