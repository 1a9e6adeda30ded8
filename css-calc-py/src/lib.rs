use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyString};
use std::convert::Infallible;

enum Output {
    Number(f64),
    Text(String),
}

impl From<css_calc_rs::CalcValue> for Output {
    fn from(value: css_calc_rs::CalcValue) -> Self {
        match value {
            css_calc_rs::CalcValue::Number(value) => Output::Number(value),
            css_calc_rs::CalcValue::Text(text) => Output::Text(text),
        }
    }
}

impl<'py> IntoPyObject<'py> for Output {
    type Target = PyAny;
    type Output = Bound<'py, PyAny>;
    type Error = Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        Ok(match self {
            Output::Number(value) => PyFloat::new(py, value).into_any(),
            Output::Text(text) => PyString::new(py, &text).into_any(),
        })
    }
}

#[derive(Debug)]
struct CalcError {
    message: String,
}

impl From<css_calc_rs::CalcError> for CalcError {
    fn from(err: css_calc_rs::CalcError) -> Self {
        CalcError {
            message: err.to_string(),
        }
    }
}

impl From<CalcError> for PyErr {
    fn from(err: CalcError) -> Self {
        PyValueError::new_err(err.message)
    }
}

/// Evaluates a calc() expression, returning a float for unit-less results and
/// a string such as "15px" otherwise.
#[pyfunction]
fn calc(py: Python<'_>, expression: String) -> Result<Output, CalcError> {
    py.allow_threads(|| css_calc_rs::evaluate(&expression))
        .map(Output::from)
        .map_err(CalcError::from)
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calc, m)?)?;
    Ok(())
}
