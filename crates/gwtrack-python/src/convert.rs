use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| pyo3::exceptions::PyValueError::new_err("array must be C-contiguous"))
}

/// Validate a custom times array: contiguous, finite, non-negative.
pub fn checked_times<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    let slice = contiguous_slice(arr)?;
    if slice.iter().any(|t| !t.is_finite() || *t < 0.0) {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "times must be finite and non-negative",
        ));
    }
    Ok(slice)
}
