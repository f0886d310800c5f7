//! Excluded-hours profile models

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One flag per hour of the week, Sunday 00:00 first
pub const EXCLUSION_MATRIX_LEN: usize = 7 * 24;

/// Hours of the week during which scans must not run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedHoursProfile {
    pub excluded_hours_id: String,
    pub name: String,
    /// Offset from UTC in minutes
    #[serde(default)]
    pub time_offset: i32,
    #[serde(default)]
    pub exclusion_matrix: Vec<bool>,
}

impl ExcludedHoursProfile {
    /// Number of excluded hours per week
    pub fn excluded_count(&self) -> usize {
        self.exclusion_matrix.iter().filter(|h| **h).count()
    }
}

/// Request body for creating or replacing an excluded-hours profile
#[derive(Debug, Clone, Serialize)]
pub struct ExcludedHoursRequest {
    pub name: String,
    pub time_offset: i32,
    pub exclusion_matrix: Vec<bool>,
}

/// Parse a JSON array of exactly [`EXCLUSION_MATRIX_LEN`] booleans.
pub fn validate_exclusion_matrix(json: &str) -> Result<Vec<bool>> {
    let matrix: Vec<bool> = serde_json::from_str(json).map_err(|e| {
        Error::InvalidInput(format!(
            "Exclusion matrix must be a JSON array of {} booleans: {}",
            EXCLUSION_MATRIX_LEN, e
        ))
    })?;

    if matrix.len() != EXCLUSION_MATRIX_LEN {
        return Err(Error::InvalidInput(format!(
            "Exclusion matrix must have {} entries, got {}",
            EXCLUSION_MATRIX_LEN,
            matrix.len()
        )));
    }

    Ok(matrix)
}
