use crate::foundation::error::{ParcoordError, ParcoordResult};

/// Validate a record set and return its dimension count.
///
/// Records must be non-empty, share one length of at least two, and hold only finite values.
pub(crate) fn validate_records(records: &[Vec<f64>]) -> ParcoordResult<usize> {
    let first = records
        .first()
        .ok_or_else(|| ParcoordError::validation("must supply at least one record"))?;
    let num_dims = first.len();
    if num_dims < 2 {
        return Err(ParcoordError::validation(
            "must supply data with more than one dimension",
        ));
    }

    for (idx, record) in records.iter().enumerate() {
        if record.len() != num_dims {
            return Err(ParcoordError::validation(format!(
                "record {idx} has {} values, expected {num_dims}",
                record.len()
            )));
        }
        if let Some(dim) = record.iter().position(|v| v.is_nan()) {
            return Err(ParcoordError::validation(format!(
                "records must not contain NaN values (record {idx}, dimension {dim})"
            )));
        }
        if let Some(dim) = record.iter().position(|v| v.is_infinite()) {
            return Err(ParcoordError::validation(format!(
                "records must not contain infinite values (record {idx}, dimension {dim})"
            )));
        }
    }
    Ok(num_dims)
}

/// Validate a per-record score list against `num_records`.
pub(crate) fn validate_scores(scores: &[f64], num_records: usize) -> ParcoordResult<()> {
    if scores.len() != num_records {
        return Err(ParcoordError::validation(format!(
            "number of scores ({}) must equal the number of records ({num_records})",
            scores.len()
        )));
    }
    if let Some(idx) = scores.iter().position(|v| v.is_nan()) {
        return Err(ParcoordError::validation(format!(
            "scores must not contain NaN values (score {idx})"
        )));
    }
    if let Some(idx) = scores.iter().position(|v| v.is_infinite()) {
        return Err(ParcoordError::validation(format!(
            "scores must not contain infinite values (score {idx})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/chart/data.rs"]
mod tests;
