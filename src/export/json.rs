use crate::errors::AppResult;
use crate::models::narrative::{DistributionSlice, Report};

/// `[{"name": "21", "value": 14}, ...]`
pub(crate) fn distribution_json(slices: &[DistributionSlice]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(slices)?)
}

/// `{"entries": [...], "distribution": [...]}`
pub(crate) fn report_json(report: &Report) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
