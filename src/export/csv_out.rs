use crate::errors::{AppError, AppResult};
use crate::models::narrative::{DistributionSlice, NarrativeEntry};

fn finish(wtr: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// One row per narrative line: `date,content`.
pub(crate) fn narrative_csv(entries: &[NarrativeEntry]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["date", "content"])?;

    for entry in entries {
        let date = entry.date_label();
        for line in &entry.content {
            wtr.write_record([date.as_str(), line.as_str()])?;
        }
    }

    finish(wtr)
}

/// Header `name,value` (via serde).
pub(crate) fn distribution_csv(slices: &[DistributionSlice]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for slice in slices {
        wtr.serialize(slice)?;
    }
    finish(wtr)
}
