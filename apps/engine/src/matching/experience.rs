//! Experience scoring over work-history date ranges. Overlapping positions
//! collapse to their union so simultaneous roles are not double counted.

use chrono::NaiveDate;

use crate::errors::EngineError;
use crate::models::resume::WorkEntry;

const DAYS_PER_YEAR: f64 = 365.25;

/// Total years of experience across non-overlapping date ranges. Open-ended
/// positions run through `today`; positions starting after `today` contribute
/// nothing. A closed range with `end < start` is an input error.
pub fn total_experience_years(
    entries: &[WorkEntry],
    today: NaiveDate,
) -> Result<f64, EngineError> {
    let mut ranges: Vec<(NaiveDate, NaiveDate)> = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.end {
            Some(end) if end < entry.start => {
                return Err(EngineError::InvalidDateRange {
                    title: entry.title.clone(),
                    start: entry.start,
                    end,
                });
            }
            Some(end) => ranges.push((entry.start, end)),
            None if entry.start <= today => ranges.push((entry.start, today)),
            None => {}
        }
    }

    ranges.sort_by_key(|(start, _)| *start);

    let mut total_days = 0i64;
    let mut current: Option<(NaiveDate, NaiveDate)> = None;
    for (start, end) in ranges {
        match current {
            None => current = Some((start, end)),
            Some((cur_start, cur_end)) if start <= cur_end => {
                current = Some((cur_start, cur_end.max(end)));
            }
            Some((cur_start, cur_end)) => {
                total_days += (cur_end - cur_start).num_days();
                current = Some((start, end));
            }
        }
    }
    if let Some((start, end)) = current {
        total_days += (end - start).num_days();
    }

    Ok(total_days as f64 / DAYS_PER_YEAR)
}

/// Linear ratio against the requirement, capped at 1.0 — exceeding the
/// requirement earns no bonus. A zero requirement is vacuously satisfied.
pub fn score_experience(
    entries: &[WorkEntry],
    required_years: f64,
    today: NaiveDate,
) -> Result<f64, EngineError> {
    if required_years < 0.0 {
        return Err(EngineError::InvalidRequirement(format!(
            "min_experience_years must be non-negative, got {required_years}"
        )));
    }

    // Malformed history fails fast even when the requirement is vacuous.
    let years = total_experience_years(entries, today)?;

    if required_years == 0.0 {
        return Ok(1.0);
    }
    Ok((years / required_years).min(1.0))
}
