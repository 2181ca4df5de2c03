use crate::planner::{PlanResult, ProjectParameters};
use crate::task::WorkUnit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneRecord {
    pub name: String,
    pub end_date: NaiveDate,
}

/// The computed plan as a flat report: an output artifact, not editable
/// project state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub start_date: NaiveDate,
    pub total_points: f64,
    pub milestones: Vec<MilestoneRecord>,
}

impl PlanSnapshot {
    /// Label the end dates with the units that produced them. Zero-effort
    /// units were skipped by the planner, so they are filtered out here the
    /// same way before pairing.
    pub fn build(params: &ProjectParameters, result: &PlanResult) -> Self {
        let units = WorkUnit::sequence(&params.tasks, params.support_days, params.testing_days);
        let milestones = units
            .iter()
            .filter(|unit| unit.effort() > 0.0)
            .zip(&result.task_end_dates)
            .map(|(unit, end_date)| MilestoneRecord {
                name: unit.label().to_string(),
                end_date: *end_date,
            })
            .collect();

        Self {
            start_date: params.start_date,
            total_points: result.total_points,
            milestones,
        }
    }
}

pub fn save_plan_to_json<P: AsRef<Path>>(
    snapshot: &PlanSnapshot,
    path: P,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, snapshot)?;
    Ok(())
}

#[derive(Serialize)]
struct MilestoneCsvRecord<'a> {
    name: &'a str,
    end_date: String,
}

pub fn save_plan_to_csv<P: AsRef<Path>>(
    snapshot: &PlanSnapshot,
    path: P,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for milestone in &snapshot.milestones {
        writer.serialize(MilestoneCsvRecord {
            name: &milestone.name,
            end_date: milestone.end_date.format("%Y-%m-%d").to_string(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
