use crate::calendar::{HolidayProvider, WorkCalendar};
use crate::focus::FocusFactor;
use crate::scheduler::{DAILY_CAPACITY_HOURS, advance};
use crate::task::{Task, WorkUnit};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Everything the planner needs for one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectParameters {
    pub start_date: NaiveDate,
    pub developers: Vec<FocusFactor>,
    pub project_factor: FocusFactor,
    pub support_days: f64,
    pub testing_days: f64,
    pub tasks: Vec<Task>,
}

/// Grand total effort and the ordered end dates of the scheduled units.
/// Units whose required hours were zero are skipped, so the list can be
/// shorter than tasks + 2.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    pub total_points: f64,
    pub task_end_dates: Vec<NaiveDate>,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("at least one developer is required")]
    NoDevelopers,
    #[error("at least one task is required")]
    NoTasks,
    #[error("focus factor must be non-negative (got {0})")]
    NegativeFocusFactor(f64),
    #[error("task '{0}' has negative points ({1})")]
    NegativePoints(String, f64),
    #[error("daily effort is zero; check the focus factors")]
    ZeroDailyEffort,
}

/// Estimate the project: schedule the whole-project total from the start
/// date, then each task in input order, then support, then testing, each
/// unit starting where the previous one ended. Holidays are fetched once,
/// for the start date's year only; units that spill into the next year do
/// not see that year's holidays.
pub fn plan(
    params: &ProjectParameters,
    provider: &dyn HolidayProvider,
) -> Result<PlanResult, PlanError> {
    validate(params)?;

    let team_factor = FocusFactor::mean(&params.developers);
    let daily_effort = team_factor * params.project_factor.value() * DAILY_CAPACITY_HOURS;
    if daily_effort == 0.0 {
        return Err(PlanError::ZeroDailyEffort);
    }
    debug!(team_factor, daily_effort, "computed daily effort");

    let total_points: f64 = params.tasks.iter().map(|t| t.points).sum();
    let calendar = WorkCalendar::for_year(provider, params.start_date.year());

    // The aggregate block seeds the cursor for the per-unit chain.
    let total_effort = total_points + params.support_days + params.testing_days;
    let total_hours = total_effort / daily_effort * DAILY_CAPACITY_HOURS;
    let mut cursor = advance(params.start_date, total_hours, &calendar).end_date;

    let units = WorkUnit::sequence(&params.tasks, params.support_days, params.testing_days);
    let mut task_end_dates = Vec::with_capacity(units.len());
    for unit in &units {
        let hours = unit.effort() / daily_effort * DAILY_CAPACITY_HOURS;
        if hours > 0.0 {
            let result = advance(cursor, hours, &calendar);
            debug!(label = unit.label(), hours, end_date = %result.end_date, "scheduled unit");
            cursor = result.end_date;
            task_end_dates.push(result.end_date);
        }
    }

    Ok(PlanResult {
        total_points,
        task_end_dates,
    })
}

fn validate(params: &ProjectParameters) -> Result<(), PlanError> {
    if params.developers.is_empty() {
        return Err(PlanError::NoDevelopers);
    }
    if params.tasks.is_empty() {
        return Err(PlanError::NoTasks);
    }
    for factor in params
        .developers
        .iter()
        .chain(std::iter::once(&params.project_factor))
    {
        if factor.value() < 0.0 {
            return Err(PlanError::NegativeFocusFactor(factor.value()));
        }
    }
    for task in &params.tasks {
        if task.points < 0.0 {
            return Err(PlanError::NegativePoints(task.name.clone(), task.points));
        }
    }
    Ok(())
}
