use crate::focus::FocusFactor;
use crate::planner::ProjectParameters;
use crate::task::Task;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid date '{0}', expected dd/mm/yyyy")]
    InvalidDate(String),
    #[error("invalid {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },
    #[error("number of developers must be positive (got {0})")]
    NonPositiveDeveloperCount(i64),
    #[error("focus factor must be non-negative (got {0})")]
    NegativeFocusFactor(f64),
    #[error("task points must be non-negative (got {0})")]
    NegativePoints(f64),
    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// Prompt for the project parameters in sequence: start date, developer
/// count, one personal focus factor per developer, the project factor, the
/// task list (terminated by the y/n prompt), then support and testing days.
/// Malformed input aborts immediately; there are no retries. The default
/// start date is decided by the caller, never in here.
pub fn read_project_details<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_start: NaiveDate,
) -> Result<ProjectParameters, InputError> {
    let raw = prompt_line(
        input,
        output,
        &format!(
            "Project start date (dd/mm/yyyy), or press enter for {}: ",
            default_start.format("%d/%m/%Y")
        ),
    )?;
    let start_date = if raw.is_empty() {
        default_start
    } else {
        NaiveDate::parse_from_str(&raw, "%d/%m/%Y").map_err(|_| InputError::InvalidDate(raw))?
    };

    let raw = prompt_line(input, output, "Number of developers: ")?;
    let dev_count: i64 = raw.parse().map_err(|_| InputError::InvalidNumber {
        field: "developer count",
        input: raw,
    })?;
    if dev_count <= 0 {
        return Err(InputError::NonPositiveDeveloperCount(dev_count));
    }

    let mut developers = Vec::with_capacity(dev_count as usize);
    for i in 1..=dev_count {
        let raw = prompt_line(
            input,
            output,
            &format!("Personal focus factor for developer {i}: "),
        )?;
        developers.push(read_factor(&raw, "personal focus factor")?);
    }

    let raw = prompt_line(input, output, "Project focus factor: ")?;
    let project_factor = read_factor(&raw, "project focus factor")?;

    let mut tasks = Vec::new();
    loop {
        let name = prompt_line(input, output, "Task name: ")?;
        let raw = prompt_line(input, output, "Task points: ")?;
        let points: f64 = raw.parse().map_err(|_| InputError::InvalidNumber {
            field: "task points",
            input: raw,
        })?;
        if points < 0.0 {
            return Err(InputError::NegativePoints(points));
        }
        tasks.push(Task::new(name, points));

        let answer = prompt_line(input, output, "Add another task? (y/n): ")?;
        if answer.eq_ignore_ascii_case("n") {
            break;
        }
    }

    let raw = prompt_line(input, output, "Support time in days: ")?;
    let support_days: f64 = raw.parse().map_err(|_| InputError::InvalidNumber {
        field: "support days",
        input: raw,
    })?;

    let raw = prompt_line(input, output, "Testing time in days: ")?;
    let testing_days: f64 = raw.parse().map_err(|_| InputError::InvalidNumber {
        field: "testing days",
        input: raw,
    })?;

    Ok(ProjectParameters {
        start_date,
        developers,
        project_factor,
        support_days,
        testing_days,
        tasks,
    })
}

fn read_factor(raw: &str, field: &'static str) -> Result<FocusFactor, InputError> {
    let value: f64 = raw.parse().map_err(|_| InputError::InvalidNumber {
        field,
        input: raw.to_string(),
    })?;
    if value < 0.0 {
        return Err(InputError::NegativeFocusFactor(value));
    }
    Ok(FocusFactor::normalize(value))
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, InputError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }
    Ok(line.trim().to_string())
}
