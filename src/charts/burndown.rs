use crate::task::Task;
use chrono::{Duration, NaiveDate};

/// Remaining-points series for every calendar day from the start date to the
/// final end date. Tasks pair positionally with end dates; the running total
/// drops once per qualifying task per day, cumulatively, so a finished task
/// keeps decrementing on every later day. The series is non-increasing and
/// may fall below zero.
pub fn burndown_series(
    total_points: f64,
    tasks: &[Task],
    end_dates: &[NaiveDate],
    start_date: NaiveDate,
) -> Vec<(NaiveDate, f64)> {
    let Some(last) = end_dates.last() else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut remaining = total_points;
    let mut date = start_date;
    while date <= *last {
        for (end, task) in end_dates.iter().zip(tasks) {
            if date >= *end {
                remaining -= task.points;
            }
        }
        series.push((date, remaining));
        date += Duration::days(1);
    }
    series
}

/// Render the series as a text plot: one column per day, points on the y
/// axis, dd/mm labels on the x axis.
pub fn render_burndown(series: &[(NaiveDate, f64)], height: usize) -> String {
    if series.is_empty() {
        return String::from("(nothing to burn down)\n");
    }

    let height = height.max(2);
    let vmax = series
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let vmin = series
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::INFINITY, f64::min);
    let range = (vmax - vmin).max(f64::EPSILON);

    let mut grid = vec![vec![' '; series.len()]; height];
    for (col, (_, value)) in series.iter().enumerate() {
        let row = ((vmax - value) / range * (height - 1) as f64).round() as usize;
        grid[row.min(height - 1)][col] = '*';
    }

    let label_width = format!("{vmax:.1}").len().max(format!("{vmin:.1}").len());
    let mut out = String::new();
    for (row_idx, row) in grid.iter().enumerate() {
        let label = if row_idx == 0 {
            format!("{vmax:.1}")
        } else if row_idx == height - 1 {
            format!("{vmin:.1}")
        } else {
            String::new()
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{label:>label_width$} |{}", line.trim_end()));
        out.push('\n');
    }

    let left = series[0].0.format("%d/%m").to_string();
    let right = series[series.len() - 1].0.format("%d/%m").to_string();
    out.push_str(&format!(
        "{:>label_width$} +{}\n",
        "",
        "-".repeat(series.len())
    ));
    if series.len() > left.len() + right.len() {
        let gap = series.len() - left.len() - right.len();
        out.push_str(&format!(
            "{:>label_width$}  {}{}{}\n",
            "",
            left,
            " ".repeat(gap),
            right
        ));
    } else {
        out.push_str(&format!("{:>label_width$}  {}\n", "", left));
    }
    out
}
