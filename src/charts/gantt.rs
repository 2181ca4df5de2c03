use crate::task::Task;
use chrono::NaiveDate;

/// One horizontal bar: a task's span from the previous unit's end date to
/// its own.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttRow {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Pair tasks with their end dates; each bar starts where the previous one
/// ended, the first at the project start date.
pub fn gantt_rows(tasks: &[Task], end_dates: &[NaiveDate], start_date: NaiveDate) -> Vec<GanttRow> {
    let mut rows = Vec::with_capacity(tasks.len());
    let mut current_start = start_date;
    for (task, end) in tasks.iter().zip(end_dates) {
        rows.push(GanttRow {
            name: task.name.clone(),
            start: current_start,
            end: *end,
        });
        current_start = *end;
    }
    rows
}

/// Render the rows as proportional text bars with a dd/mm axis.
pub fn render_gantt(rows: &[GanttRow], chart_width: usize) -> String {
    if rows.is_empty() {
        return String::from("(no tasks scheduled)\n");
    }

    let span_start = rows[0].start;
    let span_end = rows[rows.len() - 1].end;
    let span_days = (span_end - span_start).num_days().max(1);
    let chart_width = chart_width.max(10);

    let name_width = rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Task".len());

    let scale = |date: NaiveDate| -> usize {
        let days = (date - span_start).num_days().clamp(0, span_days);
        (days as usize * chart_width) / span_days as usize
    };

    let mut out = String::new();
    out.push_str(&format!("{:<name_width$} |\n", "Task"));
    for row in rows {
        let offset = scale(row.start);
        let bar_end = scale(row.end).max(offset + 1);
        let mut line = format!("{:<name_width$} |", row.name);
        line.push_str(&" ".repeat(offset));
        line.push_str(&"#".repeat(bar_end - offset));
        out.push_str(line.trim_end());
        out.push('\n');
    }

    // dd/mm axis under the bar area
    let left = span_start.format("%d/%m").to_string();
    let right = span_end.format("%d/%m").to_string();
    out.push_str(&format!("{:<name_width$} |{}\n", "", "-".repeat(chart_width)));
    let gap = chart_width.saturating_sub(left.len() + right.len());
    out.push_str(&format!(
        "{:<name_width$} |{}{}{}\n",
        "",
        left,
        " ".repeat(gap),
        right
    ));
    out
}
