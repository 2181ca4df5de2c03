pub mod burndown;
pub mod gantt;

pub use burndown::{burndown_series, render_burndown};
pub use gantt::{GanttRow, gantt_rows, render_gantt};
