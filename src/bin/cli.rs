use chrono::Local;
use clap::Parser;
use plan_tool::charts::{burndown_series, gantt_rows, render_burndown, render_gantt};
use plan_tool::export::{PlanSnapshot, save_plan_to_csv, save_plan_to_json};
use plan_tool::input::read_project_details;
use plan_tool::{CustomHolidays, HolidayProvider, MexicanHolidays, plan};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "plan-tool",
    about = "Estimate a project completion timeline from focus factors and weighted tasks",
    version
)]
struct Cli {
    /// JSON file with holiday dates (array of YYYY-MM-DD); replaces the
    /// built-in Mexican calendar
    #[arg(long)]
    holidays: Option<PathBuf>,

    /// Write the plan report to a JSON file
    #[arg(long)]
    export_json: Option<PathBuf>,

    /// Write the plan report to a CSV file
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Chart width in columns
    #[arg(long, default_value_t = 60)]
    chart_width: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if let Err(err) = run(&cli, &mut input, &mut output) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let default_start = Local::now().date_naive();
    let params = read_project_details(input, output, default_start)?;

    let provider: Box<dyn HolidayProvider> = match &cli.holidays {
        Some(path) => Box::new(CustomHolidays::from_json_file(path)?),
        None => Box::new(MexicanHolidays),
    };

    let result = plan(&params, provider.as_ref())?;
    tracing::info!(
        total_points = result.total_points,
        units = result.task_end_dates.len(),
        "plan computed"
    );

    writeln!(output)?;
    writeln!(output, "Total story points: {}", result.total_points)?;
    for (task, end_date) in params.tasks.iter().zip(&result.task_end_dates) {
        writeln!(
            output,
            "-- Task {} finishes on {}",
            task.name,
            end_date.format("%d/%m/%Y")
        )?;
    }
    if let Some(final_date) = result.task_end_dates.last() {
        writeln!(output)?;
        writeln!(
            output,
            "Project end date: {}",
            final_date.format("%d/%m/%Y")
        )?;
    }

    let rows = gantt_rows(&params.tasks, &result.task_end_dates, params.start_date);
    writeln!(output, "\nGantt chart")?;
    write!(output, "{}", render_gantt(&rows, cli.chart_width))?;

    let series = burndown_series(
        result.total_points,
        &params.tasks,
        &result.task_end_dates,
        params.start_date,
    );
    writeln!(output, "\nBurndown")?;
    write!(output, "{}", render_burndown(&series, 10))?;

    let snapshot = PlanSnapshot::build(&params, &result);
    if let Some(path) = &cli.export_json {
        save_plan_to_json(&snapshot, path)?;
        writeln!(output, "Plan written to {}", path.display())?;
    }
    if let Some(path) = &cli.export_csv {
        save_plan_to_csv(&snapshot, path)?;
        writeln!(output, "Plan written to {}", path.display())?;
    }

    Ok(())
}
