use chrono::NaiveDate;
use plan_tool::input::{InputError, read_project_details};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn read(script: &str) -> Result<plan_tool::ProjectParameters, InputError> {
    let mut input = script.as_bytes();
    let mut output = Vec::new();
    read_project_details(&mut input, &mut output, d(2025, 6, 2))
}

#[test]
fn full_session_produces_parameters() {
    let params = read("01/02/2025\n2\n1\n50\n0.8\nDesign\n5\ny\nBuild\n8\nn\n2\n1\n")
        .expect("read details");

    assert_eq!(params.start_date, d(2025, 2, 1));
    assert_eq!(params.developers.len(), 2);
    assert_eq!(params.developers[0].value(), 1.0);
    assert_eq!(params.developers[1].value(), 0.5);
    assert_eq!(params.project_factor.value(), 0.8);
    assert_eq!(params.tasks.len(), 2);
    assert_eq!(params.tasks[0].name, "Design");
    assert_eq!(params.tasks[1].points, 8.0);
    assert_eq!(params.support_days, 2.0);
    assert_eq!(params.testing_days, 1.0);
}

#[test]
fn empty_start_date_uses_the_supplied_default() {
    let params = read("\n1\n1\n1\nOnly\n3\nn\n0\n0\n").expect("read details");
    assert_eq!(params.start_date, d(2025, 6, 2));
}

#[test]
fn malformed_date_fails_immediately() {
    assert!(matches!(
        read("2025-02-01\n"),
        Err(InputError::InvalidDate(_))
    ));
}

#[test]
fn malformed_developer_count_fails() {
    assert!(matches!(
        read("\nthree\n"),
        Err(InputError::InvalidNumber { .. })
    ));
}

#[test]
fn zero_developers_are_rejected() {
    assert!(matches!(
        read("\n0\n"),
        Err(InputError::NonPositiveDeveloperCount(0))
    ));
}

#[test]
fn negative_focus_factor_is_rejected() {
    assert!(matches!(
        read("\n1\n-0.5\n"),
        Err(InputError::NegativeFocusFactor(_))
    ));
}

#[test]
fn negative_task_points_are_rejected() {
    assert!(matches!(
        read("\n1\n1\n1\nBad\n-3\n"),
        Err(InputError::NegativePoints(_))
    ));
}

#[test]
fn truncated_input_reports_eof() {
    assert!(matches!(
        read("\n2\n1\n"),
        Err(InputError::UnexpectedEof)
    ));
}

#[test]
fn prompts_are_written_in_order() {
    let script = "\n1\n1\n1\nOnly\n3\nn\n0\n0\n";
    let mut input = script.as_bytes();
    let mut output = Vec::new();
    read_project_details(&mut input, &mut output, d(2025, 6, 2)).expect("read details");

    let text = String::from_utf8(output).expect("utf8");
    let start = text.find("Project start date").expect("start prompt");
    let devs = text.find("Number of developers").expect("dev prompt");
    let testing = text.find("Testing time in days").expect("testing prompt");
    assert!(start < devs && devs < testing);
}
