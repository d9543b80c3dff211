// Field extraction: duration, priority, goal markers.
use todo_parser::model::Priority;
use todo_parser::model::extract::{
    extract_duration, extract_goal, extract_priority, parse_task_line, strip_list_marker,
};

const EPS: f64 = 1e-9;

#[test]
fn test_minutes_convert_to_hours() {
    let task = parse_task_line("- 英単語の暗記（30分）", 1.0).unwrap();
    assert!(
        (task.study_time_hours - 0.5).abs() < EPS,
        "30分 should become 0.5h, got {}",
        task.study_time_hours
    );
    assert!(
        !task.task.contains("30分"),
        "Matched duration must be removed from the text: {:?}",
        task.task
    );
}

#[test]
fn test_hours_pass_through() {
    let task = parse_task_line("- 数学の問題演習（1.5時間）", 1.0).unwrap();
    assert!((task.study_time_hours - 1.5).abs() < EPS);
}

#[test]
fn test_english_hour_units() {
    let task = parse_task_line("- review notes 2h", 1.0).unwrap();
    assert!((task.study_time_hours - 2.0).abs() < EPS);

    let task = parse_task_line("- shadowing 1hour", 1.0).unwrap();
    assert!((task.study_time_hours - 1.0).abs() < EPS);
    assert!(!task.task.contains("1hour"));
}

#[test]
fn test_default_duration_when_no_marker() {
    let task = parse_task_line("- リスニング練習", 1.0).unwrap();
    assert!((task.study_time_hours - 1.0).abs() < EPS);
    assert_eq!(task.task, "リスニング練習");

    // The fallback is configurable.
    let task = parse_task_line("- リスニング練習", 2.5).unwrap();
    assert!((task.study_time_hours - 2.5).abs() < EPS);
}

#[test]
fn test_first_duration_match_wins() {
    // "30分と1時間": only the first number+unit pair is extracted; the
    // second stays in the task text untouched.
    let task = parse_task_line("- 復習 30分と1時間", 1.0).unwrap();
    assert!((task.study_time_hours - 0.5).abs() < EPS);
    assert!(
        task.task.contains("1時間"),
        "Second duration must be left in the text: {:?}",
        task.task
    );
}

#[test]
fn test_zero_duration_passes_through() {
    // "0分" is a literal zero, not "no duration".
    let task = parse_task_line("- 休憩 0分", 1.0).unwrap();
    assert!(task.study_time_hours.abs() < EPS);
}

#[test]
fn test_space_before_unit_is_not_a_marker() {
    // The unit must immediately follow the number.
    let task = parse_task_line("- 暗記 30 分", 1.0).unwrap();
    assert!((task.study_time_hours - 1.0).abs() < EPS);
    assert!(task.task.contains("30 分"));
}

#[test]
fn test_priority_mapping() {
    let task = parse_task_line("- 読解 優先度: 高", 1.0).unwrap();
    assert_eq!(task.priority, Some(Priority::High));
    assert_eq!(task.task, "読解");

    // Full-width colon, numeric level.
    let task = parse_task_line("- 文法 優先度：2", 1.0).unwrap();
    assert_eq!(task.priority, Some(Priority::Medium));

    let task = parse_task_line("- 復習 優先度: 低", 1.0).unwrap();
    assert_eq!(task.priority, Some(Priority::Low));
    assert_eq!(task.priority.map(Priority::level), Some(3));
}

#[test]
fn test_goal_stops_at_punctuation() {
    let (goal, rest) = extract_goal("単語 目標: リスニング力向上、頑張る");
    assert_eq!(goal.as_deref(), Some("リスニング力向上"));
    assert!(
        rest.contains("頑張る"),
        "Text after the 、 belongs to the task, got {:?}",
        rest
    );
}

#[test]
fn test_all_three_markers_on_one_line() {
    let task = parse_task_line("- 長文読解 45分 優先度: 高 目標: 速読力アップ", 1.0).unwrap();
    assert!((task.study_time_hours - 0.75).abs() < EPS);
    assert_eq!(task.priority, Some(Priority::High));
    assert_eq!(task.goal.as_deref(), Some("速読力アップ"));
    assert_eq!(task.task, "長文読解");
}

#[test]
fn test_marker_only_line_yields_nothing() {
    assert!(parse_task_line("- 30分", 1.0).is_none());
    assert!(parse_task_line("-  ", 1.0).is_none());
    assert!(parse_task_line("- 優先度: 高", 1.0).is_none());
}

#[test]
fn test_priority_and_goal_without_duration() {
    // Extraction steps are independent; a missing duration does not
    // block the later extractions.
    let (priority, rest) = extract_priority("音読 優先度:3");
    assert_eq!(priority, Some(Priority::Low));
    assert_eq!(rest.trim(), "音読");
}

#[test]
fn test_duration_extraction_remainder() {
    let (hours, rest) = extract_duration("英語 45分学習");
    assert_eq!(hours, Some(0.75));
    assert!(!rest.contains("45分"));
    assert!(rest.contains("学習"));
}

#[test]
fn test_strip_list_markers() {
    assert_eq!(strip_list_marker("- item"), "item");
    assert_eq!(strip_list_marker("• item"), "item");
    assert_eq!(strip_list_marker("* item"), "item");
    assert_eq!(strip_list_marker("1. item"), "item");
    assert_eq!(strip_list_marker("12.item"), "item");
    assert_eq!(strip_list_marker("plain text"), "plain text");
    // A number without the dot is not a marker.
    assert_eq!(strip_list_marker("3 items"), "3 items");
}
