use super::*;

#[test]
fn session_blocks_get_highlight_pill() {
    let highlighted: Vec<&str> = SCHEDULE
        .iter()
        .filter(|e| label_class(e).ends_with("--highlight"))
        .map(|e| e.event_label)
        .collect();
    assert_eq!(highlighted, ["全体会", "分科会1", "分科会2", "分科会3"]);
}

#[test]
fn simple_rows_use_plain_label() {
    assert_eq!(label_class(&SCHEDULE[0]), "timetable__label");
}

#[test]
fn breakout_uses_grid_plenary_single_column() {
    assert!(sessions_class(EntryKind::Breakout).contains("--grid"));
    assert!(!sessions_class(EntryKind::Plenary).contains("--grid"));
}
