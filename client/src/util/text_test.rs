use super::*;

#[test]
fn single_line_yields_itself() {
    assert_eq!(label_lines("受付").collect::<Vec<_>>(), ["受付"]);
}

#[test]
fn splits_on_newline() {
    let lines: Vec<&str> = label_lines("クロージング /\nディスカッション").collect();
    assert_eq!(lines, ["クロージング /", "ディスカッション"]);
}

#[test]
fn keeps_empty_lines() {
    assert_eq!(label_lines("a\n\nb").count(), 3);
}
