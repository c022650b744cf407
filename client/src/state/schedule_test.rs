use super::*;

// =============================================================
// Ordering
// =============================================================

#[test]
fn schedule_has_eleven_rows_in_day_order() {
    assert_eq!(SCHEDULE.len(), 11);
    assert_eq!(SCHEDULE[0].start_time, "9:30");
    assert_eq!(SCHEDULE[10].end_time, "17:15");
}

#[test]
fn rows_are_contiguous() {
    for pair in SCHEDULE.windows(2) {
        assert_eq!(pair[0].end_time, pair[1].start_time, "gap after {}", pair[0].event_label);
    }
}

#[test]
fn session_blocks_in_order() {
    let blocks: Vec<&str> = SCHEDULE
        .iter()
        .filter(|e| e.has_sessions())
        .map(|e| e.event_label)
        .collect();
    assert_eq!(blocks, ["全体会", "分科会1", "分科会2", "分科会3"]);
}

#[test]
fn breakout_sessions_keep_authored_order() {
    let labels: Vec<&str> = SCHEDULE
        .iter()
        .flat_map(|e| e.sessions().iter())
        .map(|s| s.event_label)
        .collect();
    assert_eq!(labels, ["全体会", "分科会A", "分科会B", "分科会C", "分科会D", "分科会E", "分科会F"]);
}

// =============================================================
// Entry kinds
// =============================================================

#[test]
fn simple_entries_expose_no_sessions() {
    for entry in SCHEDULE.iter().filter(|e| e.kind == EntryKind::Simple) {
        assert!(entry.sessions().is_empty());
        assert!(!entry.has_sessions());
        assert!(!entry.is_highlighted());
        assert!(entry.duration_label.is_none());
    }
}

#[test]
fn simple_kind_hides_sessions_even_if_present() {
    let entry = ScheduleEntry { kind: EntryKind::Simple, ..SCHEDULE[2] };
    assert!(entry.sessions().is_empty());
}

#[test]
fn plenary_and_breakout_entries_have_sessions_and_duration() {
    for entry in SCHEDULE.iter().filter(|e| e.kind != EntryKind::Simple) {
        assert!(entry.has_sessions());
        assert!(entry.is_highlighted());
        assert!(entry.duration_label.is_some());
    }
}

#[test]
fn plenary_has_one_session_with_four_speakers() {
    let plenary = SCHEDULE
        .iter()
        .find(|e| e.kind == EntryKind::Plenary)
        .expect("plenary entry");
    assert_eq!(plenary.duration_label, Some("(75min.)"));
    assert_eq!(plenary.sessions().len(), 1);
    assert_eq!(plenary.sessions()[0].speakers.len(), 4);
}

#[test]
fn time_range_joins_labels() {
    assert_eq!(SCHEDULE[0].time_range(), "9:30-10:00");
}

#[test]
fn multiline_labels_are_preserved() {
    assert_eq!(SCHEDULE[3].event_label.lines().count(), 2);
    assert_eq!(SCHEDULE[10].event_label, "クロージング /\nディスカッション");
}

// =============================================================
// Session defaults
// =============================================================

#[test]
fn sold_out_absent_means_false() {
    let session = Session { sold_out: None, ..SCHEDULE[2].sessions()[0] };
    assert!(!session.is_sold_out());
    let explicit = Session { sold_out: Some(false), ..session };
    assert_eq!(session.is_sold_out(), explicit.is_sold_out());
}

#[test]
fn sold_out_sessions_are_c_and_f() {
    let sold: Vec<&str> = SCHEDULE
        .iter()
        .flat_map(|e| e.sessions().iter())
        .filter(|s| s.is_sold_out())
        .map(|s| s.event_label)
        .collect();
    assert_eq!(sold, ["分科会C", "分科会F"]);
}

#[test]
fn speaker_names_join_with_slash() {
    let session = SCHEDULE[4].sessions()[1];
    assert_eq!(session.speaker_names(), "榎 裕子氏 (GMBA2022期) / 馬場 英鷹氏 (GMBA2021期)");
}

#[test]
fn speaker_names_single_speaker_has_no_separator() {
    let session = SCHEDULE[4].sessions()[0];
    assert!(!session.speaker_names().contains(SPEAKER_NAME_SEPARATOR));
}

#[test]
fn speaker_names_empty_roster_is_empty_string() {
    let session = Session { speakers: &[], ..SCHEDULE[2].sessions()[0] };
    assert_eq!(session.speaker_names(), "");
}

// =============================================================
// Speaker defaults
// =============================================================

#[test]
fn avatar_falls_back_to_placeholder() {
    let speaker = Speaker { name: "x", organization: "y", position: "", info: None, image: None };
    assert_eq!(speaker.avatar_url(), PLACEHOLDER_AVATAR_URL);
}

#[test]
fn avatar_uses_supplied_image() {
    let speaker = SCHEDULE[2].sessions()[0].speakers[0];
    assert_ne!(speaker.avatar_url(), PLACEHOLDER_AVATAR_URL);
    assert!(speaker.avatar_url().starts_with("https://"));
}

#[test]
fn every_authored_speaker_has_photo() {
    for session in SCHEDULE.iter().flat_map(|e| e.sessions().iter()) {
        for speaker in session.speakers {
            assert!(speaker.image.is_some(), "{} missing photo", speaker.name);
        }
    }
}
