use super::*;

#[test]
fn hidden_on_first_render() {
    assert!(!HeaderState::default().logo_visible);
}

#[test]
fn visible_only_once_hero_bottom_is_above_viewport() {
    assert!(!logo_visible(320.0));
    assert!(!logo_visible(0.0));
    assert!(logo_visible(-0.5));
    assert!(logo_visible(-900.0));
}

#[test]
fn scroll_reports_changes_only() {
    let mut header = HeaderState::default();
    assert!(!header.on_scroll(400.0));
    assert!(header.on_scroll(-1.0));
    assert!(header.logo_visible);
    assert!(!header.on_scroll(-200.0));
    assert!(header.on_scroll(10.0));
    assert!(!header.logo_visible);
}

#[test]
fn scrolling_back_up_hides_again() {
    let mut header = HeaderState::default();
    for bottom in [300.0, 50.0, -10.0, -300.0, -10.0, 0.0, 120.0] {
        header.on_scroll(bottom);
        assert_eq!(header.logo_visible, bottom < 0.0, "bottom = {bottom}");
    }
}
