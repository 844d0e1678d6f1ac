use super::*;

#[test]
fn known_section_becomes_pending_target() {
    let mut nav = NavigationState::new();
    assert!(nav.scroll_to_section("projects"));
    assert_eq!(nav.pending_scroll(), Some(SectionId::Projects));

    assert!(!nav.take_scroll_target_for(SectionId::About));
    assert!(nav.take_scroll_target_for(SectionId::Projects));
    assert_eq!(nav.pending_scroll(), None);
    assert!(!nav.take_scroll_target_for(SectionId::Projects));
}

#[test]
fn unknown_section_is_a_silent_no_op() {
    let mut nav = NavigationState::new();
    nav.scroll_to_section("contact");

    assert!(!nav.scroll_to_section("pricing"));
    assert_eq!(nav.pending_scroll(), Some(SectionId::Contact));
}

#[test]
fn scrolling_closes_the_mobile_menu() {
    let mut nav = NavigationState::new();
    nav.toggle_menu();
    assert!(nav.menu_open());
    nav.scroll_to_section("about");
    assert!(!nav.menu_open());

    nav.toggle_menu();
    nav.scroll_to_section("nowhere");
    assert!(!nav.menu_open());
}

#[test]
fn scrolled_flag_tracks_threshold() {
    let mut nav = NavigationState::new();
    nav.on_scroll(SCROLLED_THRESHOLD);
    assert!(!nav.scrolled());
    nav.on_scroll(SCROLLED_THRESHOLD + 1.0);
    assert!(nav.scrolled());
    nav.on_scroll(0.0);
    assert!(!nav.scrolled());
}
