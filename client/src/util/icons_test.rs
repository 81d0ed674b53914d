use super::*;

#[test]
fn from_name_resolves_known_icons() {
    assert_eq!(Icon::from_name("cloud"), Icon::Cloud);
    assert_eq!(Icon::from_name("database"), Icon::Database);
    assert_eq!(Icon::from_name("analytics"), Icon::Chart);
}

#[test]
fn from_name_is_case_and_whitespace_insensitive() {
    assert_eq!(Icon::from_name(" Cloud "), Icon::Cloud);
    assert_eq!(Icon::from_name("SHIELD"), Icon::Shield);
}

#[test]
fn from_name_falls_back_for_unknown_names() {
    assert_eq!(Icon::from_name("definitely-not-an-icon"), Icon::Spark);
    assert_eq!(Icon::from_name(""), Icon::Spark);
    assert_eq!(Icon::from_name("🦀"), Icon::Spark);
}

#[test]
fn every_icon_renders_a_nonempty_glyph() {
    let all = [
        Icon::Cloud,
        Icon::Code,
        Icon::Database,
        Icon::Shield,
        Icon::Terminal,
        Icon::Chart,
        Icon::Spark,
    ];
    for icon in all {
        assert!(!icon.glyph().is_empty());
        assert!(icon.badge_class().starts_with("service-card__badge--"));
    }
}
