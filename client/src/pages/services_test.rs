use super::*;

#[test]
fn loading_phase_renders_the_fixed_skeleton_count() {
    assert_eq!(skeleton_slots(LoadPhase::Loading), SKELETON_CARD_COUNT);
}

#[test]
fn resolved_phases_render_no_skeletons() {
    assert_eq!(skeleton_slots(LoadPhase::Ready), 0);
    assert_eq!(skeleton_slots(LoadPhase::Failed), 0);
}
