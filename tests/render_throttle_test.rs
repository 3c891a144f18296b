use reflex_test::core::GameSnapshot;
use reflex_test::term::RenderThrottle;
use reflex_test::types::GamePhase;

#[test]
fn idle_game_renders_only_on_refresh() {
    let mut throttle = RenderThrottle::new(16, 500);
    let snap = GameSnapshot {
        phase: GamePhase::WaitInfo,
        ..GameSnapshot::default()
    };

    let mut frames = 0;
    for now_ms in 0..2_000u64 {
        if throttle.should_render(now_ms, snap.fingerprint()) {
            frames += 1;
        }
    }
    // t = 0, 500, 1000, 1500
    assert_eq!(frames, 4);
}

#[test]
fn phase_change_renders_promptly() {
    let mut throttle = RenderThrottle::new(16, 500);
    let mut snap = GameSnapshot::default();
    assert!(throttle.should_render(0, snap.fingerprint()));

    snap.phase = GamePhase::BlinkLed;
    snap.index = 3;
    assert!(throttle.should_render(20, snap.fingerprint()));
    assert!(!throttle.should_render(21, snap.fingerprint()));
}
