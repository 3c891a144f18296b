//! Full rounds through the executor with scripted buttons and recording peripherals.

use reflex_test::engine::{Executor, LcdDriver, LedDriver, TickTimer};
use reflex_test::types::{
    Button, ButtonMask, GamePhase, FIVE_SECOND_WAIT, NUMBER_OF_HIGH_SCORES, SEQUENCE_LENGTH,
};

#[derive(Debug, Clone, PartialEq)]
enum LcdCall {
    Instructions { average: f64 },
    Stats { average: f64, min: f64, max: f64 },
    Blank,
}

#[derive(Default)]
struct RecordingLcd {
    calls: Vec<LcdCall>,
}

impl LcdDriver for RecordingLcd {
    fn show_instructions(&mut self, _high_scores: &[f64; NUMBER_OF_HIGH_SCORES], average: f64) {
        self.calls.push(LcdCall::Instructions { average });
    }

    fn show_stats(&mut self, average: f64, min: f64, max: f64) {
        self.calls.push(LcdCall::Stats { average, min, max });
    }

    fn blank_screen(&mut self) {
        self.calls.push(LcdCall::Blank);
    }
}

#[derive(Default)]
struct RecordingLeds {
    on: [bool; 4],
}

impl RecordingLeds {
    fn lit(&self) -> Vec<u8> {
        (1..=4u8).filter(|&led| self.on[(led - 1) as usize]).collect()
    }
}

impl LedDriver for RecordingLeds {
    fn set_led(&mut self, led: u8, on: bool) {
        self.on[(led - 1) as usize] = on;
    }
}

type Game = Executor<ButtonMask, TickTimer, RecordingLeds, RecordingLcd>;

fn new_game() -> Game {
    let mut game = Executor::new(
        ButtonMask::NONE,
        TickTimer::new(),
        RecordingLeds::default(),
        RecordingLcd::default(),
    );
    assert_eq!(game.run_for(2), GamePhase::WaitInfo);
    game
}

fn run_until(game: &mut Game, limit: u32, target: GamePhase) {
    for _ in 0..limit {
        if game.run() == target {
            return;
        }
    }
    panic!("{:?} not reached within {} ticks", target, limit);
}

fn arm(game: &mut Game) {
    *game.buttons_mut() = ButtonMask::from(Button::Btn3);
    assert_eq!(game.run(), GamePhase::WaitFiveSeconds);
    assert_eq!(game.run_for(FIVE_SECOND_WAIT), GamePhase::BlankScreen);
    *game.buttons_mut() = ButtonMask::NONE;
}

/// Wait for the next flash, let `idle` ticks pass, then press the lit button.
///
/// The tick timer is started on `BlinkLed` and stopped on `ButtonPressed`, so
/// the measured response is `idle + 2` ms.
fn answer_flash(game: &mut Game, idle: u32) {
    run_until(game, 4_100, GamePhase::WaitForButton);

    let led = game.state().get_led().expect("round in progress");
    assert_eq!(game.leds().lit(), vec![led]);
    assert_eq!(game.lit_led(), Some(led));

    assert_eq!(game.run_for(idle), GamePhase::WaitForButton);
    *game.buttons_mut() = ButtonMask::from(Button::from_id(led).expect("valid led"));
    assert_eq!(game.run(), GamePhase::ButtonPressed);
    *game.buttons_mut() = ButtonMask::NONE;
    assert_eq!(game.run(), GamePhase::WaitBetweenFlash);
    assert!(game.leds().lit().is_empty());
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_full_round_records_stats_and_high_score() {
    let mut game = new_game();
    arm(&mut game);

    // Responses of 0.1s, 0.2s, ... 1.0s.
    for i in 0..SEQUENCE_LENGTH as u32 {
        answer_flash(&mut game, 100 * (i + 1) - 2);
        assert_eq!(game.state().current_index(), (i + 1) as usize);
    }
    assert!(game.state().is_sequence_done());
    assert_eq!(game.run(), GamePhase::ShowStats);

    let stats = *game.round_stats();
    assert_eq!(stats.samples, SEQUENCE_LENGTH as u32);
    assert!(close(stats.min, 0.1));
    assert!(close(stats.max, 1.0));
    assert!(close(stats.average, 0.55));
    assert!(stats.min <= stats.average && stats.average <= stats.max);
    assert!(close(game.state().response_time(), 1.0));

    assert_eq!(game.run(), GamePhase::WaitStats);
    assert_eq!(game.run_for(FIVE_SECOND_WAIT), GamePhase::UpdateScores);
    assert_eq!(game.run(), GamePhase::ShowInfo);
    assert_eq!(game.run(), GamePhase::WaitInfo);

    let scores = game.state().high_scores().entries();
    assert!(close(scores[0], 0.55));
    assert!(scores[1..].iter().all(|&s| s == 5.0));
    assert_eq!(game.rounds_completed(), 1);

    // LCD output follows the phases in order.
    let calls = &game.lcd().calls;
    assert_eq!(calls.len(), 6, "{:?}", calls);
    assert_eq!(calls[0], LcdCall::Blank);
    assert_eq!(calls[1], LcdCall::Instructions { average: 0.0 });
    assert_eq!(calls[2], LcdCall::Blank);
    match calls[3] {
        LcdCall::Stats { average, min, max } => {
            assert!(close(average, 0.55));
            assert!(close(min, 0.1));
            assert!(close(max, 1.0));
        }
        ref other => panic!("expected stats, got {:?}", other),
    }
    assert_eq!(calls[4], LcdCall::Blank);
    match calls[5] {
        LcdCall::Instructions { average } => assert!(close(average, 0.55)),
        ref other => panic!("expected instructions, got {:?}", other),
    }
}

#[test]
fn test_abandoned_round_keeps_high_scores() {
    let mut game = new_game();
    arm(&mut game);
    answer_flash(&mut game, 300);

    run_until(&mut game, 4_100, GamePhase::WaitForButton);
    assert_eq!(game.run_for(FIVE_SECOND_WAIT - 1), GamePhase::WaitForButton);
    assert_eq!(game.run(), GamePhase::ShowInfo);

    // The LED goes dark once the info screen is shown.
    assert_eq!(game.run(), GamePhase::WaitInfo);
    assert!(game.leds().lit().is_empty());
    assert_eq!(game.lit_led(), None);

    assert!(game.state().high_scores().entries().iter().all(|&s| s == 5.0));
    assert_eq!(game.rounds_completed(), 0);
}

#[test]
fn test_new_round_resets_statistics() {
    let mut game = new_game();
    arm(&mut game);
    answer_flash(&mut game, 48);
    assert!(close(game.state().min_response_time(), 0.05));

    // Abandon, then arm again: the blank screen clears the previous numbers.
    run_until(&mut game, 4_100 + FIVE_SECOND_WAIT, GamePhase::ShowInfo);
    game.run();
    arm(&mut game);
    game.run();

    assert_eq!(game.round_stats().samples, 0);
    assert_eq!(game.state().min_response_time(), 5.0);
    assert_eq!(game.state().max_response_time(), 0.0);
    assert_eq!(game.state().average_response_time(), 0.0);
    assert_eq!(game.state().current_index(), 0);
}

#[test]
fn test_init_resets_everything() {
    let mut game = new_game();
    arm(&mut game);
    answer_flash(&mut game, 10);

    game.init();
    assert_eq!(game.phase(), GamePhase::Init);
    assert_eq!(game.ticks(), 0);
    assert_eq!(game.state().current_index(), 0);
    assert!(game.leds().lit().is_empty());
    assert_eq!(game.lcd().calls.last(), Some(&LcdCall::Blank));
    assert_eq!(game.run_for(2), GamePhase::WaitInfo);
}
