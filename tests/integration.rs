// Integration tests (native) for the `space-cat` crate.
// Gameplay scenarios driven through the public board API; no browser needed.

use space_cat::view::scene;
use space_cat::{BoardConfig, BoardEffect, BoardEvent, Feedback, Position, PuzzleBoard};

fn answer_of(board: &PuzzleBoard, id: u32) -> &'static str {
    board.planet(id).unwrap().answer
}

fn solve(board: &mut PuzzleBoard, id: u32) -> Option<BoardEffect> {
    let answer = answer_of(board, id);
    board.dispatch(BoardEvent::PlanetClicked(id));
    board.dispatch(BoardEvent::DraftChanged(format!("  {}  ", answer.to_uppercase())));
    board.dispatch(BoardEvent::Submit)
}

#[test]
fn correct_answer_with_padding_and_case_solves_planet() {
    let mut board = PuzzleBoard::default();
    assert_eq!(
        board.planet(1).unwrap().riddle,
        "Что можно увидеть с закрытыми глазами?"
    );
    board.select_planet(1);
    board.update_draft_answer(" Сон ");
    let effect = board.submit_answer();

    assert!(matches!(
        effect,
        Some(BoardEffect::ScheduleAutoClose { delay_ms: 2000, .. })
    ));
    assert!(board.planet(1).unwrap().completed);
    assert_eq!(board.feedback(), Some(Feedback::Correct));
    // no cross-contamination
    assert!(board.planets().iter().filter(|p| p.id != 1).all(|p| !p.completed));
}

#[test]
fn wrong_answer_keeps_dialog_open() {
    let mut board = PuzzleBoard::default();
    board.select_planet(1);
    board.update_draft_answer("сны");
    assert_eq!(board.submit_answer(), None);

    assert_eq!(board.feedback(), Some(Feedback::TryAgain));
    assert_eq!(board.selected_id(), Some(1));
    assert_eq!(board.draft_answer(), "сны");
    assert!(!board.planet(1).unwrap().completed);
    assert_eq!(board.pending_close(), None);

    // unlimited retries
    for _ in 0..5 {
        board.submit_answer();
    }
    board.update_draft_answer("сон");
    assert!(board.submit_answer().is_some());
    assert!(board.planet(1).unwrap().completed);
}

#[test]
fn empty_answer_is_just_a_miss() {
    let mut board = PuzzleBoard::default();
    board.select_planet(4);
    board.update_draft_answer("   ");
    board.submit_answer();
    assert_eq!(board.feedback(), Some(Feedback::TryAgain));
    assert_eq!(board.completed_count(), 0);
}

#[test]
fn solving_everything_in_any_order_celebrates() {
    let cfg = BoardConfig::default();
    let mut board = PuzzleBoard::default();
    for (step, id) in [3, 1, 4, 2].into_iter().enumerate() {
        assert!(!board.all_completed());
        let Some(BoardEffect::ScheduleAutoClose { ticket, .. }) = solve(&mut board, id) else {
            panic!("planet {id} should have been solved");
        };
        assert_eq!(board.completed_count(), step + 1);
        board.dispatch(BoardEvent::AutoCloseElapsed(ticket));
        assert_eq!(board.selected_id(), None);
    }
    assert!(board.all_completed());

    let view = scene(&board, &cfg);
    assert!(view.show_banner);
    assert_eq!(view.progress.label(), "4 / 4");
    assert!(view.planets.iter().all(|p| !p.clickable()));
}

#[test]
fn clicking_solved_planet_changes_nothing() {
    let mut board = PuzzleBoard::default();
    let Some(BoardEffect::ScheduleAutoClose { ticket, .. }) = solve(&mut board, 2) else {
        panic!("expected a scheduled close");
    };
    board.auto_close_elapsed(ticket);

    let before = board.clone();
    assert_eq!(board.dispatch(BoardEvent::PlanetClicked(2)), None);
    assert_eq!(board, before);
    assert_eq!(board.selected_id(), None);

    // also while another dialog is open
    board.select_planet(3);
    board.update_draft_answer("жжётся");
    let before = board.clone();
    board.select_planet(2);
    assert_eq!(board, before);
    assert_eq!(board.selected_id(), Some(3));
}

#[test]
fn late_timer_does_not_close_newer_selection() {
    let mut board = PuzzleBoard::default();
    let Some(BoardEffect::ScheduleAutoClose { ticket, .. }) = solve(&mut board, 1) else {
        panic!("expected a scheduled close");
    };

    // user moves on before the close fires
    let effect = board.dispatch(BoardEvent::PlanetClicked(2));
    assert_eq!(effect, Some(BoardEffect::CancelAutoClose { ticket }));
    assert_eq!(board.pending_close(), None);

    board.update_draft_answer("обла");
    board.dispatch(BoardEvent::AutoCloseElapsed(ticket));

    assert_eq!(board.selected_id(), Some(2));
    assert_eq!(board.draft_answer(), "обла");
    assert_eq!(board.character_position(), Position::new(70.0, 20.0));
}

#[test]
fn completion_is_monotonic() {
    let mut board = PuzzleBoard::default();
    solve(&mut board, 1);
    let events = [
        BoardEvent::DialogDismissed,
        BoardEvent::PlanetClicked(1),
        BoardEvent::PlanetClicked(2),
        BoardEvent::DraftChanged("ерунда".into()),
        BoardEvent::Submit,
        BoardEvent::DialogDismissed,
        BoardEvent::DraftChanged(String::new()),
        BoardEvent::Submit,
    ];
    for event in events {
        board.dispatch(event);
        assert!(board.planet(1).unwrap().completed);
        let solved = board.planets().iter().filter(|p| p.completed).count();
        assert_eq!(board.completed_count(), solved);
        assert_eq!(board.all_completed(), solved == board.total());
    }
}

#[test]
fn character_only_moves_on_selection() {
    let mut board = PuzzleBoard::default();
    assert_eq!(board.character_position(), Position::CENTER);
    board.select_planet(4);
    let at = board.planet(4).unwrap().position;
    assert_eq!(board.character_position(), at);
    board.close_dialog();
    assert_eq!(board.character_position(), at);
    board.update_draft_answer("x");
    board.submit_answer();
    assert_eq!(board.character_position(), at);
}
