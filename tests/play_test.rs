//! End-to-end tests: dataset to target to a scripted terminal round.

use routle::{choose_target, parse_routes, run_session, PropertyKeys, TargetSelection, TerminalView};
use routle_core::{Outcome, Route, Session};
use std::io::Cursor;

const ROUTES: &str = r#"[
  {"id": "8", "name": "Halsted"},
  {"id": "9", "name": "Ashland"},
  {"id": "20", "name": "Madison"},
  {"id": "49", "name": "Western"},
  {"id": "66", "name": "Chicago"},
  {"id": "77", "name": "Belmont"}
]"#;

fn start(target_id: &str) -> Session {
    let routes = parse_routes(ROUTES, PropertyKeys::default()).expect("Valid routes");
    let target = choose_target(&routes, &TargetSelection::Fixed(target_id.to_string()))
        .expect("Known target");
    Session::start(routes, target).expect("Session starts")
}

fn play(session: &mut Session, input: &str) -> (Option<Outcome>, String) {
    let mut view = TerminalView::new(Vec::new(), false);
    session.present(&mut view);
    let outcome =
        run_session(session, Cursor::new(input.to_string()), &mut view).expect("IO succeeds");
    let text = String::from_utf8(view.into_inner()).expect("UTF-8 output");
    (outcome, text)
}

#[test]
fn test_five_misses_lose() {
    let mut session = start("8");
    let (outcome, text) = play(
        &mut session,
        "Ashland\nmadison\n49\nCHICAGO\nBelmont\nHalsted\n",
    );

    assert_eq!(outcome, Some(Outcome::Lost));
    assert_eq!(session.history().len(), 5);
    assert!(text.contains("Oops, the correct answer was \"Halsted\"."));
    assert!(text.contains("map [#####] 100%"));
    // The sixth line is never read.
    assert!(session.history().iter().all(|g| !g.correct()));
}

#[test]
fn test_win_on_last_guess() {
    let mut session = start("77");
    let (outcome, text) = play(&mut session, "8\n9\n20\n49\nbelmont\n");

    assert_eq!(outcome, Some(Outcome::Won));
    assert!(text.contains("You got it! \"Belmont\" was correct!"));
    assert_eq!(session.history().last().map(|g| g.name()), Some("Belmont"));
}

#[test]
fn test_invalid_lines_cost_nothing() {
    let mut session = start("8");
    let (outcome, text) = play(&mut session, "Damen\n\n?ha\nHalsted\n");

    assert_eq!(outcome, Some(Outcome::Won));
    assert_eq!(session.history().len(), 1);
    assert!(text.contains("Pick a route from the list"));
    assert!(text.contains("  Halsted\n"));
}

#[test]
fn test_seeded_rounds_repeat() {
    let routes = parse_routes(ROUTES, PropertyKeys::default()).expect("Valid routes");
    let selection = TargetSelection::Random { seed: Some(2024) };
    let a = choose_target(&routes, &selection).expect("Target");
    let b = choose_target(&routes, &selection).expect("Target");
    assert_eq!(a, b);

    let mut session = Session::start(routes, a.clone()).expect("Session starts");
    let (outcome, _) = play(&mut session, &format!("{}\n", a.id()));
    assert_eq!(outcome, Some(Outcome::Won));
    assert_eq!(session.machine().map(|m| m.target().clone()), Some(a));
}

#[test]
fn test_unknown_target_never_starts() {
    let routes = parse_routes(ROUTES, PropertyKeys::default()).expect("Valid routes");
    assert!(Session::start(routes, Route::new("999", "Phantom")).is_err());
}
