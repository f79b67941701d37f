//! Tests for script-driven replays.

use std::io::Write;
use strictly_games::{Replay, ReplayConfig, Script, Step};
use strictly_tictactoe::{MoveError, Player, Status, Verdict};

fn script_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{body}").expect("write script");
    file
}

#[test]
fn test_script_draw() {
    let file = script_file(r#"steps = ["0", "1", "2", "4", "3", "5", "7", "6", "8"]"#);
    let steps = Script::load(file.path()).unwrap();
    assert_eq!(steps.len(), 9);

    let replay = Replay::run(&steps, true).unwrap();
    assert_eq!(replay.history.status(), Status::GameOver(Verdict::Draw));
    assert!(replay.report(false).starts_with("Draw\n"));
}

#[test]
fn test_script_time_travel_branch() {
    let file = script_file(r#"steps = ["4", "0", "8", "2", "@1", "6"]"#);
    let steps = Script::load(file.path()).unwrap();
    assert_eq!(steps[4], Step::Jump(1));

    let replay = Replay::run(&steps, true).unwrap();
    assert_eq!(replay.history.len(), 3);
    assert_eq!(replay.history.status(), Status::NextPlayer(Player::X));
}

#[test]
fn test_script_with_bad_step_fails_to_load() {
    let file = script_file(r#"steps = ["4", "centre"]"#);
    let err = Script::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("centre"));
}

#[test]
fn test_empty_script() {
    let file = script_file("");
    assert!(Script::load(file.path()).unwrap().is_empty());
}

#[test]
fn test_game_over_rejections_are_reported() {
    let steps: Vec<Step> = ["0", "4", "1", "5", "2", "8"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let lenient = Replay::run(&steps, false).unwrap();
    assert_eq!(lenient.rejected.len(), 1);
    assert_eq!(
        lenient.rejected[0].error,
        MoveError::GameAlreadyOver(Verdict::Win(Player::X))
    );

    let config = ReplayConfig::default().with_strict(true);
    let strict = Replay::run(&steps, *config.strict()).unwrap_err();
    assert_eq!(strict.index, 5);
    assert!(strict.to_string().contains("Game is already over"));
}
