use std::process::Command;

fn pig_bin() -> String {
    env!("CARGO_BIN_EXE_pig").to_string()
}

#[test]
fn unknown_player_kind_exits_before_any_turn() {
    let out = Command::new(pig_bin())
        .args(["--player1", "robot", "--player2", "human"])
        .output()
        .expect("run pig binary");

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("Error: A player must be either a 'human' or 'computer'"),
        "stderr: {stderr}"
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("score:"), "stdout: {stdout}");
    assert!(!stdout.contains("The Game of Pig"), "stdout: {stdout}");
}

#[test]
fn seeded_computer_game_runs_to_a_winner() {
    let out = Command::new(pig_bin())
        .args(["--player1", "computer", "--player2", "computer", "--seed", "7"])
        .output()
        .expect("run pig binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("*************************\nThe Game of Pig\n\n"));
    assert!(stdout.trim_end().ends_with("has won!"), "stdout: {stdout}");
}
