use std::io::{self, Cursor};
use std::thread;
use std::time::Duration;

use pig::{
    Bot, ComputerBot, Game, GameError, GameStatus, HumanBot, Session, build_players,
};

const BANNER: &str = "*************************\nThe Game of Pig\n\n";

fn scripted_human(lines: &str) -> Box<dyn Bot> {
    Box::new(HumanBot::new(Cursor::new(lines.to_string()), io::sink()))
}

fn transcript(session: Session<Vec<u8>>) -> String {
    let (_, out) = session.into_parts();
    String::from_utf8(out).expect("transcript is utf-8")
}

#[test]
fn human_game_prints_every_roll_and_the_winner() -> Result<(), GameError> {
    let mut rolls = vec![1];
    rolls.extend([6; 17]);
    let game = Game::builder(build_players("human", "human")?)
        .with_rolls(rolls)
        .build()?;
    let bots = [scripted_human("x\nr\n"), scripted_human(&"r\n".repeat(17))];
    let mut session = Session::new(game, bots, Vec::new());

    assert_eq!(session.run()?, GameStatus::Finished { winner: 1 });
    assert_eq!(session.game().player(1)?.score(), 102);

    let out = transcript(session);
    let opening = format!(
        "{BANNER}\
         Player 1 rolling number: 1\n\
         Player 1 turn total: 0\n\
         Player 1 score: 0\n\
         Player 2 score: 0\n\n\
         Player 1's turn ended with 1\n\
         Player 1 score: 0\n\
         Player 2 score: 0\n\n\
         Player 2 rolling number: 6\n\
         Player 2 turn total: 6\n"
    );
    assert!(out.starts_with(&opening), "unexpected opening:\n{out}");
    assert_eq!(out.matches("Player 2 rolling number: 6").count(), 17);
    assert!(out.ends_with(
        "Player 2 rolling number: 6\n\
         Player 2 turn total: 102\n\
         Player 1 score: 0\n\
         Player 2 score: 0\n\n\
         Player 1 score: 0\n\
         Player 2 score: 102\n\n\
         Player 2 has won!\n"
    ));
    Ok(())
}

#[test]
fn computer_games_are_reproducible_from_the_seed() -> Result<(), GameError> {
    let play = |seed: u64| -> Result<(GameStatus, String), GameError> {
        let game = Game::builder(build_players("computer", "computer")?)
            .with_seed(seed)
            .build()?;
        let bots: [Box<dyn Bot>; 2] = [Box::new(ComputerBot::new()), Box::new(ComputerBot::new())];
        let mut session = Session::new(game, bots, Vec::new());
        let status = session.run()?;
        Ok((status, transcript(session)))
    };

    let (status, first) = play(2024)?;
    let (_, second) = play(2024)?;
    assert_eq!(first, second);
    let GameStatus::Finished { winner } = status else {
        panic!("untimed game must have a winner, got {status:?}");
    };
    assert!(first.starts_with(BANNER));
    assert!(first.ends_with(&format!("Player {} has won!\n", winner + 1)));
    assert!(!first.contains("One minute has run out"));
    Ok(())
}

#[test]
fn timed_out_tie_reports_an_even_game() -> Result<(), GameError> {
    let game = Game::builder(build_players("computer", "human")?)
        .timed(true)
        .with_time_limit(Duration::from_millis(1))
        .build()?;
    thread::sleep(Duration::from_millis(20));
    let bots: [Box<dyn Bot>; 2] = [Box::new(ComputerBot::new()), scripted_human("")];
    let mut session = Session::new(game, bots, Vec::new());

    assert_eq!(session.run()?, GameStatus::Draw);
    assert_eq!(
        transcript(session),
        format!(
            "{BANNER}\
             One minute has run out!!!\n\
             It's an even game\n\n\
             Player 1 score: 0\n\
             Player 2 score: 0\n\n"
        )
    );
    Ok(())
}

#[test]
fn closed_console_aborts_the_session() -> Result<(), GameError> {
    let game = Game::builder(build_players("human", "computer")?).build()?;
    let bots: [Box<dyn Bot>; 2] = [scripted_human("maybe\n"), Box::new(ComputerBot::new())];
    let mut session = Session::new(game, bots, Vec::new());
    assert!(matches!(session.run(), Err(GameError::InputClosed)));
    assert_eq!(session.game().status(), GameStatus::Ongoing);
    Ok(())
}

#[test]
fn invalid_player_kind_stops_before_any_game_exists() {
    let err = build_players("robot", "computer").unwrap_err();
    assert!(matches!(err, GameError::InvalidPlayerKind(ref kind) if kind == "robot"));
    assert!(err
        .to_string()
        .starts_with("A player must be either a 'human' or 'computer'"));
}
