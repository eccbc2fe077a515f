//! Molkky integration tests.

use std::io::Cursor;

use funny_bunny::core::{Console, InputError};
use funny_bunny::games::molkky::{play, Molkky, RESET_SCORE};

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(console: TestConsole) -> String {
    let (_, output) = console.into_parts();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_registration() {
    let mut c = console("\nAda\nBo\nAda\n\n");
    let game = Molkky::register_players(&mut c).unwrap();

    let names: Vec<_> = game.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Bo"]);

    let out = transcript(c);
    assert!(out.starts_with("Enter all players. Stop with an empty line.\n"));
    assert!(out.contains("Add at least one player.\n"));
    assert!(out.contains("You've already added Ada.\n"));
}

#[test]
fn test_single_player_game_transcript() {
    // 12 + 12 + 12 + 12 = 48, then two skittles = 50
    let mut c = console("Ada\n\n12\n12\n12\n12\n3,4\n");
    assert_eq!(play(&mut c).unwrap(), "Ada");

    let out = transcript(c);
    assert_eq!(out.matches("Ada's turn!").count(), 5);
    assert!(out.ends_with("\nCurrent situation:\nAda: 50\n\nThe winner is Ada!\n"));
}

#[test]
fn test_overshoot_and_bad_input() {
    let input = "Ada\nBo\n\n\
                 12\n1\n\
                 12\n1\n\
                 12\n1\n\
                 12\n1\n\
                 5\n13\n4,4\n1,2\n";
    let mut c = console(input);
    let mut game = Molkky::register_players(&mut c).unwrap();

    // Nobody reaches 50; the input runs out mid-game
    assert!(matches!(game.run(&mut c), Err(InputError::Closed)));
    assert_eq!(game.players()[0].score, RESET_SCORE);
    assert_eq!(game.players()[1].score, 6);

    let out = transcript(c);
    assert_eq!(
        out.matches("Skittle numbers must be distinct values between 1 and 12.").count(),
        2
    );
    assert!(out.contains("Current situation:\nAda: 25\nBo: 4\n"));
}

#[test]
fn test_miss_scores_nothing() {
    let mut c = console("Ada\n\n\n");
    let mut game = Molkky::register_players(&mut c).unwrap();

    assert!(game.run(&mut c).is_err());
    assert_eq!(game.players()[0].score, 0);
    assert!(transcript(c).contains("Ada: 0\n"));
}
