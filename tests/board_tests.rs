use std::io::Write;
use std::sync::Arc;
use wordforge::board::{board_text, Boggler, DiceBoard, LetterBoard};
use wordforge::dice::{DiceSet, DiceSetKind};
use wordforge::error::WordForgeError;

#[test]
fn parse_reads_header_and_letters() {
    let board = LetterBoard::parse("2 3\nA  B  C\nD  E  F").unwrap();
    assert_eq!(board.rows(), 2);
    assert_eq!(board.cols(), 3);
    assert_eq!(board.cells(), 6);
    assert_eq!(board.letter(0), b'A');
    assert_eq!(board.letter(5), b'F');
}

#[test]
fn parse_is_case_and_spacing_insensitive() {
    let board = LetterBoard::parse("2   2\n  a qu\nb\tc").unwrap();
    assert_eq!(board.letter(0), b'A');
    assert_eq!(board.letter(1), b'Q');
    assert_eq!(board.letter(2), b'B');
}

#[test]
fn text_round_trip_reproduces_the_board() {
    let board = LetterBoard::parse("2 2\nQu A\nT S").unwrap();
    let text = board_text(&board);
    assert!(text.starts_with("2 2\n"));
    assert!(text.contains("Qu"));
    let reparsed = LetterBoard::parse(&text).unwrap();
    assert_eq!(board, reparsed);
}

#[test]
fn parse_rejects_malformed_headers() {
    for text in ["", "4", "x 4\nA", "4 y\nA", "0 4\nA"] {
        let err = LetterBoard::parse(text).unwrap_err();
        assert!(matches!(err, WordForgeError::BoardFormat(_)), "{:?}", text);
    }
}

#[test]
fn parse_rejects_missing_letters() {
    let err = LetterBoard::parse("2 2\nA B C").unwrap_err();
    match err {
        WordForgeError::BoardFormat(msg) => assert!(msg.contains("expected 4")),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn parse_rejects_invalid_tokens() {
    for text in ["1 1\n3", "1 1\nAB", "1 1\n?", "1 2\nA B!"] {
        let err = LetterBoard::parse(text).unwrap_err();
        assert!(matches!(err, WordForgeError::BoardFormat(_)), "{:?}", text);
    }
}

#[test]
fn read_file_names_the_file_in_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "2 2\nA B").unwrap();
    let err = LetterBoard::read_file(file.path()).unwrap_err();
    match err {
        WordForgeError::BoardFormat(msg) => {
            assert!(msg.contains(file.path().to_str().unwrap()));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn read_file_round_trip() {
    let board = LetterBoard::parse("4 4\nS E R S\nP A T G\nL I N E\nS E R S").unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", board_text(&board)).unwrap();
    assert_eq!(LetterBoard::read_file(file.path()).unwrap(), board);
}

#[test]
fn from_rows_validates_shape_and_alphabet() {
    let board = LetterBoard::from_rows(&[vec![b'C', b'A'], vec![b'T', b'S']]).unwrap();
    assert_eq!(board.letter(3), b'S');

    assert!(LetterBoard::from_rows(&[]).is_err());
    assert!(LetterBoard::from_rows(&[vec![b'A', b'B'], vec![b'C']]).is_err());
    assert!(LetterBoard::from_rows(&[vec![b'a']]).is_err());
}

#[test]
fn from_tokens_accepts_improvement_records() {
    let tokens: Vec<String> = ["Qu", "A", "T", "S"].iter().map(|s| s.to_string()).collect();
    let board = LetterBoard::from_tokens(2, 2, &tokens).unwrap();
    assert_eq!(board.letter(0), b'Q');
    assert_eq!(board.letters_linear(), tokens);

    assert!(LetterBoard::from_tokens(2, 2, &tokens[..3].to_vec()).is_err());
}

#[test]
fn random_boards_stay_in_the_alphabet() {
    let mut rng = fastrand::Rng::with_seed(11);
    let board = LetterBoard::random(5, 5, &mut rng);
    assert_eq!(board.cells(), 25);
    for k in 0..board.cells() {
        assert!(board.letter(k).is_ascii_uppercase());
    }
}

#[test]
fn rolled_dice_board_uses_every_die_once() {
    let dice = Arc::new(DiceSet::builtin(DiceSetKind::Master));
    let mut rng = fastrand::Rng::with_seed(3);
    let board = DiceBoard::roll(dice.clone(), &mut rng);

    let mut seen: Vec<usize> = (0..board.cells()).map(|k| board.die_at(k)).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..dice.len()).collect::<Vec<_>>());

    for k in 0..board.cells() {
        let die = &dice.dice[board.die_at(k)];
        assert!((board.face_at(k) as usize) < die.len());
        assert!(die.as_bytes().contains(&board.letter(k)));
    }
}

#[test]
fn dice_board_clone_is_a_deep_copy() {
    let dice = Arc::new(DiceSet::builtin(DiceSetKind::Classic1992));
    let mut rng = fastrand::Rng::with_seed(5);
    let original = DiceBoard::roll(dice, &mut rng);
    let clone = original.clone();

    let before: Vec<u8> = (0..original.cells()).map(|k| original.letter(k)).collect();
    let mut mutated = clone;
    wordforge::optimizer::mutation::reroll(&mut mutated, &[0, 1, 2, 3], &mut rng);

    let after: Vec<u8> = (0..original.cells()).map(|k| original.letter(k)).collect();
    assert_eq!(before, after, "mutating a clone leaked into the original");
}

#[test]
fn dice_board_serializes_like_a_letter_board() {
    let dice = Arc::new(DiceSet::builtin(DiceSetKind::Classic1992));
    let mut rng = fastrand::Rng::with_seed(9);
    let board = DiceBoard::roll(dice, &mut rng);

    let reparsed = LetterBoard::parse(&board_text(&board)).unwrap();
    for k in 0..board.cells() {
        assert_eq!(reparsed.letter(k), board.letter(k));
    }
}

#[test]
fn dice_set_loads_from_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name": "mini", "rows": 2, "cols": 2, "dice": ["ab", "CD", "EF", "GH"]}}"#
    )
    .unwrap();
    let set = DiceSet::load_from_file(file.path()).unwrap();
    assert_eq!(set.name, "mini");
    assert_eq!(set.dice[0], "AB");
}

#[test]
fn dice_set_load_rejects_bad_input() {
    let mut garbage = tempfile::NamedTempFile::new().unwrap();
    write!(garbage, "not json").unwrap();
    assert!(matches!(
        DiceSet::load_from_file(garbage.path()).unwrap_err(),
        WordForgeError::Json(_)
    ));

    let mut short = tempfile::NamedTempFile::new().unwrap();
    write!(
        short,
        r#"{{"name": "short", "rows": 2, "cols": 2, "dice": ["AB"]}}"#
    )
    .unwrap();
    assert!(matches!(
        DiceSet::load_from_file(short.path()).unwrap_err(),
        WordForgeError::Validation(_)
    ));
}
