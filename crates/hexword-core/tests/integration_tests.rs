//! Integration tests for the Hexword game engine.
//!
//! These tests drive the engine through the same calls a front end makes.

use hexword_core::*;
use pretty_assertions::assert_eq;

fn cell(q: i32, r: i32) -> HexCoord {
    HexCoord::new(q, r)
}

fn game_with(config: GameConfig) -> GameState {
    GameState::with_seed(config, 2024)
}

#[test]
fn test_cat_then_cats() {
    let dict = WordList::from_words(["cat", "cats"]);
    let mut game = game_with(GameConfig::default());

    assert!(game.place_letter(cell(0, 0), 'C', Player::Human));
    assert!(game.place_letter(cell(1, 0), 'A', Player::Human));
    assert!(game.place_letter(cell(2, 0), 'T', Player::Human));

    let update = game.update_scores(&dict, Player::Human);
    assert_eq!(update.delta, 5);
    assert_eq!(update.scored.len(), 1);
    assert_eq!(update.scored[0].word, "cat");
    assert_eq!(update.scored[0].path, vec![cell(0, 0), cell(1, 0), cell(2, 0)]);
    assert_eq!(game.scores(), Scores { human: 5, ai: 0 });

    assert!(game.place_letter(cell(3, 0), 'S', Player::Ai));
    let update = game.update_scores(&dict, Player::Ai);
    assert_eq!(update.delta, 5);
    assert_eq!(update.scored.len(), 1);
    assert_eq!(update.scored[0].word, "cats");
    assert_eq!(update.scored[0].owner, Player::Ai);
    assert_eq!(game.scores(), Scores { human: 5, ai: 5 });

    let validated: Vec<&str> = game.validated_words().collect();
    assert_eq!(validated, vec!["cat", "cats"]);
}

#[test]
fn test_repeated_update_is_idempotent() {
    let dict = WordList::from_words(["hex", "hexes"]);
    let mut game = game_with(GameConfig::default());
    for (i, letter) in "HEXES".chars().enumerate() {
        game.place_letter(cell(-2, i as i32 - 2), letter, Player::Human);
    }

    let first = game.update_scores(&dict, Player::Human);
    assert_eq!(first.delta, 10);

    let second = game.update_scores(&dict, Player::Human);
    assert_eq!(second.delta, 0);
    assert!(second.scored.is_empty());
    assert!(game.last_scored().is_empty());
    assert_eq!(game.scores().human, 10);
}

#[test]
fn test_word_on_opponent_tile_is_consumed_without_points() {
    let dict = WordList::from_words(["dog"]);
    let mut game = game_with(GameConfig::default());
    game.place_letter(cell(0, 0), 'D', Player::Ai);
    game.place_letter(cell(0, 1), 'O', Player::Ai);
    game.place_letter(cell(0, 2), 'G', Player::Ai);

    let update = game.update_scores(&dict, Player::Human);
    assert_eq!(update.delta, 0);
    assert_eq!(update.spent, vec!["dog".to_string()]);
    assert_eq!(game.scores(), Scores::default());

    let update = game.update_scores(&dict, Player::Ai);
    assert_eq!(update.delta, 0);
    assert_eq!(game.scores(), Scores::default());
}

#[test]
fn test_bot_completes_word_and_scores() {
    let dict = WordList::from_words(["cat"]);
    let mut game = game_with(GameConfig::default());
    game.place_letter(cell(0, 0), 'C', Player::Human);
    game.place_letter(cell(1, 0), 'A', Player::Human);

    let mut bot = Bot::with_seed(8);
    let turn = game.ai_play(&mut bot, &dict).unwrap();

    assert_eq!(turn.kind, MoveKind::WordExtension);
    assert_eq!(turn.placement, Placement { coord: cell(2, 0), letter: 'T' });
    assert_eq!(turn.update.delta, 5);
    assert_eq!(game.scores(), Scores { human: 0, ai: 5 });
    assert_eq!(game.last_scored()[0].owner, Player::Ai);
}

#[test]
fn test_ai_play_on_full_board() {
    let dict = WordList::from_words(["cat"]);
    let mut game = game_with(GameConfig {
        board_radius: 1,
        ..GameConfig::default()
    });
    for coord in game.board.empty_cells() {
        game.place_letter(coord, 'O', Player::Human);
    }

    let mut bot = Bot::with_seed(8);
    assert_eq!(game.ai_play(&mut bot, &dict), Err(GameError::BoardFull));
}

#[test]
fn test_human_turn_scores_then_bot_replies() {
    let dict = WordList::from_words(["cat", "cab"]);
    let mut game = game_with(GameConfig::default());
    game.rack = Rack::with_letters(8, &['T', 'E']);
    game.place_letter(cell(0, 0), 'C', Player::Human);
    game.place_letter(cell(1, 0), 'A', Player::Human);

    let mut bot = Bot::with_seed(3);
    let turn = game.play_turn(cell(2, 0), 't', &mut bot, &dict).unwrap();

    assert_eq!(turn.human.delta, 5);
    assert!(turn.events.contains(&GameEvent::WordScored {
        player: Player::Human,
        word: "cat".into(),
        path: vec![cell(0, 0), cell(1, 0), cell(2, 0)],
        points: 5,
    }));
    assert_eq!(game.rack.len(), 8);
    assert_eq!(game.rack.letters()[0], 'E');

    let ai = turn.ai.expect("bot should reply");
    assert!(game.board.tile(ai.placement.coord).is_some());
    assert_eq!(turn.outcome, None);
    assert_eq!(game.scores().human, 5);
}

#[test]
fn test_reaching_threshold_ends_game_before_bot_moves() {
    let dict = WordList::from_words(["cat"]);
    let mut game = game_with(GameConfig {
        win_threshold: 5,
        ..GameConfig::default()
    });
    game.rack = Rack::with_letters(8, &['T']);
    game.place_letter(cell(0, 0), 'C', Player::Human);
    game.place_letter(cell(1, 0), 'A', Player::Human);

    let mut bot = Bot::with_seed(3);
    let turn = game.play_turn(cell(2, 0), 'T', &mut bot, &dict).unwrap();

    assert_eq!(turn.outcome, Some(Outcome::HumanWins));
    assert!(turn.ai.is_none());
    assert!(game.is_finished());
    assert!(matches!(turn.events.last(), Some(GameEvent::GameOver { .. })));
    assert_eq!(game.board.occupied_count(), 3);
}

#[test]
fn test_full_game_on_small_board() {
    let dict = WordList::from_words(["ace", "bee", "eat", "tea", "ate", "sea", "set"]);
    let mut game = game_with(GameConfig {
        board_radius: 2,
        ..GameConfig::default()
    });
    let mut bot = Bot::with_seed(77);

    let mut previous = game.scores();
    let mut turns = 0;
    while !game.is_finished() {
        let coord = game.board.empty_cells()[0];
        let letter = game.rack.letters()[0];
        let occupied = game.board.occupied_count();

        let turn = game.play_turn(coord, letter, &mut bot, &dict).unwrap();

        let expected = if turn.ai.is_some() { 2 } else { 1 };
        assert_eq!(game.board.occupied_count(), occupied + expected);
        let scores = game.scores();
        assert!(scores.human >= previous.human && scores.ai >= previous.ai);
        previous = scores;

        turns += 1;
        assert!(turns <= 19, "game should end once the board fills");
    }

    assert!(game.board.is_full());
    assert_eq!(game.outcome, Some(Outcome::by_points(game.scores())));
}

#[test]
fn test_tie_when_both_reach_threshold() {
    let dict = WordList::from_words(["cat", "dog"]);
    let mut game = game_with(GameConfig {
        win_threshold: 5,
        ..GameConfig::default()
    });

    game.place_letter(cell(0, 2), 'D', Player::Ai);
    game.place_letter(cell(1, 2), 'O', Player::Ai);
    game.place_letter(cell(2, 2), 'G', Player::Ai);
    game.update_scores(&dict, Player::Ai);
    assert_eq!(game.check_winner(), Some(Outcome::AiWins));

    game.place_letter(cell(0, 0), 'C', Player::Human);
    game.place_letter(cell(1, 0), 'A', Player::Human);
    game.place_letter(cell(2, 0), 'T', Player::Human);
    game.update_scores(&dict, Player::Human);

    assert_eq!(game.scores(), Scores { human: 5, ai: 5 });
    assert_eq!(game.check_winner(), Some(Outcome::Tie));
}

#[test]
fn test_snapshot_reflects_game() {
    let dict = WordList::from_words(["sun"]);
    let mut game = game_with(GameConfig::default());
    game.place_letter(cell(0, -1), 'S', Player::Human);
    game.place_letter(cell(0, 0), 'U', Player::Human);
    game.place_letter(cell(0, 1), 'N', Player::Human);
    game.update_scores(&dict, Player::Human);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.radius, 5);
    assert_eq!(snapshot.tiles.len(), 3);
    assert_eq!(snapshot.scores.human, 5);
    assert_eq!(snapshot.validated_words, vec!["sun".to_string()]);
    assert_eq!(snapshot.last_scored.len(), 1);

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"sun\""));
}
