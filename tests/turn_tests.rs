//! Whole-turn behaviour through the scheduler.
//!
//! Dice are scripted so each test controls exactly where the active
//! player lands. Turn 1 is always played by seat 1.

use board_sim::cards::{CardDeck, CardId};
use board_sim::rules::JailOutcome;
use board_sim::{
    run_game, AlwaysBuy, CardDeckDealer, CellCategory, CellOutcome, Game, GameConfig, GameState,
    Movement, NeverBuy, PlayerId, PropertyOutcome, ScriptedDice, StandardBoard,
};

const JAIL: usize = 40;

fn game_with(throws: Vec<[u8; 2]>) -> Game<StandardBoard, ScriptedDice, AlwaysBuy> {
    Game::with_dice(
        GameConfig::default(),
        StandardBoard::new(),
        ScriptedDice::new(throws),
        vec![AlwaysBuy::default(), AlwaysBuy::default()],
    )
    .unwrap()
}

fn opening_state() -> GameState {
    GameState::new(&GameConfig::default(), 40).unwrap()
}

#[test]
fn test_three_doubles_send_player_to_jail() {
    let mut game = game_with(vec![[2, 2], [3, 3], [4, 4]]);
    let record = game.play_turn().unwrap();

    assert_eq!(record.player, PlayerId::new(1));
    assert_eq!(record.rolls.len(), 3);
    assert_eq!(record.movement, Movement::Jailed);
    assert_eq!(record.end_position, JAIL);
    assert!(record.in_jail);
    assert_eq!(record.outcome, CellOutcome::Nothing);
    assert_eq!(game.state().cash(PlayerId::new(1)), 1500);
}

#[test]
fn test_doubles_then_plain_throw_moves_cumulatively() {
    // 4 + 6 + 3 from Go is States Avenue.
    let mut game = game_with(vec![[2, 2], [3, 3], [1, 2]]);
    let record = game.play_turn().unwrap();

    assert_eq!(record.rolls.len(), 3);
    assert_eq!(record.movement, Movement::Advanced { from: 0, to: 13 });
    assert_eq!(record.outcome, CellOutcome::Property(PropertyOutcome::Purchased { price: 140 }));
    assert_eq!(game.state().cash(PlayerId::new(1)), 1360);
}

#[test]
fn test_jailed_player_throws_once_and_stays() {
    let mut state = opening_state();
    state.send_to_jail(PlayerId::new(1)).unwrap();

    let mut game = game_with(vec![[1, 2]]).with_state(state).unwrap();
    let record = game.play_turn().unwrap();

    assert!(record.started_in_jail);
    assert_eq!(record.rolls.len(), 1);
    assert_eq!(record.movement, Movement::Jailed);
    assert_eq!(game.state().position(PlayerId::new(1)), JAIL);
}

#[test]
fn test_double_paroles_from_start_cell() {
    let mut state = opening_state();
    state.send_to_jail(PlayerId::new(1)).unwrap();

    // Parole moves from Go, so 3 + 3 lands on Oriental Avenue.
    let mut game = game_with(vec![[3, 3]]).with_state(state).unwrap();
    let record = game.play_turn().unwrap();

    assert_eq!(record.rolls.len(), 1);
    assert_eq!(record.movement, Movement::Paroled { to: 6 });
    assert!(!record.in_jail);
    assert_eq!(game.state().owner(6), Some(PlayerId::new(1)));
}

#[test]
fn test_rent_between_players() {
    let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
    let mut state = opening_state();
    state.set_owner(39, p0).unwrap();
    state.move_player(p1, 35).unwrap();
    let bank = state.bank_money;

    let mut game = game_with(vec![[1, 3]]).with_state(state).unwrap();
    let record = game.play_turn().unwrap();

    assert_eq!(record.outcome, CellOutcome::Property(PropertyOutcome::RentPaid { owner: p0, amount: 50 }));
    assert_eq!(game.state().cash(p1), 1450);
    assert_eq!(game.state().cash(p0), 1550);
    assert_eq!(game.state().bank_money, bank);
}

#[test]
fn test_go_to_jail_cell() {
    let mut state = opening_state();
    state.move_player(PlayerId::new(1), 26).unwrap();

    let mut game = game_with(vec![[1, 3]]).with_state(state).unwrap();
    let record = game.play_turn().unwrap();

    assert_eq!(record.category, CellCategory::Jail);
    assert_eq!(record.outcome, CellOutcome::Jail(JailOutcome::SentToJail));
    assert_eq!(record.end_position, JAIL);
    assert!(record.in_jail);
}

#[test]
fn test_move_back_card_does_not_dispatch_destination() {
    let config = GameConfig::default();
    let mut state = opening_state();
    state.move_player(PlayerId::new(1), 3).unwrap();
    let bank = state.bank_money;

    // Card 8 is "Go back 3 spaces"; 7 - 3 is Income Tax, which is not charged.
    let dealer = CardDeckDealer::with_decks(
        CardDeck::from_order(vec![CardId::new(8)]),
        CardDeck::from_order(vec![CardId::new(0)]),
        &config,
    );
    let mut game = game_with(vec![[1, 3]]).with_dealer(dealer).with_state(state).unwrap();
    let record = game.play_turn().unwrap();

    assert_eq!(record.category, CellCategory::Chance);
    assert_eq!(record.end_position, 4);
    assert_eq!(game.state().cash(PlayerId::new(1)), 1500);
    assert_eq!(game.state().bank_money, bank);
}

#[test]
fn test_fifty_moves_are_deterministic() {
    let config = GameConfig::default().with_max_moves(50);

    let first = run_game(config.clone(), vec![AlwaysBuy::default(), AlwaysBuy::default()]).unwrap();
    let second = run_game(config, vec![AlwaysBuy::default(), AlwaysBuy::default()]).unwrap();

    assert_eq!(first.turns.len(), 50);
    assert_eq!(first.final_state, second.final_state);
    assert_eq!(first.turns, second.turns);
}

#[test]
fn test_different_seeds_diverge() {
    let base = GameConfig::default().with_max_moves(50);
    let a = run_game(base.clone().seeded_from(1), vec![NeverBuy, NeverBuy]).unwrap();
    let b = run_game(base.seeded_from(2), vec![NeverBuy, NeverBuy]).unwrap();

    let rolls = |r: &board_sim::GameReport| r.turns.iter().map(|t| t.rolls.clone()).collect::<Vec<_>>();
    assert_ne!(rolls(&a), rolls(&b));
}

#[test]
fn test_money_is_conserved_over_a_long_run() {
    let config = GameConfig::default().with_players(4).with_max_moves(400);
    let opening = GameState::new(&config, 40).unwrap().total_money();

    let report = run_game(config, vec![AlwaysBuy::default(); 4]).unwrap();

    assert_eq!(report.final_state.total_money(), opening);
    assert!(report.final_state.property_status().iter().any(Option::is_some));
}

#[test]
fn test_players_only_move_on_their_turn() {
    let mut game = game_with(vec![[1, 2]]);
    game.play_turn().unwrap();

    assert_eq!(game.state().position(PlayerId::new(0)), 0);
    assert_eq!(game.state().position(PlayerId::new(1)), 3);
}
