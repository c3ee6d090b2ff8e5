//! Battle flow tests.
//!
//! These tests drive whole battles through the public API:
//! - The starter pool scenario from opening hand to handback
//! - Shield absorption against the opponent
//! - Deck recycling and pile limits
//! - Timers, stale callbacks and terminal guards
//! - Hand visual bindings and intent masking
//! - Replays from a seed

use card_battler::{
    Battle, BattleBuilder, BattleConfig, BattleError, BattleEvent, CardDefinition, CardId,
    CardKind, CardPool, CoinFlipOpponent, Command, GameResult, GameRng, Intent, OpponentScript,
    Phase, PresenterCall, RecordingPresenter, Side,
};

/// Opponent that plays a fixed list of (intent, amount) turns, repeating the last.
struct ScriptedOpponent {
    turns: Vec<(Intent, i32)>,
    chosen: usize,
}

impl ScriptedOpponent {
    fn new(turns: Vec<(Intent, i32)>) -> Self {
        Self { turns, chosen: 0 }
    }

    fn current(&self) -> (Intent, i32) {
        let index = self.chosen.saturating_sub(1).min(self.turns.len() - 1);
        self.turns[index]
    }
}

impl OpponentScript for ScriptedOpponent {
    fn choose_intent(&mut self, _rng: &mut GameRng) -> Intent {
        self.chosen += 1;
        self.current().0
    }

    fn roll(&mut self, _intent: Intent, _config: &BattleConfig, _rng: &mut GameRng) -> i32 {
        self.current().1
    }
}

fn uniform_pool(kind: CardKind, value: i32, copies: usize) -> CardPool {
    let mut pool = CardPool::new();
    pool.add(CardDefinition::new(CardId::new(1), "Card", kind, value), copies)
        .unwrap();
    pool
}

fn first_of_kind<P, O>(battle: &Battle<P, O>, kind: CardKind) -> Option<CardId> {
    battle
        .hand()
        .iter()
        .copied()
        .find(|id| battle.registry().get(*id).map(|c| c.kind) == Some(kind))
}

/// Test the starter pool from opening hand through one full turn cycle.
#[test]
fn test_starter_pool_turn_cycle() {
    // Find a seed whose opening hand has both kinds
    let mut battle = (0..100)
        .map(|seed| {
            BattleBuilder::new()
                .seed(seed)
                .presenter(RecordingPresenter::new())
                .build()
                .unwrap()
        })
        .find(|b| {
            first_of_kind(b, CardKind::Attack).is_some()
                && first_of_kind(b, CardKind::Shield).is_some()
        })
        .expect("some seed deals both kinds");

    assert_eq!(battle.hand().len(), 5);
    assert_eq!(battle.state().piles.deck().len(), 5);

    // Attack 3 against an unshielded opponent
    let strike = first_of_kind(&battle, CardKind::Attack).unwrap();
    battle.play_card(strike).unwrap();
    assert_eq!(battle.state().combatant(Side::Opponent).health, 27);
    assert_eq!(battle.hand().len(), 4);
    assert_eq!(battle.state().piles.discard().len(), 1);

    // Shield 4 goes to the player
    let guard = first_of_kind(&battle, CardKind::Shield).unwrap();
    battle.play_card(guard).unwrap();
    assert_eq!(battle.state().combatant(Side::Player).shield, 4);
    assert_eq!(battle.hand().len(), 3);

    let intent = battle.state().intent;
    battle.end_player_turn().unwrap();
    assert_eq!(battle.advance(1), 1);

    let amount = battle
        .events()
        .events()
        .find_map(|e| match e {
            BattleEvent::OpponentActed { amount, .. } => Some(*amount),
            _ => None,
        })
        .unwrap();
    assert!((3..=6).contains(&amount));

    let player = *battle.state().combatant(Side::Player);
    let opponent = *battle.state().combatant(Side::Opponent);
    match intent {
        Intent::Attack => {
            assert_eq!(player.shield, (4 - amount).max(0));
            assert_eq!(player.health, 30 - (amount - 4).max(0));
        }
        Intent::Shield => {
            assert_eq!(opponent.shield, amount);
            assert_eq!(player.shield, 4);
        }
    }

    assert_eq!(battle.advance(1), 1);
    assert_eq!(battle.phase(), Phase::PlayerTurn);
    assert_eq!(battle.state().turn_number, 2);
    assert_eq!(battle.hand().len(), 4);
    assert_eq!(battle.state().piles.total(), 10);
}

/// Test that an attack strips the opponent's shield before its health.
#[test]
fn test_attack_through_opponent_shield() {
    let mut battle = Battle::new(
        BattleConfig::default(),
        uniform_pool(CardKind::Attack, 5, 10),
        RecordingPresenter::new(),
        ScriptedOpponent::new(vec![(Intent::Shield, 2), (Intent::Attack, 3)]),
    )
    .unwrap();

    battle.end_player_turn().unwrap();
    battle.run_until_idle();
    assert_eq!(battle.state().combatant(Side::Opponent).shield, 2);

    battle.play_card(CardId::new(1)).unwrap();

    let opponent = battle.state().combatant(Side::Opponent);
    assert_eq!(opponent.shield, 0);
    assert_eq!(opponent.health, 27);
}

/// Test that an empty deck refills from the discard pile before drawing.
#[test]
fn test_deck_recycles_discard() {
    let config = BattleConfig::default().with_hand_capacity(10);
    let mut battle = Battle::new(
        config,
        uniform_pool(CardKind::Attack, 1, 10),
        RecordingPresenter::new(),
        CoinFlipOpponent,
    )
    .unwrap();

    for _ in 0..5 {
        battle.draw_card().unwrap();
    }
    assert!(battle.state().piles.deck().is_empty());

    for _ in 0..3 {
        battle.play_card(CardId::new(1)).unwrap();
    }
    assert_eq!(battle.state().piles.discard().len(), 3);

    battle.draw_card().unwrap();

    let piles = &battle.state().piles;
    assert_eq!(piles.deck().len(), 2);
    assert_eq!(piles.hand().len(), 8);
    assert!(piles.discard().is_empty());
    assert!(battle
        .events()
        .events()
        .any(|e| *e == BattleEvent::DeckRecycled { cards: 3 }));
}

/// Test the draw limits: a full hand and a fully exhausted pool.
#[test]
fn test_draw_limits() {
    let mut battle = BattleBuilder::new().seed(3).build().unwrap();
    battle.draw_card().unwrap();
    battle.draw_card().unwrap();

    let before = battle.state().piles.clone();
    assert!(matches!(
        battle.draw_card(),
        Err(BattleError::HandFull { capacity: 7 })
    ));
    assert_eq!(battle.state().piles, before);

    let mut small = BattleBuilder::new()
        .pool(uniform_pool(CardKind::Shield, 2, 5))
        .build()
        .unwrap();
    assert!(matches!(small.draw_card(), Err(BattleError::DeckEmpty)));
    assert_eq!(small.hand().len(), 5);
    assert_eq!(small.history().len(), 0);
}

/// Test that a full-hand rejection still keeps the discard refill that preceded it.
#[test]
fn test_hand_full_after_refill() {
    let mut battle = Battle::new(
        BattleConfig::default(),
        uniform_pool(CardKind::Attack, 1, 10),
        RecordingPresenter::new(),
        CoinFlipOpponent,
    )
    .unwrap();
    battle.draw_card().unwrap();
    battle.draw_card().unwrap();
    for _ in 0..3 {
        battle.play_card(CardId::new(1)).unwrap();
    }
    for _ in 0..3 {
        battle.draw_card().unwrap();
    }
    assert!(battle.state().piles.deck().is_empty());
    assert_eq!(battle.state().piles.discard().len(), 3);

    assert!(matches!(battle.draw_card(), Err(BattleError::HandFull { .. })));

    let piles = &battle.state().piles;
    assert_eq!(piles.deck().len(), 3);
    assert!(piles.discard().is_empty());
    assert_eq!(piles.hand().len(), 7);
}

/// Test that timers wait for the clock and that stale ones are dropped.
#[test]
fn test_timers_follow_clock() {
    let config = BattleConfig::default().with_delays(3, 2);
    let mut battle = Battle::new(
        config,
        CardPool::starter(),
        RecordingPresenter::new(),
        ScriptedOpponent::new(vec![(Intent::Shield, 5)]),
    )
    .unwrap();

    battle.end_player_turn().unwrap();
    assert_eq!(battle.advance(2), 0);
    assert_eq!(battle.phase(), Phase::OpponentTurnPending);

    assert_eq!(battle.advance(1), 1);
    assert_eq!(battle.phase(), Phase::OpponentTurnResolving);
    assert!(matches!(battle.draw_card(), Err(BattleError::NotPlayerTurn)));
    let handback = battle.turn_timer().unwrap();
    assert!(battle.is_timer_pending(handback));

    // Reset while the handback is pending
    battle.reset();
    assert!(!battle.is_timer_pending(handback));
    assert_eq!(battle.turn_timer(), None);
    assert_eq!(battle.advance(10), 0);
    assert_eq!(battle.phase(), Phase::PlayerTurn);
    assert_eq!(battle.state().turn_number, 1);
    assert_eq!(battle.state().combatant(Side::Opponent).shield, 0);
    assert!(battle
        .events()
        .events()
        .any(|e| *e == BattleEvent::BattleReset));
}

/// Test that nothing is accepted after the player dies.
#[test]
fn test_defeat_blocks_requests() {
    let config = BattleConfig::default().with_starting_health(4);
    let mut battle = Battle::new(
        config,
        CardPool::starter(),
        RecordingPresenter::new(),
        ScriptedOpponent::new(vec![(Intent::Attack, 6)]),
    )
    .unwrap();

    battle.end_player_turn().unwrap();
    battle.run_until_idle();

    assert_eq!(battle.result(), Some(GameResult::Defeat));
    assert_eq!(battle.state().combatant(Side::Player).health, -2);
    assert_eq!(battle.turn_timer(), None);
    let status = battle.presenter().last_status().unwrap();
    assert!(!status.actions_enabled);
    assert_eq!(status.player_text(), "Player Health: -2 (Shield: 0)");

    let card = battle.hand()[0];
    let (visual, _) = battle.hand_visuals().next().unwrap();
    assert!(matches!(battle.draw_card(), Err(BattleError::GameOver(GameResult::Defeat))));
    assert!(matches!(battle.play_card(card), Err(BattleError::GameOver(_))));
    assert!(matches!(battle.click_card(visual), Err(BattleError::GameOver(_))));
    assert!(matches!(battle.end_player_turn(), Err(BattleError::GameOver(_))));
    assert_eq!(battle.run_until_idle(), 0);
}

/// Test that clicks route through bindings that are rebuilt on every play.
#[test]
fn test_click_bindings_rebuilt() {
    let mut battle = Battle::new(
        BattleConfig::default(),
        uniform_pool(CardKind::Attack, 2, 10),
        RecordingPresenter::new(),
        CoinFlipOpponent,
    )
    .unwrap();

    let first: Vec<_> = battle.hand_visuals().collect();
    assert_eq!(first.len(), 5);
    assert_eq!(battle.presenter().live_visuals(), first.as_slice());

    battle.click_card(first[2].0).unwrap();
    assert_eq!(battle.state().combatant(Side::Opponent).health, 28);

    let second: Vec<_> = battle.hand_visuals().collect();
    assert_eq!(second.len(), 4);
    assert_eq!(battle.presenter().live_visuals(), second.as_slice());
    assert!(battle
        .presenter()
        .calls()
        .iter()
        .any(|call| matches!(call, PresenterCall::Destroy(v) if v.len() == 5)));

    for (visual, _) in &first {
        assert!(matches!(
            battle.click_card(*visual),
            Err(BattleError::UnknownVisual(_))
        ));
    }
    battle.click_card(second[0].0).unwrap();
    assert_eq!(battle.state().combatant(Side::Opponent).health, 26);
}

/// Test that the intent is hidden on the player's turn and shown on the opponent's.
#[test]
fn test_intent_masking() {
    let mut battle = Battle::new(
        BattleConfig::default(),
        CardPool::starter(),
        RecordingPresenter::new(),
        ScriptedOpponent::new(vec![(Intent::Attack, 3)]),
    )
    .unwrap();

    let status = battle.status_view();
    assert_eq!(status.intent, None);
    assert_eq!(status.intent_text(), "Opponent Intent: ?");
    assert_eq!(status.turn_text(), "Player's Turn");

    battle.end_player_turn().unwrap();
    let status = battle.presenter().last_status().unwrap();
    assert_eq!(status.intent_text(), "Opponent Intent: Attack");
    assert_eq!(status.turn_text(), "Opponent's Turn");
    assert!(!status.actions_enabled);
}

/// Play a fixed strategy for a few turns.
fn play_out(battle: &mut Battle) {
    for _ in 0..6 {
        if battle.result().is_some() {
            break;
        }
        if let Some(&card) = battle.hand().first() {
            battle.play_card(card).unwrap();
        }
        if battle.result().is_none() {
            battle.end_player_turn().unwrap();
            battle.run_until_idle();
        }
    }
}

/// Test that the same seed and commands replay the same battle.
#[test]
fn test_replay_from_seed() {
    let mut original = BattleBuilder::new().seed(99).build().unwrap();
    play_out(&mut original);

    let mut replay = BattleBuilder::new().seed(99).build().unwrap();
    for record in original.history() {
        replay.apply(record.command).unwrap();
        if record.command == Command::EndTurn {
            replay.run_until_idle();
        }
    }

    assert_eq!(replay.history(), original.history());
    assert_eq!(replay.events().records(), original.events().records());
    assert_eq!(replay.rng_state(), original.rng_state());
    assert_eq!(
        serde_json::to_string(replay.state()).unwrap(),
        serde_json::to_string(original.state()).unwrap()
    );
}

/// Test that a reset battle keeps no commands from the battle before it.
#[test]
fn test_reset_starts_fresh_history() {
    let mut battle = BattleBuilder::new().seed(11).build().unwrap();
    battle.end_player_turn().unwrap();
    battle.run_until_idle();
    assert_eq!(battle.history().len(), 1);

    let before_reset = battle.rng_state();
    battle.reset();
    assert!(battle.history().is_empty());
    play_out(&mut battle);

    // The post-reset history alone replays the new battle
    let mut replay = BattleBuilder::new()
        .rng(GameRng::from_state(&before_reset))
        .build()
        .unwrap();
    for record in battle.history() {
        replay.apply(record.command).unwrap();
        if record.command == Command::EndTurn {
            replay.run_until_idle();
        }
    }

    let commands = |b: &Battle| b.history().iter().map(|r| r.command).collect::<Vec<_>>();
    assert_eq!(commands(&replay), commands(&battle));
    assert_eq!(
        serde_json::to_string(replay.state()).unwrap(),
        serde_json::to_string(battle.state()).unwrap()
    );
}

/// Test that shield cards at the top of the value range saturate instead of wrapping.
#[test]
fn test_max_value_shield_cards() {
    let mut battle = Battle::new(
        BattleConfig::default(),
        uniform_pool(CardKind::Shield, i32::MAX, 10),
        RecordingPresenter::new(),
        ScriptedOpponent::new(vec![(Intent::Attack, 6)]),
    )
    .unwrap();

    battle.play_card(CardId::new(1)).unwrap();
    battle.play_card(CardId::new(1)).unwrap();
    assert_eq!(battle.state().combatant(Side::Player).shield, i32::MAX);

    battle.end_player_turn().unwrap();
    battle.run_until_idle();

    let player = battle.state().combatant(Side::Player);
    assert_eq!(player.shield, i32::MAX - 6);
    assert_eq!(player.health, 30);
    assert_eq!(battle.status_view().player_text(), format!("Player Health: 30 (Shield: {})", i32::MAX - 6));
}

/// Test a battle built from JSON config and pool files.
#[test]
fn test_json_setup() {
    let config = BattleConfig::from_json(r#"{ "starting_health": 12, "seed": 5 }"#).unwrap();
    let pool = CardPool::from_json(
        r#"[
            { "id": 7, "name": "Jab", "kind": "Attack", "value": 4, "copies": 6 },
            { "id": 8, "name": "Brace", "kind": "Shield", "value": 1, "art": "brace.png", "copies": 4 }
        ]"#,
    )
    .unwrap();

    let battle = BattleBuilder::new().config(config).pool(pool).build().unwrap();

    assert_eq!(battle.state().combatant(Side::Player).health, 12);
    assert_eq!(battle.state().piles.total(), 10);
    assert_eq!(battle.registry().len(), 2);
    assert_eq!(battle.config().hand_capacity, 7);
}
