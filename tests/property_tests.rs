//! Property tests for shuffling, combat math and pile bookkeeping.

use proptest::prelude::*;

use card_battler::{apply_attack, BattleBuilder, BattleConfig, BattleError, Combatant, GameRng};

/// One player step in a generated battle.
#[derive(Clone, Debug)]
enum Step {
    Draw,
    Play(usize),
    EndTurn,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Draw),
        4 => (0usize..10).prop_map(Step::Play),
        1 => Just(Step::EndTurn),
    ]
}

proptest! {
    #[test]
    fn shuffle_is_permutation(seed in any::<u64>(), mut items in prop::collection::vec(0u32..20, 0..40)) {
        let mut shuffled = items.clone();
        GameRng::new(seed).shuffle(&mut shuffled);

        items.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(items, shuffled);
    }

    #[test]
    fn attack_absorbs_shield_first(health in 1i32..100, shield in 0i32..50, damage in 1i32..50) {
        let mut target = Combatant { health, shield };
        let outcome = apply_attack(&mut target, damage);

        prop_assert_eq!(outcome.absorbed + outcome.health_loss, damage);
        if shield >= damage {
            prop_assert_eq!(target, Combatant { health, shield: shield - damage });
        } else {
            prop_assert_eq!(target, Combatant { health: health - (damage - shield), shield: 0 });
        }
    }

    #[test]
    fn piles_are_conserved(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..60)) {
        let config = BattleConfig::default().with_seed(seed).with_starting_health(1000);
        let mut battle = BattleBuilder::new().config(config).build().unwrap();
        let capacity = battle.config().hand_capacity;

        for step in steps {
            let before = battle.state().piles.clone();
            let result = match step {
                Step::Draw => battle.draw_card().map(|_| ()),
                Step::Play(index) => match battle.hand().get(index).copied() {
                    Some(card) => battle.play_card(card).map(|_| ()),
                    None => Ok(()),
                },
                Step::EndTurn => {
                    let ended = battle.end_player_turn().map(|_| ());
                    battle.run_until_idle();
                    ended
                }
            };

            let piles = &battle.state().piles;
            // A full hand can still recycle the discard pile first
            if let Err(err) = &result {
                if !matches!(err, BattleError::HandFull { .. }) {
                    prop_assert_eq!(piles, &before);
                }
            }
            prop_assert_eq!(piles.total(), 10);
            prop_assert!(piles.hand().len() <= capacity);
            prop_assert!(battle.result().is_none());
        }
    }
}
