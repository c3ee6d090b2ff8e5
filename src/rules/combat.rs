//! Damage and shield arithmetic.
//!
//! Incoming damage drains shield first. If the shield cannot absorb all of
//! it, the overflow comes off health and the shield is clamped to zero. A
//! target with no shield takes the full amount to health.

use serde::{Deserialize, Serialize};

use crate::core::state::Combatant;

/// How a single hit was split between shield and health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Damage soaked by the shield.
    pub absorbed: i32,
    /// Damage that reached health.
    pub health_loss: i32,
}

/// Apply `damage` to `target`, shield first.
///
/// ```
/// use card_battler::core::Combatant;
/// use card_battler::rules::apply_attack;
///
/// let mut target = Combatant { health: 30, shield: 2 };
/// let outcome = apply_attack(&mut target, 5);
///
/// assert_eq!(target, Combatant { health: 27, shield: 0 });
/// assert_eq!((outcome.absorbed, outcome.health_loss), (2, 3));
/// ```
pub fn apply_attack(target: &mut Combatant, damage: i32) -> AttackOutcome {
    if target.shield > 0 {
        if target.shield >= damage {
            target.shield = target.shield.saturating_sub(damage);
            AttackOutcome {
                absorbed: damage,
                health_loss: 0,
            }
        } else {
            let absorbed = target.shield;
            let overflow = damage.saturating_sub(absorbed);
            target.health = target.health.saturating_sub(overflow);
            target.shield = 0;
            AttackOutcome {
                absorbed,
                health_loss: overflow,
            }
        }
    } else {
        target.health = target.health.saturating_sub(damage);
        AttackOutcome {
            absorbed: 0,
            health_loss: damage,
        }
    }
}

/// Add `amount` to `target`'s shield. There is no cap below `i32::MAX`.
pub fn gain_shield(target: &mut Combatant, amount: i32) {
    target.shield = target.shield.saturating_add(amount);
}
