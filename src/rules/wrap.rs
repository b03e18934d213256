//! Scene wrap: bonus payout and release of everyone on the set.
//!
//! When the last shot counter at a set is removed the scene wraps. If at
//! least one starring role is occupied, the wrapping player rolls one die per
//! point of budget. The dice are sorted highest first and dealt round-robin to
//! the starring occupants, ordered by role level, highest first. Extras get
//! nothing from the wrap. Then every role at the set is vacated.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::engine::Session;
use super::event::GameEvent;
use crate::board::LocationId;
use crate::cards::RoleId;
use crate::core::{Currency, Dice, PlayerId};

/// Dollars paid to one player at a wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub player: PlayerId,
    pub dollars: u32,
}

/// Deal `dice` to `occupants` round-robin, highest die first.
///
/// `occupants` must already be ordered by role level, highest first. Returns
/// one entry per occupant in that order; a player may get more than one die.
///
/// ```
/// use rust_deadwood::core::PlayerId;
/// use rust_deadwood::rules::distribute_payout;
///
/// let (a, b) = (PlayerId::new(0), PlayerId::new(1));
/// let payouts = distribute_payout(&[a, b], &[2, 6, 4]);
/// assert_eq!(payouts[0].dollars, 6 + 2);
/// assert_eq!(payouts[1].dollars, 4);
/// ```
#[must_use]
pub fn distribute_payout(occupants: &[PlayerId], dice: &[u8]) -> Vec<Payout> {
    if occupants.is_empty() {
        return Vec::new();
    }

    let mut sorted = dice.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut payouts: Vec<Payout> = occupants
        .iter()
        .map(|&player| Payout { player, dollars: 0 })
        .collect();
    for (i, die) in sorted.into_iter().enumerate() {
        payouts[i % occupants.len()].dollars += u32::from(die);
    }
    payouts
}

impl<D: Dice> Session<D> {
    /// Wrap the scene at `location` and end the day if at most one scene is
    /// still shooting.
    pub(super) fn wrap_scene(&mut self, location: LocationId, events: &mut Vec<GameEvent>) {
        let Some(set) = self.board.set(location) else {
            return;
        };
        let Some(card_id) = set.card() else {
            return;
        };
        let card = self.cards.get(card_id);
        let title = card.title.clone();
        let budget = card.budget;

        let mut starring: Vec<(u8, PlayerId)> = card
            .roles
            .iter()
            .filter_map(|&r| {
                let role = self.roles.get(r);
                role.occupant.map(|p| (role.level, p))
            })
            .collect();
        // Stable: equal levels keep printed order.
        starring.sort_by(|a, b| b.0.cmp(&a.0));
        let occupants: Vec<PlayerId> = starring.into_iter().map(|(_, p)| p).collect();

        let at_set: Vec<RoleId> = set
            .extras()
            .iter()
            .chain(card.roles.iter())
            .copied()
            .collect();

        let mut dice: Vec<u8> = if occupants.is_empty() {
            Vec::new()
        } else {
            (0..budget).map(|_| self.dice.roll_die()).collect()
        };
        let payouts = distribute_payout(&occupants, &dice);
        for payout in &payouts {
            self.players[payout.player].earn(Currency::Dollar, payout.dollars);
        }
        dice.sort_unstable_by(|a, b| b.cmp(a));

        let mut released = Vec::new();
        for role in at_set {
            if let Some(player) = self.roles.vacate(role) {
                self.players[player].set_role(None);
                released.push(player);
            }
        }

        let location_name = self.board.name(location).to_string();
        info!(
            location = %location_name,
            card = %title,
            paid = payouts.len(),
            released = released.len(),
            "scene wrapped"
        );
        events.push(GameEvent::SceneWrapped {
            location: location_name,
            card: title,
            dice,
            payouts,
            released,
        });

        if self.board.active_set_count() <= 1 {
            self.end_day(events);
        }
    }
}
