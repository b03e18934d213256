//! Day and game transitions.

use tracing::info;

use super::engine::{Phase, Session};
use super::event::GameEvent;
use crate::core::{Dice, PlayerId};

impl<D: Dice> Session<D> {
    /// Begin the current day.
    ///
    /// Every set is cleared, the deck is shuffled and dealt in board order,
    /// everyone is released and sent to the rest location, and the first
    /// player in turn order becomes active.
    pub(super) fn start_day(&mut self, events: &mut Vec<GameEvent>) {
        self.board.reset_all_sets();
        for id in PlayerId::all(self.players.player_count()) {
            self.release(id);
        }

        self.dice.shuffle_deck(&mut self.deck);
        let scenes = self.board.deal(&self.deck);

        let rest = self.board.rest();
        for (_, player) in self.players.iter_mut() {
            player.location = rest;
            player.clear_rehearsal();
            player.turn.reset();
        }
        self.active = PlayerId::new(0);

        info!(day = self.day, scenes, "day started");
        events.push(GameEvent::DayStarted {
            day: self.day,
            scenes,
        });
    }

    /// Close the current day. Anyone still on a role leaves it unpaid.
    ///
    /// Ends the game after the last day, otherwise starts the next one.
    pub(super) fn end_day(&mut self, events: &mut Vec<GameEvent>) {
        let released: Vec<PlayerId> = PlayerId::all(self.players.player_count())
            .filter(|&id| self.release(id).is_some())
            .collect();

        info!(
            day = self.day,
            unfinished = self.board.active_set_count(),
            released = released.len(),
            "day ended"
        );
        events.push(GameEvent::DayEnded {
            day: self.day,
            released,
        });

        if self.day >= self.config.total_days() {
            self.end_game(events);
        } else {
            self.day += 1;
            self.start_day(events);
        }
    }

    /// Fix the final scores. Further commands are rejected.
    pub(super) fn end_game(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = Phase::GameOver;

        let scores = self.score_table();
        let winner = self.leader();
        if let Some(winner) = winner {
            info!(%winner, score = self.players[winner].score(), day = self.day, "game over");
        }
        events.push(GameEvent::GameEnded { winner, scores });
    }
}
