//! The session: owns every piece of game state and applies commands.
//!
//! ## Turn model
//!
//! Exactly one player is active. Commands act on the active player only, and
//! either succeed with a list of events or fail with a `Rejection` that leaves
//! the session untouched. `end_turn` passes control round-robin in turn order.
//!
//! ## Dice
//!
//! All randomness goes through the `Dice` held by the session. Production
//! sessions use `GameRng`; tests inject scripted dice through `with_dice`.

use im::Vector;
use tracing::{debug, info};

use super::event::{GameEvent, Reward};
use crate::board::{Board, LocationId};
use crate::cards::{CardId, CardRegistry, RoleId, RoleTable};
use crate::core::{
    Command, CommandRecord, ConfigError, Currency, Dice, GameRng, GameRngState, Player, PlayerId,
    PlayerMap, Rejection, SessionConfig, MAX_RANK, MIN_RANK,
};
use crate::data::{build_board, build_deck, BoardData, CardData};

/// Outcome of a command.
pub type CommandResult = Result<Vec<GameEvent>, Rejection>;

/// Whether the session still accepts play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// A day is in progress.
    DayActive,
    /// Final scores are fixed.
    GameOver,
}

/// A running game.
#[derive(Clone, Debug)]
pub struct Session<D = GameRng> {
    pub(super) config: SessionConfig,
    pub(super) board: Board,
    pub(super) roles: RoleTable,
    pub(super) cards: CardRegistry,

    /// Every card in the game. Shuffled in place at the start of each day.
    pub(super) deck: Vec<CardId>,

    pub(super) players: PlayerMap<Player>,
    pub(super) active: PlayerId,

    /// Current day, starting at 1.
    pub(super) day: u32,

    /// Session-wide turn counter, starting at 1.
    pub(super) turn: u32,

    pub(super) phase: Phase,

    /// Every command issued, accepted or not.
    pub(super) history: Vector<CommandRecord>,

    pub(super) dice: D,
}

impl Session<GameRng> {
    /// Create a session whose dice are seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Any `ConfigError` from the player count, the board or the deck.
    pub fn setup(
        config: SessionConfig,
        board: &BoardData,
        cards: &[CardData],
    ) -> Result<Self, ConfigError> {
        let dice = GameRng::new(config.seed);
        Self::with_dice(config, board, cards, dice)
    }

    /// Capture the dice state, e.g. to replay the rest of a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.dice.state()
    }
}

impl<D: Dice> Session<D> {
    /// Create a session with an explicit dice source, then start day 1.
    ///
    /// # Errors
    ///
    /// Any `ConfigError` from the player count, the board or the deck.
    pub fn with_dice(
        config: SessionConfig,
        board: &BoardData,
        cards: &[CardData],
        dice: D,
    ) -> Result<Self, ConfigError> {
        let config = config.revalidated()?;

        let mut roles = RoleTable::new();
        let board = build_board(board, &mut roles)?;
        let cards = build_deck(cards, &mut roles)?;

        let rest = board.rest();
        let names: Vec<&str> = config.player_names().collect();
        let players = PlayerMap::new(config.player_count, |p| {
            Player::new(names[p.index()], config.starting_dollars(), rest)
        });
        let deck = cards.ids().collect();

        info!(
            players = config.player_count,
            days = config.total_days(),
            locations = board.len(),
            cards = cards.len(),
            "session created"
        );

        let mut session = Self {
            config,
            board,
            roles,
            cards,
            deck,
            players,
            active: PlayerId::new(0),
            day: 1,
            turn: 1,
            phase: Phase::DayActive,
            history: Vector::new(),
            dice,
        };
        let mut events = Vec::new();
        session.start_day(&mut events);
        Ok(session)
    }

    /// Apply a command for the active player and record it in the history.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` when the command breaks a rule. Nothing
    /// changes except the history.
    pub fn apply(&mut self, command: Command) -> CommandResult {
        let player = self.active;
        let (day, turn) = (self.day, self.turn);

        let result = if self.phase == Phase::GameOver {
            Err(Rejection::GameOver)
        } else {
            match &command {
                Command::Move { target } => self.do_move(target),
                Command::Work { role } => self.do_work(role),
                Command::Act => self.do_act(),
                Command::Rehearse => self.do_rehearse(),
                Command::Upgrade { level, currency } => self.do_upgrade(*level, *currency),
                Command::End => self.do_end(),
                Command::Quit => self.do_quit(),
            }
        };

        match &result {
            Ok(events) => debug!(%player, %command, events = events.len(), "command applied"),
            Err(reason) => debug!(%player, %command, %reason, "command rejected"),
        }

        self.history.push_back(CommandRecord {
            player,
            command,
            day,
            turn,
            accepted: result.is_ok(),
        });
        result
    }

    /// Move to an adjacent location, by name.
    pub fn move_to(&mut self, target: &str) -> CommandResult {
        self.apply(Command::Move {
            target: target.to_string(),
        })
    }

    /// Take a role at the current set, by name.
    pub fn work(&mut self, role: &str) -> CommandResult {
        self.apply(Command::Work {
            role: role.to_string(),
        })
    }

    pub fn act(&mut self) -> CommandResult {
        self.apply(Command::Act)
    }

    pub fn rehearse(&mut self) -> CommandResult {
        self.apply(Command::Rehearse)
    }

    /// Buy rank `level` at the casting office.
    pub fn upgrade(&mut self, level: u8, currency: Currency) -> CommandResult {
        self.apply(Command::Upgrade { level, currency })
    }

    pub fn end_turn(&mut self) -> CommandResult {
        self.apply(Command::End)
    }

    /// End the game immediately and score it.
    pub fn quit(&mut self) -> CommandResult {
        self.apply(Command::Quit)
    }

    fn do_move(&mut self, target: &str) -> CommandResult {
        let id = self.active;
        let player = &self.players[id];
        if player.is_working() {
            return Err(Rejection::OccupyingRole);
        }
        if player.turn.moved {
            return Err(Rejection::AlreadyMoved);
        }
        let to = self
            .board
            .neighbor_named(player.location, target)
            .ok_or_else(|| Rejection::NotAdjacent(target.trim().to_string()))?;

        let player = &mut self.players[id];
        player.location = to;
        player.turn.moved = true;

        Ok(vec![GameEvent::Moved {
            player: id,
            to: self.board.name(to).to_string(),
        }])
    }

    fn do_work(&mut self, name: &str) -> CommandResult {
        let id = self.active;
        let player = &self.players[id];
        if player.is_working() {
            return Err(Rejection::AlreadyWorking);
        }
        if player.turn.took_role {
            return Err(Rejection::AlreadyTookRole);
        }
        let set = self.board.set(player.location).ok_or(Rejection::NotOnSet)?;
        if set.is_wrapped() {
            return Err(Rejection::SceneWrapped);
        }

        let role_id = self
            .roles_at(player.location)
            .into_iter()
            .find(|&r| {
                let role = self.roles.get(r);
                role.is_available() && role.is_named(name)
            })
            .ok_or_else(|| Rejection::RoleUnavailable(name.trim().to_string()))?;

        let role = self.roles.get(role_id);
        if player.rank() < role.level {
            return Err(Rejection::RankTooLow {
                rank: player.rank(),
                required: role.level,
            });
        }

        let event = GameEvent::RoleTaken {
            player: id,
            role: role.name.clone(),
            kind: role.kind,
            line: role.line.clone(),
        };

        self.roles.occupy(role_id, id);
        let player = &mut self.players[id];
        player.set_role(Some(role_id));
        player.turn.took_role = true;

        Ok(vec![event])
    }

    fn do_act(&mut self) -> CommandResult {
        let id = self.active;
        let player = &self.players[id];
        let role_id = player.role().ok_or(Rejection::NotWorking)?;
        if player.turn.acted {
            return Err(Rejection::AlreadyActed);
        }
        if player.turn.rehearsed {
            return Err(Rejection::AlreadyRehearsed);
        }

        let location = player.location;
        let bonus = player.rehearsal_bonus();
        let budget = self.scene_budget(location).ok_or(Rejection::SceneWrapped)?;
        let kind = self.roles.get(role_id).kind;

        let roll = self.dice.roll_die();
        self.players[id].turn.acted = true;

        if roll + bonus < budget {
            debug!(player = %id, roll, bonus, budget, "act failed");
            return Ok(vec![GameEvent::ActFailed {
                player: id,
                roll,
                bonus,
                budget,
            }]);
        }

        let reward = Reward::for_role(kind);
        self.players[id].earn(reward.currency, reward.amount);

        let mut takes_left = 0;
        if let Some(set) = self.board.set_mut(location) {
            set.remove_take();
            takes_left = set.active_takes();
        }
        debug!(player = %id, roll, bonus, budget, takes_left, "act succeeded");

        let mut events = vec![GameEvent::ActSucceeded {
            player: id,
            roll,
            bonus,
            budget,
            reward,
            takes_left,
        }];
        if takes_left == 0 {
            self.wrap_scene(location, &mut events);
        }
        Ok(events)
    }

    fn do_rehearse(&mut self) -> CommandResult {
        let id = self.active;
        let player = &self.players[id];
        if !player.is_working() {
            return Err(Rejection::NotWorking);
        }
        if player.turn.acted {
            return Err(Rejection::AlreadyActed);
        }
        if player.turn.rehearsed {
            return Err(Rejection::AlreadyRehearsed);
        }

        let budget = self
            .scene_budget(player.location)
            .ok_or(Rejection::SceneWrapped)?;
        let bonus = player.rehearsal_bonus();
        // A bonus of budget - 1 already guarantees success on any roll.
        if bonus + 1 >= budget {
            return Err(Rejection::RehearsalCapped { bonus, budget });
        }

        let player = &mut self.players[id];
        player.add_rehearsal();
        player.turn.rehearsed = true;

        Ok(vec![GameEvent::Rehearsed {
            player: id,
            bonus: player.rehearsal_bonus(),
        }])
    }

    fn do_upgrade(&mut self, level: u8, currency: Currency) -> CommandResult {
        let id = self.active;
        let office = self.board.office();
        let player = &self.players[id];
        if player.location != office {
            return Err(Rejection::NotAtOffice);
        }
        if player.is_working() {
            return Err(Rejection::OccupyingRole);
        }
        if !(MIN_RANK + 1..=MAX_RANK).contains(&level) {
            return Err(Rejection::RankOutOfRange(level));
        }
        let current = player.rank();
        if level <= current {
            return Err(Rejection::RankNotHigher {
                current,
                requested: level,
            });
        }
        let offer = self
            .board
            .get(office)
            .find_upgrade(level, currency)
            .copied()
            .ok_or(Rejection::NoSuchUpgrade { level, currency })?;
        let have = player.balance(currency);
        if have < offer.cost {
            return Err(Rejection::InsufficientFunds {
                currency,
                needed: offer.cost,
                have,
            });
        }

        let player = &mut self.players[id];
        player.pay(currency, offer.cost);
        player.promote(level);
        info!(player = %id, from = current, to = level, %currency, cost = offer.cost, "rank upgraded");

        Ok(vec![GameEvent::Upgraded {
            player: id,
            from: current,
            to: level,
            currency,
            cost: offer.cost,
        }])
    }

    fn do_end(&mut self) -> CommandResult {
        let from = self.active;
        let next = PlayerId::new(((from.index() + 1) % self.players.player_count()) as u8);

        self.active = next;
        self.players[next].turn.reset();
        self.turn += 1;

        Ok(vec![GameEvent::TurnEnded { player: from, next }])
    }

    fn do_quit(&mut self) -> CommandResult {
        info!(player = %self.active, day = self.day, "game quit");
        let mut events = Vec::new();
        self.end_game(&mut events);
        Ok(events)
    }

    /// Budget of the card at a set, while its scene is shooting.
    pub(super) fn scene_budget(&self, location: LocationId) -> Option<u8> {
        let set = self.board.set(location)?;
        if set.is_wrapped() {
            return None;
        }
        set.card().map(|card| self.cards.get(card).budget)
    }

    /// Release a player from their role, keeping both sides in step.
    pub(super) fn release(&mut self, player: PlayerId) -> Option<RoleId> {
        let role = self.players[player].role()?;
        self.roles.vacate(role);
        self.players[player].set_role(None);
        Some(role)
    }

    /// Mutable access to the dice, e.g. to queue more scripted rolls.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }
}
