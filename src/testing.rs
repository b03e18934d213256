//! Test support: scripted dice and a small fixture board.
//!
//! The fixture is a five-location board:
//!
//! ```text
//! Trailer -- Saloon -- Casting Office
//!    \        /            |
//!     `-- Bank ------- Jail
//! ```
//!
//! `SequenceDice` never reorders the deck, so the fixture deck is dealt in
//! order: "Evil Wears a Hat" to Saloon, "The Life and Times of John
//! Skywater" to Bank, "Ghost Town" to Jail.

use std::collections::VecDeque;

use crate::cards::CardId;
use crate::core::{Currency, Dice, SessionConfig, DIE_FACES, MAX_RANK, MIN_RANK};
use crate::data::{BoardData, CardData, LocationData, RoleData, UpgradeData};
use crate::rules::Session;

/// Dice that return a fixed sequence of rolls and leave the deck alone.
///
/// Panics when a roll is requested after the sequence is exhausted.
#[derive(Clone, Debug, Default)]
pub struct SequenceDice {
    rolls: VecDeque<u8>,
}

impl SequenceDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Queue more rolls.
    pub fn push(&mut self, rolls: impl IntoIterator<Item = u8>) {
        self.rolls.extend(rolls);
    }

    /// Rolls left in the sequence.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for SequenceDice {
    fn roll_die(&mut self) -> u8 {
        let roll = self
            .rolls
            .pop_front()
            .expect("SequenceDice: no rolls left");
        assert!((1..=DIE_FACES).contains(&roll), "SequenceDice: {roll} is not a die face");
        roll
    }

    fn shuffle_deck(&mut self, _deck: &mut [CardId]) {}
}

fn part(name: &str, level: u8, line: &str) -> RoleData {
    RoleData {
        name: name.to_string(),
        level,
        line: line.to_string(),
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The standard price list for ranks 2-6.
#[must_use]
pub fn standard_upgrades() -> Vec<UpgradeData> {
    [(2, 4, 5), (3, 10, 10), (4, 18, 15), (5, 28, 20), (6, 40, 25)]
        .into_iter()
        .flat_map(|(level, dollars, credits)| {
            [
                UpgradeData {
                    level,
                    currency: Currency::Dollar,
                    cost: dollars,
                },
                UpgradeData {
                    level,
                    currency: Currency::Credit,
                    cost: credits,
                },
            ]
        })
        .collect()
}

/// Five-location fixture board with three sets.
#[must_use]
pub fn fixture_board() -> BoardData {
    BoardData {
        locations: vec![
            LocationData::Plain {
                name: "Trailer".into(),
                neighbors: names(&["Saloon", "Bank"]),
            },
            LocationData::Shooting {
                name: "Saloon".into(),
                neighbors: names(&["Bank", "Casting Office"]),
                takes: 2,
                parts: vec![
                    part("Reluctant Farmer", 1, "I ain't so sure about that!"),
                    part("Woman in Red Dress", 2, "Come up and see me!"),
                ],
            },
            LocationData::Shooting {
                name: "Bank".into(),
                neighbors: names(&["Jail"]),
                takes: 1,
                parts: vec![
                    part("Suspicious Gentleman", 2, "Can you be more specific?"),
                    part("Flustered Teller", 3, "Would you like a large bill, sir?"),
                ],
            },
            LocationData::Shooting {
                name: "Jail".into(),
                neighbors: names(&["Casting Office"]),
                takes: 1,
                parts: vec![
                    part("Prisoner in Cell", 2, "Zzzzzzz... Whiskey!"),
                    part("Feller in Irons", 3, "Ah kilt the wrong man!"),
                ],
            },
            LocationData::Office {
                name: "Casting Office".into(),
                neighbors: Vec::new(),
                upgrades: standard_upgrades(),
            },
        ],
    }
}

fn card(name: &str, budget: u8, scene: u32, parts: Vec<RoleData>) -> CardData {
    CardData {
        name: name.to_string(),
        budget,
        scene,
        description: String::new(),
        parts,
    }
}

/// Fixture deck. Every card has a rank-1 starring role.
#[must_use]
pub fn fixture_deck() -> Vec<CardData> {
    vec![
        card(
            "Evil Wears a Hat",
            4,
            7,
            vec![
                part("Calhoun", 1, "Where's my hat?"),
                part("Bandit Leader", 3, "Nobody move!"),
            ],
        ),
        card(
            "The Life and Times of John Skywater",
            2,
            22,
            vec![
                part("Auctioneer", 1, "Going once!"),
                part("General Custer", 4, "Go West!"),
            ],
        ),
        card(
            "Ghost Town",
            3,
            12,
            vec![
                part("Old Timer", 1, "Dang ghosts!"),
                part("Ghost of Silas", 2, "Boooo!"),
            ],
        ),
        card(
            "Law and the Old West",
            5,
            20,
            vec![
                part("Rancher", 1, "Git off my land!"),
                part("Sheriff", 4, "I am the law."),
            ],
        ),
        card(
            "Gun! The Musical",
            6,
            41,
            vec![
                part("Looks Like a Ghost", 1, "Ride on!"),
                part("Singing Cowboy", 5, "Yippee-ki-yay!"),
            ],
        ),
    ]
}

/// Assert the structural invariants of a session.
///
/// - every rank is in 1-6
/// - role occupancy and player role references are mutual inverses
/// - a working player stands where their role is and their rehearsal bonus
///   stays below the scene budget
///
/// # Panics
///
/// On the first violated invariant.
pub fn assert_invariants<D>(session: &Session<D>) {
    let board = session.board();
    let roles = session.roles();

    for (id, player) in session.players().iter() {
        assert!(
            (MIN_RANK..=MAX_RANK).contains(&player.rank()),
            "{id} has rank {}",
            player.rank()
        );

        let Some(role_id) = player.role() else {
            assert_eq!(player.rehearsal_bonus(), 0, "{id} has a bonus but no role");
            continue;
        };
        assert_eq!(roles.get(role_id).occupant, Some(id), "{id} not on its role");

        let set = board
            .set(player.location)
            .unwrap_or_else(|| panic!("{id} works a role off set"));
        let card = set
            .card()
            .unwrap_or_else(|| panic!("{id} works at a set with no card"));
        let on_set = set.extras().contains(&role_id)
            || session.cards().get(card).roles.contains(&role_id);
        assert!(on_set, "{id} works a role that is not at its location");
        assert!(!set.is_wrapped(), "{id} still works a wrapped scene");
        assert!(
            player.rehearsal_bonus() < session.cards().get(card).budget,
            "{id} rehearsed to a guaranteed success"
        );
    }

    for (role_id, role) in roles.iter() {
        if let Some(player) = role.occupant {
            assert_eq!(
                session.players()[player].role(),
                Some(role_id),
                "{} occupied by {player} who is elsewhere",
                role.name
            );
        }
    }
}

/// A fixture session with scripted dice.
///
/// # Panics
///
/// When `players` is outside 2-8.
#[must_use]
pub fn fixture_session(players: usize, rolls: &[u8]) -> Session<SequenceDice> {
    let config = SessionConfig::new(players).expect("player count in 2-8");
    Session::with_dice(
        config,
        &fixture_board(),
        &fixture_deck(),
        SequenceDice::new(rolls.iter().copied()),
    )
    .expect("fixture data is valid")
}
