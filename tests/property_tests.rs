//! Property tests: random command streams on the fixture board.

use proptest::prelude::*;

use rust_deadwood::core::{MAX_RANK, MIN_RANK};
use rust_deadwood::testing::{assert_invariants, fixture_board, fixture_deck};
use rust_deadwood::{
    distribute_payout, Command, Currency, GameEvent, LocationStatus, PlayerId, Rejection, Session,
    SessionConfig,
};

const TARGETS: &[&str] = &["Trailer", "Saloon", "Bank", "Jail", "Casting Office", "Nowhere"];

const ROLES: &[&str] = &[
    "Reluctant Farmer",
    "Woman in Red Dress",
    "Suspicious Gentleman",
    "Flustered Teller",
    "Prisoner in Cell",
    "Calhoun",
    "Bandit Leader",
    "Auctioneer",
    "General Custer",
    "Old Timer",
    "Ghost of Silas",
    "Sheriff",
];

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => prop::sample::select(TARGETS).prop_map(|t| Command::Move { target: t.to_string() }),
        3 => prop::sample::select(ROLES).prop_map(|r| Command::Work { role: r.to_string() }),
        4 => Just(Command::Act),
        2 => Just(Command::Rehearse),
        2 => (1u8..=7, prop::bool::ANY).prop_map(|(level, credit)| Command::Upgrade {
            level,
            currency: if credit { Currency::Credit } else { Currency::Dollar },
        }),
        4 => Just(Command::End),
    ]
}

/// Everything a rejection must leave alone.
#[derive(Debug, PartialEq)]
struct Fingerprint {
    players: rust_deadwood::PlayerMap<rust_deadwood::Player>,
    occupants: Vec<Option<PlayerId>>,
    statuses: Vec<LocationStatus>,
    active: PlayerId,
    day: u32,
}

fn fingerprint(s: &Session) -> Fingerprint {
    Fingerprint {
        players: s.players().clone(),
        occupants: s.roles().iter().map(|(_, r)| r.occupant).collect(),
        statuses: s.board().iter().map(|(id, _)| s.location_status(id)).collect(),
        active: s.active_id(),
        day: s.day(),
    }
}

proptest! {
    #[test]
    fn prop_payout_conserves_dice(
        occupants in 1usize..=3,
        dice in prop::collection::vec(1u8..=6, 1..=6),
    ) {
        let players: Vec<PlayerId> = (0..occupants as u8).map(PlayerId::new).collect();
        let payouts = distribute_payout(&players, &dice);

        prop_assert_eq!(payouts.len(), occupants);
        let paid: u32 = payouts.iter().map(|x| x.dollars).sum();
        let rolled: u32 = dice.iter().map(|&d| u32::from(d)).sum();
        prop_assert_eq!(paid, rolled);

        let mut sorted = dice.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        for (i, payout) in payouts.iter().enumerate() {
            prop_assert_eq!(payout.player, players[i]);
            let expected: u32 = sorted
                .iter()
                .skip(i)
                .step_by(occupants)
                .map(|&d| u32::from(d))
                .sum();
            prop_assert_eq!(payout.dollars, expected);
        }
    }

    #[test]
    fn prop_random_commands_keep_invariants(
        seed in any::<u64>(),
        players in 2usize..=5,
        commands in prop::collection::vec(command(), 1..300),
    ) {
        let config = SessionConfig::new(players).unwrap().with_seed(seed);
        let mut s = Session::setup(config, &fixture_board(), &fixture_deck()).unwrap();
        let mut ranks = vec![MIN_RANK; players];
        let mut day = s.day();

        for command in commands {
            let before = fingerprint(&s);
            let rehearsing = matches!(command, Command::Rehearse);

            match s.apply(command) {
                Ok(events) => {
                    if rehearsing {
                        let me = s.active_player();
                        let budget = s
                            .board()
                            .set(me.location)
                            .and_then(|set| set.card())
                            .map(|card| s.cards().get(card).budget)
                            .unwrap();
                        prop_assert!(me.rehearsal_bonus < budget);
                    }
                    // A wrap is the only thing that can end a day.
                    let day_ended = events.iter().any(|e| matches!(e, GameEvent::DayEnded { .. }));
                    if day_ended {
                        let wrapped = events.iter().any(|e| matches!(e, GameEvent::SceneWrapped { .. }));
                        prop_assert!(wrapped);
                    }
                }
                Err(Rejection::GameOver) => prop_assert!(s.is_game_over()),
                Err(_) => prop_assert_eq!(fingerprint(&s), before),
            }

            assert_invariants(&s);
            for (id, player) in s.players().iter() {
                prop_assert!(player.rank() >= ranks[id.index()]);
                prop_assert!(player.rank() <= MAX_RANK);
                ranks[id.index()] = player.rank();
            }
            prop_assert!(s.day() >= day);
            day = s.day();

            // Day end happens right after the wrap that leaves one scene.
            if !s.is_game_over() {
                prop_assert!(s.board().active_set_count() >= 2);
            }
        }
    }

    #[test]
    fn prop_history_matches_commands(
        commands in prop::collection::vec(command(), 0..100),
    ) {
        let config = SessionConfig::new(3).unwrap();
        let mut s = Session::setup(config, &fixture_board(), &fixture_deck()).unwrap();

        let mut accepted = Vec::new();
        for command in &commands {
            accepted.push(s.apply(command.clone()).is_ok());
        }

        let history: Vec<_> = s.history().iter().cloned().collect();
        prop_assert_eq!(history.len(), commands.len());
        for ((record, command), ok) in history.iter().zip(&commands).zip(&accepted) {
            prop_assert_eq!(&record.command, command);
            prop_assert_eq!(record.accepted, *ok);
        }
    }
}
