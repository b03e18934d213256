//! Turn command tests on the fixture board.
//!
//! The fixture deals "Evil Wears a Hat" (budget 4) to Saloon, "The Life and
//! Times of John Skywater" (budget 2) to Bank and "Ghost Town" (budget 3) to
//! Jail. See `rust_deadwood::testing`.

use rust_deadwood::testing::{assert_invariants, fixture_session};
use rust_deadwood::{Command, Currency, GameEvent, PlayerId, Rejection};

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// Rank 1 player asks for a rank 2 role: rejected, nothing changes.
#[test]
fn test_rank_too_low_changes_nothing() {
    let mut s = fixture_session(2, &[]);
    assert_eq!(s.total_days(), 3);

    s.move_to("Saloon").unwrap();
    let before = s.players().clone();
    let roles_before: Vec<_> = s.roles().iter().map(|(_, r)| r.occupant).collect();

    assert_eq!(
        s.work("Woman in Red Dress"),
        Err(Rejection::RankTooLow {
            rank: 1,
            required: 2
        })
    );

    assert_eq!(s.players(), &before);
    let roles_after: Vec<_> = s.roles().iter().map(|(_, r)| r.occupant).collect();
    assert_eq!(roles_after, roles_before);
    assert!(!s.active_player().turn.took_role);
}

/// Die 5, bonus 0, budget 4: one take removed and the role's pay added.
#[test]
fn test_act_success_removes_take() {
    // Two act rolls, then four bonus dice when the second success wraps.
    let mut s = fixture_session(2, &[5, 5, 1, 1, 1, 1]);
    let saloon = s.board().find("Saloon").unwrap();

    s.move_to("Saloon").unwrap();
    s.work("Calhoun").unwrap();
    s.end_turn().unwrap();

    s.move_to("Saloon").unwrap();
    s.work("Reluctant Farmer").unwrap();
    s.end_turn().unwrap();

    let events = s.act().unwrap();
    assert!(matches!(
        events[0],
        GameEvent::ActSucceeded {
            roll: 5,
            bonus: 0,
            budget: 4,
            takes_left: 1,
            ..
        }
    ));
    let set = s.board().set(saloon).unwrap();
    assert_eq!(set.active_takes(), 1);
    assert!(set.takes()[1].is_active());
    assert!(!set.takes()[0].is_active());
    assert_eq!(s.players()[p(0)].credits, 2);
    assert_eq!(s.players()[p(0)].dollars, 0);
    s.end_turn().unwrap();

    // The extra is paid in dollars; this success wraps the scene and only
    // the starring player shares the bonus.
    s.act().unwrap();
    assert_eq!(s.players()[p(1)].dollars, 1);
    assert_eq!(s.players()[p(1)].credits, 0);
    assert_eq!(s.players()[p(0)].dollars, 4);
    assert_invariants(&s);
}

#[test]
fn test_move_rules() {
    let mut s = fixture_session(2, &[]);

    assert_eq!(
        s.move_to("Jail"),
        Err(Rejection::NotAdjacent("Jail".into()))
    );
    let events = s.move_to("  bAnK ").unwrap();
    assert_eq!(
        events,
        vec![GameEvent::Moved {
            player: p(0),
            to: "Bank".into()
        }]
    );
    assert_eq!(s.move_to("Jail"), Err(Rejection::AlreadyMoved));

    s.end_turn().unwrap();
    s.end_turn().unwrap();
    s.move_to("Jail").unwrap();
    s.work("Old Timer").unwrap();
    s.end_turn().unwrap();
    s.end_turn().unwrap();
    assert_eq!(
        s.move_to("Casting Office"),
        Err(Rejection::OccupyingRole)
    );
}

#[test]
fn test_work_off_set_and_on_wrapped_set() {
    let mut s = fixture_session(2, &[6, 1, 1]);
    assert_eq!(s.work("Calhoun"), Err(Rejection::NotOnSet));

    s.move_to("Bank").unwrap();
    s.work("Auctioneer").unwrap();
    s.act().unwrap();
    s.end_turn().unwrap();

    s.move_to("Bank").unwrap();
    assert_eq!(s.work("General Custer"), Err(Rejection::SceneWrapped));
    assert!(s.available_roles(s.board().find("Bank").unwrap()).is_empty());
}

#[test]
fn test_occupied_role_is_unavailable() {
    let mut s = fixture_session(2, &[]);
    s.move_to("Saloon").unwrap();
    s.work("Calhoun").unwrap();
    s.end_turn().unwrap();

    s.move_to("Saloon").unwrap();
    assert_eq!(
        s.work("calhoun"),
        Err(Rejection::RoleUnavailable("calhoun".into()))
    );
}

/// Upgrade to a rank below the current one: rejected, no money taken.
#[test]
fn test_upgrade_below_rank_keeps_money() {
    // Bank wraps on the first act; two bonus dice of 6 pay 12 dollars.
    let mut s = fixture_session(2, &[6, 6, 6]);
    s.move_to("Bank").unwrap();
    s.work("Auctioneer").unwrap();
    s.act().unwrap();
    assert_eq!(s.players()[p(0)].dollars, 12);
    s.end_turn().unwrap();
    s.end_turn().unwrap();

    s.move_to("Jail").unwrap();
    s.end_turn().unwrap();
    s.end_turn().unwrap();
    s.move_to("Casting Office").unwrap();

    let events = s.upgrade(3, Currency::Dollar).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::Upgraded {
            player: p(0),
            from: 1,
            to: 3,
            currency: Currency::Dollar,
            cost: 10
        }]
    );
    assert_eq!(s.players()[p(0)].dollars, 2);

    assert_eq!(
        s.upgrade(2, Currency::Dollar),
        Err(Rejection::RankNotHigher {
            current: 3,
            requested: 2
        })
    );
    assert_eq!(s.players()[p(0)].credits, 2);
    assert_eq!(
        s.upgrade(4, Currency::Credit),
        Err(Rejection::InsufficientFunds {
            currency: Currency::Credit,
            needed: 15,
            have: 2
        })
    );
    assert_eq!(s.players()[p(0)].credits, 2);
    assert_eq!(s.players()[p(0)].dollars, 2);
    assert_eq!(s.players()[p(0)].rank(), 3);
}

#[test]
fn test_rehearse_then_act_next_turn() {
    let mut s = fixture_session(2, &[2]);
    s.move_to("Saloon").unwrap();
    s.work("Calhoun").unwrap();
    s.rehearse().unwrap();
    s.end_turn().unwrap();
    s.end_turn().unwrap();

    s.rehearse().unwrap();
    s.end_turn().unwrap();
    s.end_turn().unwrap();

    // 2 + 2 reaches budget 4.
    let events = s.act().unwrap();
    assert!(matches!(
        events[0],
        GameEvent::ActSucceeded { roll: 2, bonus: 2, .. }
    ));
    assert_eq!(s.rehearse(), Err(Rejection::AlreadyActed));
}

#[test]
fn test_history_records_everything() {
    let mut s = fixture_session(3, &[]);
    s.move_to("Saloon").unwrap();
    s.work("Nobody").unwrap_err();
    s.end_turn().unwrap();
    s.apply(Command::Move {
        target: "Bank".into(),
    })
    .unwrap();

    let history: Vec<_> = s.history().iter().cloned().collect();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].player, p(0));
    assert!(history[0].accepted);
    assert!(!history[1].accepted);
    assert_eq!(history[1].command.verb(), "work");
    assert_eq!(history[3].player, p(1));
    assert_eq!(history[3].turn, 2);
    assert!(history.iter().all(|r| r.day == 1));
}

#[test]
fn test_quit_ends_game() {
    let mut s = fixture_session(4, &[]);
    s.end_turn().unwrap();

    let events = s.quit().unwrap();
    assert!(matches!(
        &events[..],
        [GameEvent::GameEnded { winner: Some(_), scores }] if scores.len() == 4
    ));
    assert!(s.is_game_over());

    for command in [
        Command::Act,
        Command::End,
        Command::Quit,
        Command::Move {
            target: "Saloon".into(),
        },
    ] {
        assert_eq!(s.apply(command), Err(Rejection::GameOver));
    }
}

#[test]
fn test_currency_literals() {
    assert_eq!("Dollars".parse::<Currency>(), Ok(Currency::Dollar));
    assert_eq!("cr".parse::<Currency>(), Ok(Currency::Credit));
    assert!("pesos".parse::<Currency>().is_err());
}
