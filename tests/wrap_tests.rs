//! Scene wrap and end-of-day tests on the fixture board.

use rust_deadwood::testing::{assert_invariants, fixture_session};
use rust_deadwood::{distribute_payout, GameEvent, LocationStatus, PlayerId};

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

fn wraps(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::SceneWrapped { .. }))
        .count()
}

/// Last take removed while exactly one other scene is shooting: the day
/// ends at once and everyone still working is released unpaid.
#[test]
fn test_wrap_with_one_scene_left_ends_day() {
    // p0 wraps Bank (act 6, bonus dice 2 and 3). p1 works Saloon and fails.
    // p2 wraps Jail (act 6, bonus dice 4, 4, 1).
    let mut s = fixture_session(3, &[6, 2, 3, 1, 6, 4, 4, 1]);

    s.move_to("Bank").unwrap();
    s.work("Auctioneer").unwrap();
    let events = s.act().unwrap();
    assert_eq!(wraps(&events), 1);
    assert_eq!(s.board().active_set_count(), 2);
    assert_eq!(s.players()[p(0)].dollars, 5);
    s.end_turn().unwrap();

    s.move_to("Saloon").unwrap();
    s.work("Calhoun").unwrap();
    s.act().unwrap();
    let saloon_credits = s.players()[p(1)].credits;
    s.end_turn().unwrap();

    s.move_to("Bank").unwrap();
    s.end_turn().unwrap();
    s.end_turn().unwrap();
    s.end_turn().unwrap();
    s.move_to("Jail").unwrap();
    s.work("Old Timer").unwrap();
    let events = s.act().unwrap();

    assert!(matches!(
        &events[1],
        GameEvent::SceneWrapped { payouts, .. } if payouts[0].dollars == 9
    ));
    assert!(events.contains(&GameEvent::DayEnded {
        day: 1,
        released: vec![p(1)],
    }));
    assert!(matches!(
        events.last(),
        Some(GameEvent::DayStarted { day: 2, scenes: 3 })
    ));

    // Saloon player got nothing for the unfinished scene.
    assert_eq!(s.players()[p(1)].dollars, 0);
    assert_eq!(s.players()[p(1)].credits, saloon_credits);
    assert_eq!(s.players()[p(2)].dollars, 9);

    assert_eq!(s.day(), 2);
    assert_eq!(s.active_id(), p(0));
    for summary in s.board_summary() {
        assert_eq!(summary.role, None);
        assert_eq!(
            summary.status,
            LocationStatus::Rest {
                name: "Trailer".into()
            }
        );
    }
    assert_invariants(&s);
}

#[test]
fn test_wrap_with_two_scenes_left_continues_day() {
    let mut s = fixture_session(2, &[6, 1, 1]);
    s.move_to("Bank").unwrap();
    s.work("Auctioneer").unwrap();
    let events = s.act().unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(s.day(), 1);
    let bank = s.board().find("Bank").unwrap();
    assert_eq!(s.location_status(bank).to_string(), "Bank (wrapped)");
    assert!(!s.players()[p(0)].is_working());
}

#[test]
fn test_extras_released_on_wrap() {
    // p0 takes the Saloon extra, p1 the starring role and wraps.
    let mut s = fixture_session(2, &[6, 6, 3, 3, 3, 3]);
    s.move_to("Saloon").unwrap();
    s.work("Reluctant Farmer").unwrap();
    s.end_turn().unwrap();

    s.move_to("Saloon").unwrap();
    s.work("Calhoun").unwrap();
    s.end_turn().unwrap();

    s.act().unwrap();
    s.end_turn().unwrap();
    let events = s.act().unwrap();

    let (payouts, released) = events
        .iter()
        .find_map(|e| match e {
            GameEvent::SceneWrapped {
                payouts, released, ..
            } => Some((payouts.clone(), released.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].player, p(1));
    assert_eq!(payouts[0].dollars, 12);
    assert_eq!(released, vec![p(0), p(1)]);
    assert_eq!(s.players()[p(0)].dollars, 1);
    assert_invariants(&s);
}

#[test]
fn test_payout_sums_match_dice() {
    let dice = [6, 1, 4, 4, 2];
    let payouts = distribute_payout(&[p(3), p(1)], &dice);
    let total: u32 = payouts.iter().map(|x| x.dollars).sum();
    assert_eq!(total, dice.iter().map(|&d| u32::from(d)).sum::<u32>());
    // sorted: 6 4 4 2 1 -> p3: 6 + 4 + 1, p1: 4 + 2
    assert_eq!(payouts[0].dollars, 11);
    assert_eq!(payouts[1].dollars, 6);
}
