use std::collections::HashSet;

use war_planner::prelude::*;

fn scenario_home() -> Vec<Attacker> {
    vec![
        Attacker::new("A", 15).with_skill_score(100.0),
        Attacker::new("B", 13).with_skill_score(50.0),
    ]
}

fn scenario_away() -> Vec<Target> {
    vec![Target::new("X", 15, 1), Target::new("Y", 13, 2)]
}

fn find<'a>(recs: &'a [Recommendation], id: &str) -> &'a Recommendation {
    recs.iter()
        .find(|r| r.attacker_id == id)
        .expect("every attacker gets a recommendation")
}

/// A 15-vs-15 war with mixed levels and some progress on the board.
fn big_war() -> (Vec<Attacker>, Vec<Target>) {
    let levels = [16, 16, 15, 15, 15, 14, 14, 14, 13, 13, 12, 12, 11, 10, 9];
    let home = levels
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            Attacker::new(format!("h{i}"), level)
                .with_skill_score(40.0 + (i * 7 % 60) as f64)
                .with_success_rate(0.1 * (i % 6) as f64)
                .with_attacks_used((i % 4 == 3) as u32 * 2)
        })
        .collect();
    let away = levels
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            Target::new(format!("t{i}"), level, i as u32 + 1).with_stars((i % 5) as u8 % 4)
        })
        .collect();
    (home, away)
}

#[test]
fn scenario_a_standard_format() {
    let recs = get_recommendations(&scenario_home(), &scenario_away(), None);
    assert_eq!(
        recs,
        vec![
            Recommendation::assigned("A", "Y", Rationale::Cleanup, 95),
            Recommendation::assigned("B", "X", Rationale::Reach, 5),
        ]
    );
}

#[test]
fn scenario_b_exhausted_attacker() {
    let mut home = scenario_home();
    home[0].attacks_used = 2;
    for away in [scenario_away(), vec![], vec![Target::new("Z", 1, 1)]] {
        let recs = get_recommendations(&home, &away, None);
        assert_eq!(find(&recs, "A"), &Recommendation::done("A"));
    }
}

#[test]
fn scenario_c_league_single_attacker() {
    let home = vec![Attacker::new("A", 14).with_skill_score(80.0)];
    let away = vec![Target::new("X", 16, 1)];
    let recs = get_recommendations(&home, &away, Some(EventContext::league()));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].target_id.as_deref(), Some("X"));
    assert_eq!(recs[0].rationale, Rationale::BestEffort);
    // displayed confidence comes from the hit model: two levels up, floor of 5%
    assert_eq!(recs[0].confidence, 5);
}

#[test]
fn empty_away_leaves_everyone_in_reserve() {
    for context in [None, Some(EventContext::league())] {
        let recs = get_recommendations(&scenario_home(), &[], context);
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.rationale == Rationale::Reserve));
        assert!(recs.iter().all(|r| r.target_id.is_none() && r.confidence == 0));
    }
}

#[test]
fn empty_home_gives_empty_plan() {
    assert!(get_recommendations(&[], &scenario_away(), None).is_empty());
    assert!(get_recommendations(&[], &scenario_away(), Some(EventContext::league())).is_empty());
}

#[test]
fn every_attacker_gets_exactly_one_recommendation() {
    let (home, away) = big_war();
    for format in [WarFormat::Standard, WarFormat::League] {
        let recs = get_recommendations(&home, &away, Some(EventContext::new(10.0, format)));
        assert_eq!(recs.len(), home.len());
        let ids: HashSet<_> = recs.iter().map(|r| r.attacker_id.as_str()).collect();
        assert_eq!(ids.len(), home.len());
    }
}

#[test]
fn no_target_is_claimed_twice() {
    let (home, away) = big_war();
    for context in [
        EventContext::new(20.0, WarFormat::Standard),
        EventContext::new(2.0, WarFormat::Standard),
        EventContext::new(20.0, WarFormat::League),
    ] {
        let recs = get_recommendations(&home, &away, Some(context));
        let mut seen = HashSet::new();
        for target in recs.iter().filter_map(|r| r.target_id.as_deref()) {
            assert!(seen.insert(target), "{target} claimed twice in {context:?}");
        }
    }
}

#[test]
fn destroyed_targets_are_never_offered() {
    let (home, away) = big_war();
    let destroyed: HashSet<_> = away
        .iter()
        .filter(|t| t.stars_earned >= 3)
        .map(|t| t.id.as_str())
        .collect();
    assert!(!destroyed.is_empty());
    for format in [WarFormat::Standard, WarFormat::League] {
        let recs = get_recommendations(&home, &away, Some(EventContext::new(12.0, format)));
        assert!(recs
            .iter()
            .filter_map(|r| r.target_id.as_deref())
            .all(|t| !destroyed.contains(t)));
    }
}

#[test]
fn exhausted_attackers_are_done() {
    let (home, away) = big_war();
    for format in [WarFormat::Standard, WarFormat::League] {
        let recs = get_recommendations(&home, &away, Some(EventContext::new(12.0, format)));
        for attacker in home.iter().filter(|a| a.attacks_used >= format.attack_limit()) {
            assert_eq!(find(&recs, &attacker.id), &Recommendation::done(&attacker.id));
        }
    }
}

#[test]
fn league_marks_any_used_attack_done() {
    let home = vec![
        Attacker::new("a", 15).with_attacks_used(1),
        Attacker::new("b", 15),
    ];
    let away = vec![Target::new("x", 15, 1), Target::new("y", 14, 2)];
    let league = get_recommendations(&home, &away, Some(EventContext::league()));
    assert_eq!(find(&league, "a").rationale, Rationale::Done);
    assert!(find(&league, "b").target_id.is_some());

    // one attack left in a standard war
    let standard = get_recommendations(&home, &away, None);
    assert!(find(&standard, "a").target_id.is_some());
}

#[test]
fn planning_is_deterministic() {
    let (home, away) = big_war();
    for context in [
        None,
        Some(EventContext::new(1.0, WarFormat::Standard)),
        Some(EventContext::league()),
    ] {
        let first = get_recommendations(&home, &away, context);
        let second = get_recommendations(&home, &away, context);
        assert_eq!(first, second);
    }
}

#[test]
fn confidence_stays_in_range() {
    let (mut home, away) = big_war();
    home[0].skill_score = Some(-400.0);
    home[1].success_rate = Some(12.0);
    for format in [WarFormat::Standard, WarFormat::League] {
        let recs = get_recommendations(&home, &away, Some(EventContext::new(3.0, format)));
        assert!(recs.iter().all(|r| r.confidence <= 95));
    }
}

#[test]
fn planner_is_shareable_across_threads() {
    let planner = WarPlanner::default();
    let (home, away) = big_war();
    let expected = planner.recommend(&home, &away, None);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| planner.recommend(&home, &away, None)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
