//! Vote resolution over live match states.

use onenight_state::{MatchState, PlayerId, Role};
use onenight_vote::{Verdict, VoteResolver, WinReason};

const NAMES: [&str; 6] = ["Ada", "Bo", "Cora", "Dev", "Eli", "Fay"];

/// Seats: 1 Werewolf, 2 Minion, 3 Hunter, 4 Seer, 5 Robber, 6 Drunk.
fn table() -> MatchState {
    MatchState::from_deal(
        &NAMES,
        [
            Role::Werewolf,
            Role::Minion,
            Role::Hunter,
            Role::Seer,
            Role::Robber,
            Role::Drunk,
            Role::Werewolf,
            Role::Troublemaker,
            Role::Insomniac,
        ],
    )
    .unwrap()
}

fn vote_all(state: &mut MatchState, votes: &[(u8, u8)]) {
    for (voter, target) in votes {
        state.cast_vote(PlayerId(*voter), PlayerId(*target)).unwrap();
    }
}

#[test]
fn test_zero_votes_does_not_crash() {
    let state = table();
    let resolution = VoteResolver::new().resolve_match(&state);

    assert!(resolution.executed.is_empty());
    assert!(resolution.deaths().is_empty());
    assert_eq!(resolution.verdict, Verdict::WerewolfWin);
    assert_eq!(resolution.reason(), WinReason::NoExecutionWithWolf);
}

#[test]
fn test_wolf_executed() {
    let mut state = table();
    vote_all(&mut state, &[(2, 4), (3, 1), (4, 1), (5, 1), (6, 1), (1, 4)]);
    let resolution = VoteResolver::new().resolve_match(&state);

    assert_eq!(resolution.executed, vec![PlayerId(1)]);
    assert_eq!(resolution.verdict, Verdict::VillageWin);
}

#[test]
fn test_hunter_revenge_on_wolf() {
    let mut state = table();
    // The Hunter draws the most votes; the wolf is among their voters.
    vote_all(&mut state, &[(1, 3), (2, 3), (4, 3), (3, 5), (5, 6), (6, 4)]);
    let resolution = VoteResolver::new().resolve_match(&state);

    assert_eq!(resolution.executed, vec![PlayerId(3)]);
    assert_eq!(
        resolution.deaths(),
        &[PlayerId(1), PlayerId(2), PlayerId(3), PlayerId(4)]
    );
    assert_eq!(resolution.chain_deaths(), vec![PlayerId(1), PlayerId(2), PlayerId(4)]);
    assert_eq!(resolution.verdict, Verdict::VillageWin);
}

#[test]
fn test_factions_follow_current_roles() {
    let mut state = table();
    // The wolf card moves to seat 5 overnight.
    state.swap_players(PlayerId(1), PlayerId(5)).unwrap();
    vote_all(&mut state, &[(2, 1), (3, 1), (4, 1), (6, 1)]);
    let resolution = VoteResolver::new().resolve_match(&state);

    assert_eq!(resolution.executed, vec![PlayerId(1)]);
    assert_eq!(resolution.reason(), WinReason::WrongTargetExecuted);
}

#[test]
fn test_wolves_in_center_minion_solo() {
    let mut state = MatchState::from_deal(
        &NAMES,
        [
            Role::Minion,
            Role::Seer,
            Role::Robber,
            Role::Troublemaker,
            Role::Drunk,
            Role::Insomniac,
            Role::Werewolf,
            Role::Werewolf,
            Role::Hunter,
        ],
    )
    .unwrap();
    vote_all(&mut state, &[(1, 4), (2, 4), (3, 4)]);
    let resolution = VoteResolver::new().resolve_match(&state);

    assert_eq!(resolution.verdict, Verdict::WerewolfWin);
    assert_eq!(resolution.reason(), WinReason::MinionWinsSolo);
}

#[test]
fn test_resolution_serializes_reason_tag() {
    let state = table();
    let resolution = VoteResolver::new().resolve_match(&state);
    let json = serde_json::to_value(&resolution).unwrap();

    assert_eq!(json["verdict"], "WerewolfWin");
    assert_eq!(json["detail"]["reason"], "no_execution_with_wolf");
    assert_eq!(json["detail"]["deaths"], serde_json::json!([]));
}
