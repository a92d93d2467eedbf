//! Summary ordering and rendering
//!
//! Works on owned snapshots so the board's lock is never held while
//! sorting or formatting.

use types::fixture::MatchSnapshot;

/// Order matches for display: most total goals first, ties broken by the
/// most recently started match.
pub fn sort_for_summary(matches: &mut [MatchSnapshot]) {
    matches.sort_by_key(MatchSnapshot::summary_key);
}

/// One line per match, no trailing newline. Empty input renders as "".
pub fn render(matches: &[MatchSnapshot]) -> String {
    matches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use types::ids::MatchId;

    proptest! {
        #[test]
        fn prop_sorted_order_respects_goals_then_id(
            scores in prop::collection::vec((0u32..20, 0u32..20), 0..30),
        ) {
            let mut matches: Vec<MatchSnapshot> = scores
                .iter()
                .enumerate()
                .map(|(index, (home, away))| MatchSnapshot {
                    id: MatchId::from_raw(index as u64 + 1),
                    home_team: format!("Home{}", index),
                    away_team: format!("Away{}", index),
                    home_score: *home,
                    away_score: *away,
                })
                .collect();

            sort_for_summary(&mut matches);

            for pair in matches.windows(2) {
                let (first, second) = (&pair[0], &pair[1]);
                prop_assert!(first.total_goals() >= second.total_goals());
                if first.total_goals() == second.total_goals() {
                    prop_assert!(first.id > second.id);
                }
            }

            let rendered = render(&matches);
            prop_assert_eq!(rendered.lines().count(), matches.len());
            prop_assert!(!rendered.ends_with('\n'));
        }
    }
}
