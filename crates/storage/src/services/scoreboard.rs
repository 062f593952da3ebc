use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::scoreboard::ScoreboardEntry;

/// Aggregate raw score events into the ranked scoreboard.
///
/// Every user appears exactly once; a user with no score events totals 0.
/// Ordering is total points descending, ties broken by display name
/// ascending under byte-wise (binary, case-sensitive) string comparison,
/// with the user id as the final disambiguator. Ranking therefore does not
/// depend on the database locale and is identical across runs for
/// identical data.
pub fn rank(
    users: impl IntoIterator<Item = (Uuid, String)>,
    scores: impl IntoIterator<Item = (Uuid, i32)>,
) -> Vec<ScoreboardEntry> {
    let mut totals: HashMap<Uuid, i64> = HashMap::new();
    for (user_id, points) in scores {
        *totals.entry(user_id).or_insert(0) += i64::from(points);
    }

    let mut entries: Vec<ScoreboardEntry> = users
        .into_iter()
        .map(|(id, display_name)| ScoreboardEntry {
            id,
            display_name,
            total_points: totals.get(&id).copied().unwrap_or(0),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.display_name.cmp(&b.display_name))
            .then_with(|| a.id.cmp(&b.id))
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn test_totals_are_the_sum_of_all_events() {
        let users = vec![(uid(1), "Alice".to_string())];
        let scores = vec![(uid(1), 10), (uid(1), 20), (uid(1), 5)];

        let board = rank(users, scores);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total_points, 35);
    }

    #[test]
    fn test_user_with_no_scores_appears_with_zero() {
        let users = vec![(uid(1), "Alice".to_string()), (uid(2), "Bob".to_string())];
        let scores = vec![(uid(1), 10), (uid(1), 20)];

        let board = rank(users, scores);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].display_name, "Alice");
        assert_eq!(board[0].total_points, 30);
        assert_eq!(board[1].display_name, "Bob");
        assert_eq!(board[1].total_points, 0);
    }

    #[test]
    fn test_orders_by_total_descending() {
        let users = vec![
            (uid(1), "Low".to_string()),
            (uid(2), "High".to_string()),
            (uid(3), "Mid".to_string()),
        ];
        let scores = vec![(uid(1), 1), (uid(2), 90), (uid(3), 50)];

        let totals: Vec<i64> = rank(users, scores).iter().map(|e| e.total_points).collect();
        assert_eq!(totals, vec![90, 50, 1]);
    }

    #[test]
    fn test_tie_break_by_display_name_ascending() {
        let users = vec![(uid(1), "Bravo".to_string()), (uid(2), "Alpha".to_string())];
        let scores = vec![(uid(1), 50), (uid(2), 50)];

        let ranked = rank(users, scores);
        let names: Vec<&str> = ranked
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
    }

    #[test]
    fn test_tie_break_collation_is_byte_wise() {
        // Uppercase sorts before lowercase under binary comparison.
        let users = vec![(uid(1), "alpha".to_string()), (uid(2), "Bravo".to_string())];
        let scores = vec![(uid(1), 50), (uid(2), 50)];

        let ranked = rank(users, scores);
        let names: Vec<&str> = ranked
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Bravo", "alpha"]);
    }

    #[test]
    fn test_identical_data_ranks_identically() {
        let users_a = vec![
            (uid(1), "Same".to_string()),
            (uid(2), "Same".to_string()),
            (uid(3), "Other".to_string()),
        ];
        // Same set, different input order.
        let mut users_b = users_a.clone();
        users_b.reverse();
        let scores = vec![(uid(1), 40), (uid(2), 40), (uid(3), 40)];

        assert_eq!(rank(users_a, scores.clone()), rank(users_b, scores));
    }

    #[test]
    fn test_empty_users_yield_empty_board() {
        assert!(rank(Vec::new(), vec![(uid(9), 10)]).is_empty());
    }

    #[test]
    fn test_events_for_unlisted_users_are_ignored() {
        // The scores table is foreign-keyed to users, so this only arises
        // when the caller passes a partial user set; such events must not
        // invent rows.
        let users = vec![(uid(1), "Alice".to_string())];
        let scores = vec![(uid(1), 10), (uid(99), 70)];

        let board = rank(users, scores);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total_points, 10);
    }
}
