//! Natural inner join of the games and profiles tables.

use polars::prelude::*;

use crate::error::{CleanError, CleanResult};

/// Temporary ordering columns, removed before the merged table is returned
const GAMES_ORDER: &str = "__games_order";
const PROFILES_ORDER: &str = "__profiles_order";

/// Column names present in both tables, in the order of `left`
pub fn common_columns(left: &DataFrame, right: &DataFrame) -> Vec<String> {
    left.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .filter(|name| right.column(name).is_ok())
        .collect()
}

/// Inner join on every column the two tables share.
///
/// Rows without a partner on the other side are dropped. Shared columns
/// appear once, followed by the remaining profile columns. Rows come out in
/// games order, ties broken by profiles order. Null keys match each other,
/// so a game and a profile that both lack a shared value are still paired.
///
/// # Errors
///
/// [`CleanError::Schema`] when the tables share no column.
pub fn natural_inner_join(games: &DataFrame, profiles: &DataFrame) -> CleanResult<DataFrame> {
    let keys = common_columns(games, profiles);
    if keys.is_empty() {
        return Err(CleanError::Schema(
            "games and profiles share no column to join on".to_string(),
        ));
    }

    log::debug!("Joining on {:?}", keys);

    let on: Vec<Expr> = keys.iter().map(|key| col(key.as_str())).collect();

    let mut merged = games
        .clone()
        .lazy()
        .with_row_index(GAMES_ORDER, None)
        .join(
            profiles.clone().lazy().with_row_index(PROFILES_ORDER, None),
            on.clone(),
            on,
            JoinArgs {
                nulls_equal: true,
                ..JoinArgs::new(JoinType::Inner)
            },
        )
        .sort_by_exprs(
            [col(GAMES_ORDER), col(PROFILES_ORDER)],
            SortMultipleOptions::default(),
        )
        .collect()?;

    merged.drop_in_place(GAMES_ORDER)?;
    merged.drop_in_place(PROFILES_ORDER)?;

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> DataFrame {
        df! {
            "player_id" => [1i64, 2, 1, 3],
            "game" => ["g1", "g2", "g3", "g4"],
        }
        .unwrap()
    }

    fn profiles() -> DataFrame {
        df! {
            "player_id" => [3i64, 1, 4],
            "name" => ["Carl", "Ann", "Dora"],
        }
        .unwrap()
    }

    #[test]
    fn test_common_columns() {
        assert_eq!(common_columns(&games(), &profiles()), vec!["player_id"]);
    }

    #[test]
    fn test_inner_join_drops_unmatched() {
        let merged = natural_inner_join(&games(), &profiles()).unwrap();

        // player 2 has no profile, player 4 has no games
        assert_eq!(merged.height(), 3);
        let ids: Vec<Option<i64>> = merged.column("player_id").unwrap().i64().unwrap().into_iter().collect();
        assert!(!ids.contains(&Some(2)));
        assert!(!ids.contains(&Some(4)));
    }

    #[test]
    fn test_join_keeps_games_order() {
        let merged = natural_inner_join(&games(), &profiles()).unwrap();

        let games: Vec<Option<&str>> = merged.column("game").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(games, vec![Some("g1"), Some("g3"), Some("g4")]);

        let names: Vec<Option<&str>> = merged.column("name").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(names, vec![Some("Ann"), Some("Ann"), Some("Carl")]);
    }

    #[test]
    fn test_join_columns_appear_once() {
        let merged = natural_inner_join(&games(), &profiles()).unwrap();
        let names: Vec<String> = merged
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["player_id", "game", "name"]);
    }

    #[test]
    fn test_join_on_multiple_shared_columns() {
        let left = df! {
            "player_id" => [1i64, 1],
            "team" => ["NYG", "DAL"],
            "score" => [10i64, 20],
        }
        .unwrap();
        let right = df! {
            "player_id" => [1i64],
            "team" => ["DAL"],
            "coach" => ["X"],
        }
        .unwrap();

        let merged = natural_inner_join(&left, &right).unwrap();
        assert_eq!(merged.height(), 1);
        assert_eq!(merged.column("score").unwrap().i64().unwrap().get(0), Some(20));
    }

    #[test]
    fn test_join_pairs_null_keys() {
        let left = df! {
            "player_id" => [Some(1i64), None],
            "game" => ["g1", "g2"],
        }
        .unwrap();
        let right = df! {
            "player_id" => [Some(1i64), None],
            "name" => ["Ann", "Unknown"],
        }
        .unwrap();

        let merged = natural_inner_join(&left, &right).unwrap();
        assert_eq!(merged.height(), 2);

        let names: Vec<Option<&str>> = merged.column("name").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(names, vec![Some("Ann"), Some("Unknown")]);
    }

    #[test]
    fn test_join_without_shared_columns() {
        let left = df! { "a" => [1i64] }.unwrap();
        let right = df! { "b" => [1i64] }.unwrap();

        assert!(matches!(
            natural_inner_join(&left, &right),
            Err(CleanError::Schema(_))
        ));
    }
}
