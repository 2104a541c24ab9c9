//! # Day Ordering
//!
//! Plans key their meals by English weekday name. Hash maps iterate in no
//! particular order, so anything shown to a user goes through [`sort_days`].

/// Canonical week order
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Position of a day in the week, `None` for anything that is not a weekday name
pub fn day_index(day: &str) -> Option<usize> {
    WEEK_DAYS.iter().position(|known| *known == day)
}

/// Order day-keyed entries Monday through Sunday.
///
/// Keys that are not weekday names go after Sunday, sorted by name.
///
/// # Examples
///
/// ```rust
/// use mealplan::day_order::sort_days;
///
/// let sorted = sort_days(vec![
///     ("Friday".to_string(), 2),
///     ("Brunch".to_string(), 9),
///     ("Monday".to_string(), 1),
/// ]);
/// let days: Vec<&str> = sorted.iter().map(|(d, _)| d.as_str()).collect();
/// assert_eq!(days, vec!["Monday", "Friday", "Brunch"]);
/// ```
pub fn sort_days<V>(entries: impl IntoIterator<Item = (String, V)>) -> Vec<(String, V)> {
    let mut entries: Vec<(String, V)> = entries.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| {
        let rank_a = day_index(a).unwrap_or(WEEK_DAYS.len());
        let rank_b = day_index(b).unwrap_or(WEEK_DAYS.len());
        rank_a.cmp(&rank_b).then_with(|| a.cmp(b))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_full_week_from_reversed_input() {
        let reversed = WEEK_DAYS.iter().rev().map(|d| (d.to_string(), ()));
        let days: Vec<String> = sort_days(reversed).into_iter().map(|(d, _)| d).collect();
        assert_eq!(days, WEEK_DAYS.to_vec());
    }

    #[test]
    fn test_order_independent_of_map_iteration() {
        let map: HashMap<String, u64> = WEEK_DAYS
            .iter()
            .enumerate()
            .map(|(i, d)| (d.to_string(), i as u64))
            .collect();

        let sorted = sort_days(map);
        let values: Vec<u64> = sorted.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unknown_days_last_by_name() {
        let sorted = sort_days(vec![
            ("someday".to_string(), 1),
            ("Sunday".to_string(), 2),
            ("Holiday".to_string(), 3),
            ("Tuesday".to_string(), 4),
        ]);
        let days: Vec<&str> = sorted.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(days, vec!["Tuesday", "Sunday", "Holiday", "someday"]);
    }

    #[test]
    fn test_day_names_are_case_sensitive() {
        assert_eq!(day_index("Monday"), Some(0));
        assert_eq!(day_index("monday"), None);
    }
}
