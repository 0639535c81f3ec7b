//! Team search — the filter that drives every view.
//!
//! A team matches when its school name contains the query as a
//! case-insensitive substring. Table order is preserved. The empty query
//! matches nothing; the UI shows its "start typing" prompt instead.

use crate::data::league::League;
use crate::domain::TeamRecord;

/// All teams whose school name contains `query`, case-insensitively.
pub fn search<'a>(league: &'a League, query: &str) -> Vec<&'a TeamRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    league
        .teams()
        .iter()
        .filter(|t| t.school.to_lowercase().contains(&needle))
        .collect()
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::league::tests::record;

    fn arb_school() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?"
    }

    proptest! {
        /// Search is invariant under query case changes.
        #[test]
        fn case_of_query_is_irrelevant(school in arb_school(), query in "[A-Za-z ]{1,6}") {
            let league = League::from_records(vec![record(&school)]).unwrap();
            let lower = search(&league, &query.to_lowercase()).len();
            let upper = search(&league, &query.to_uppercase()).len();
            prop_assert_eq!(lower, upper);
        }

        /// Every hit actually contains the query, case-folded.
        #[test]
        fn hits_contain_the_query(query in "[a-z]{1,4}") {
            let league = League::from_records(vec![
                record("Kansas"),
                record("Duke"),
                record("Gonzaga"),
                record("Saint Mary's"),
            ]).unwrap();
            for hit in search(&league, &query) {
                prop_assert!(hit.school.to_lowercase().contains(&query));
            }
        }

        /// The whole school name always finds itself.
        #[test]
        fn full_name_finds_itself(school in arb_school()) {
            let league = League::from_records(vec![record(&school)]).unwrap();
            let matches = search(&league, &school);
            prop_assert_eq!(matches.len(), 1);
        }
    }
}
