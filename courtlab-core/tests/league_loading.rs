//! End-to-end league loading: CSV on disk → validated `League`.

use std::io::Write;

use courtlab_core::data::ingest::DataError;
use courtlab_core::{League, StatColumn};

/// Header row in canonical column order.
fn header() -> String {
    let mut cols = vec!["School".to_string()];
    cols.extend(StatColumn::ALL.iter().map(|c| c.csv_header().to_string()));
    cols.join(",")
}

/// One CSV row: counts get `count`, percentages get `pct`, the rest `agg`.
fn row(school: &str, count: i64, pct: f64, agg: f64) -> String {
    let mut fields = vec![school.to_string()];
    for col in StatColumn::ALL {
        if col.is_count() {
            fields.push(count.to_string());
        } else if col.is_percentage() {
            fields.push(format!("{pct}"));
        } else {
            fields.push(format!("{agg}"));
        }
    }
    fields.join(",")
}

fn write_csv(rows: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    writeln!(file, "{}", header()).unwrap();
    for r in rows {
        writeln!(file, "{r}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn loads_a_valid_csv() {
    let file = write_csv(&[
        row("Kansas", 4, 0.72, 35.0),
        row("Duke", 5, 0.68, 33.5),
        row("North Carolina", 6, 0.65, 36.1),
    ]);

    let league = League::load_csv(file.path()).expect("load");
    assert_eq!(league.len(), 3);
    assert_eq!(league.teams()[0].school, "Kansas");
    assert_eq!(league.teams()[0].ncaa_champ_count, 4);
    assert_eq!(league.teams()[2].school, "North Carolina");
    assert!((league.teams()[1].win_pct_2023 - 0.68).abs() < 1e-12);
}

#[test]
fn duplicate_school_fails_the_load() {
    let file = write_csv(&[row("Kansas", 4, 0.72, 35.0), row("Kansas", 4, 0.72, 35.0)]);

    let err = League::load_csv(file.path()).unwrap_err();
    assert!(matches!(err, DataError::DuplicateSchool(s) if s == "Kansas"));
}

#[test]
fn percentage_above_one_fails_the_load() {
    let file = write_csv(&[row("Duke", 5, 1.5, 33.0)]);

    let err = League::load_csv(file.path()).unwrap_err();
    assert!(matches!(err, DataError::OutOfRange { .. }));
}

#[test]
fn negative_count_fails_the_load() {
    let file = write_csv(&[row("Duke", -2, 0.5, 33.0)]);

    let err = League::load_csv(file.path()).unwrap_err();
    assert!(matches!(err, DataError::OutOfRange { .. }));
}

#[test]
fn header_only_file_is_empty() {
    let file = write_csv(&[]);

    let err = League::load_csv(file.path()).unwrap_err();
    assert!(matches!(err, DataError::EmptyTable(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = League::load_csv(std::path::Path::new("/no/such/league.csv")).unwrap_err();
    assert!(matches!(err, DataError::FileNotFound(_)));
}

#[test]
fn loaded_table_supports_search_and_selection() {
    let file = write_csv(&[
        row("Kansas", 4, 0.72, 35.0),
        row("Kansas State", 0, 0.55, 31.0),
        row("Duke", 5, 0.68, 33.5),
    ]);
    let league = League::load_csv(file.path()).unwrap();

    let matches = courtlab_core::search::search(&league, "kansas");
    assert_eq!(matches.len(), 2);

    let selected = league.find("Kansas State").unwrap();
    assert_eq!(selected.ncaa_champ_count, 0);
}
