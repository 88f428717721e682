use std::io::Write;
use std::sync::Arc;

use mbtiframes::query::CountryValue;
use mbtiframes::{
    load, Continent, ContinentClassifier, DataQualityWarning, Dataset, DatasetLoader, Error,
    MbtiType,
};
use tempfile::NamedTempFile;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/countries_sample.csv");

fn sample() -> Dataset {
    load(SAMPLE).expect("fixture loads")
}

#[test]
fn top_k_is_non_increasing_and_bounded() {
    let dataset = sample();
    for t in MbtiType::ALL {
        for k in [1, 3, 8, 20] {
            let view = dataset.top_k(t.code(), k).unwrap();
            assert_eq!(view.entries.len(), k.min(dataset.len()));
            assert!(view
                .entries
                .windows(2)
                .all(|w| w[0].value >= w[1].value));

            let mut names: Vec<&str> = view.entries.iter().map(|e| e.country.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), view.entries.len());
        }
    }
}

#[test]
fn top_k_ties_keep_row_order() {
    let dataset = sample();
    let first = dataset.top_k("INTJ", 2).unwrap();
    assert_eq!(
        first.entries,
        vec![
            CountryValue {
                country: "Japan".to_string(),
                value: 0.15
            },
            CountryValue {
                country: "Germany".to_string(),
                value: 0.15
            },
        ]
    );
    assert_eq!(dataset.top_k("INTJ", 2).unwrap(), first);
}

#[test]
fn top_k_skips_missing_values() {
    let dataset = Dataset::from_rows(
        &["INFJ"],
        vec![("A", vec![0.1]), ("B", vec![f64::NAN]), ("C", vec![0.3])],
    )
    .unwrap();
    let view = dataset.top_k("INFJ", 10).unwrap();
    let names: Vec<&str> = view.entries.iter().map(|e| e.country.as_str()).collect();
    assert_eq!(names, vec!["C", "A"]);
}

#[test]
fn top_one_picks_the_larger_share() {
    let dataset = Dataset::from_rows(
        &["INFJ", "INTJ", "ENFP"],
        vec![("A", vec![0.10, 0.05, 0.85]), ("B", vec![0.30, 0.02, 0.68])],
    )
    .unwrap();
    let view = dataset.top_k("INFJ", 1).unwrap();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].country, "B");
    assert_eq!(view.entries[0].value, 0.30);
}

#[test]
fn distribution_is_a_permutation_of_the_row() {
    let dataset = sample();
    for country in dataset.countries() {
        let view = dataset.distribution(country).unwrap();
        assert_eq!(view.entries.len(), 16);
        assert!(view
            .entries
            .windows(2)
            .all(|w| w[0].value >= w[1].value));

        let mut from_view: Vec<f64> = view.entries.iter().map(|e| e.value).collect();
        let mut from_row: Vec<f64> = dataset
            .types()
            .iter()
            .map(|t| dataset.value(country, t).unwrap())
            .collect();
        from_view.sort_by(f64::total_cmp);
        from_row.sort_by(f64::total_cmp);
        assert_eq!(from_view, from_row);

        let mut types: Vec<&str> = view.entries.iter().map(|e| e.mbti_type.as_str()).collect();
        types.sort_unstable();
        assert_eq!(types, dataset.sorted_types());
    }
}

#[test]
fn distribution_ties_keep_column_order() {
    let dataset =
        Dataset::from_rows(&["ISTJ", "ENFP", "INTP"], vec![("A", vec![0.25, 0.5, 0.25])]).unwrap();
    let view = dataset.distribution("A").unwrap();
    let order: Vec<&str> = view.entries.iter().map(|e| e.mbti_type.as_str()).collect();
    assert_eq!(order, vec!["ENFP", "ISTJ", "INTP"]);
}

#[test]
fn continent_mean_of_three_countries() {
    let dataset = Dataset::from_rows(
        &["X", "Y"],
        vec![
            ("A", vec![0.2, 0.8]),
            ("B", vec![0.4, 0.6]),
            ("C", vec![0.0, 1.0]),
        ],
    )
    .unwrap();
    let classifier = ContinentClassifier::from_entries(
        ["A", "B", "C"]
            .into_iter()
            .map(|c| (c.to_string(), Continent::Africa)),
    );

    let view = dataset.continent_averages(&classifier).unwrap();
    assert_eq!(view.continents(), vec![Continent::Africa]);
    assert_eq!(view.get(Continent::Africa).unwrap().countries, 3);
    assert!((view.mean(Continent::Africa, "X").unwrap() - 0.2).abs() < 1e-12);
    assert!((view.mean(Continent::Africa, "Y").unwrap() - 0.8).abs() < 1e-12);
}

#[test]
fn unclassified_countries_are_excluded() {
    let dataset = sample();
    let view = dataset
        .continent_averages(&ContinentClassifier::builtin())
        .unwrap();

    assert_eq!(view.unclassified, vec!["Iceland".to_string()]);
    assert_eq!(view.continents(), Continent::ALL.to_vec());
    let asia = view.get(Continent::Asia).unwrap();
    assert_eq!(asia.countries, 2);
    assert!((view.mean(Continent::Asia, "INTJ").unwrap() - (0.0731 + 0.15) / 2.0).abs() < 1e-12);

    // Without Kenya, Africa has no members and disappears from the view.
    let without_africa = ContinentClassifier::from_entries(
        dataset
            .countries()
            .iter()
            .filter(|c| c.as_str() != "Kenya")
            .filter_map(|c| {
                ContinentClassifier::builtin()
                    .classify(c)
                    .map(|cont| (c.clone(), cont))
            }),
    );
    let view = dataset.continent_averages(&without_africa).unwrap();
    assert!(view.get(Continent::Africa).is_none());
    assert_eq!(view.rows.len(), 4);
}

#[test]
fn continent_averages_are_bit_identical_across_calls() {
    let dataset = sample();
    let classifier = ContinentClassifier::builtin();
    let a = dataset.continent_averages(&classifier).unwrap();
    let b = dataset.continent_averages(&classifier).unwrap();
    for (x, y) in a.rows.iter().zip(&b.rows) {
        let xs: Vec<u64> = x.means.iter().map(|m| m.to_bits()).collect();
        let ys: Vec<u64> = y.means.iter().map(|m| m.to_bits()).collect();
        assert_eq!(xs, ys);
    }
}

#[test]
fn distribution_puts_missing_values_last() {
    let dataset = Dataset::from_rows(
        &["INFJ", "INTJ", "ENFP"],
        vec![("A", vec![0.2, f64::NAN, 0.5])],
    )
    .unwrap();
    let view = dataset.distribution("A").unwrap();
    let order: Vec<&str> = view.entries.iter().map(|e| e.mbti_type.as_str()).collect();
    assert_eq!(order, vec!["ENFP", "INFJ", "INTJ"]);
    assert!(view.entries[2].value.is_nan());
}

#[test]
fn continent_means_skip_missing_values() {
    let dataset = Dataset::from_rows(
        &["INFJ", "INTJ"],
        vec![
            ("Japan", vec![0.2, f64::NAN]),
            ("China", vec![f64::NAN, f64::NAN]),
            ("France", vec![0.1, 0.3]),
        ],
    )
    .unwrap();
    let classifier = ContinentClassifier::from_entries([
        ("Japan".to_string(), Continent::Asia),
        ("China".to_string(), Continent::Asia),
        ("France".to_string(), Continent::Europe),
    ]);
    let view = dataset.continent_averages(&classifier).unwrap();

    assert_eq!(view.get(Continent::Asia).map(|r| r.countries), Some(2));
    assert_eq!(view.mean(Continent::Asia, "INFJ"), Some(0.2));
    assert!(view.mean(Continent::Asia, "INTJ").unwrap().is_nan());
    assert_eq!(view.mean(Continent::Europe, "INTJ"), Some(0.3));
}

#[test]
fn unknown_lookups_fail_cleanly() {
    let dataset = sample();
    assert!(matches!(
        dataset.top_k("ZZZZ", 10),
        Err(Error::UnknownType(t)) if t == "ZZZZ"
    ));
    assert!(matches!(
        dataset.distribution("Nowhereland"),
        Err(Error::UnknownCountry(c)) if c == "Nowhereland"
    ));
    assert!(matches!(
        dataset.distribution("japan"),
        Err(Error::UnknownCountry(_))
    ));

    // A failed query leaves the dataset usable.
    assert_eq!(dataset.top_k("INTJ", 1).unwrap().entries[0].country, "Japan");
}

#[test]
fn loader_caches_by_source() {
    let loader = DatasetLoader::default();
    let first = loader.load(SAMPLE).unwrap();
    let second = loader.load(SAMPLE).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn loader_reports_missing_source_and_schema_errors() -> Result<(), Box<dyn std::error::Error>> {
    let loader = DatasetLoader::default();
    assert!(matches!(
        loader.load("no/such/file.csv"),
        Err(Error::DataLoad { .. })
    ));

    let mut no_country = NamedTempFile::new()?;
    writeln!(no_country, "Nation,INFJ")?;
    writeln!(no_country, "Japan,1.0")?;
    assert!(matches!(
        loader.load(no_country.path()),
        Err(Error::Schema(_))
    ));
    Ok(())
}

#[test]
fn sample_has_no_quality_warnings() {
    let dataset = sample();
    assert!(dataset.warnings().is_empty());
    assert!(dataset.inspect(1e-6).is_empty());
}

#[test]
fn off_sum_rows_load_with_a_warning() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "Country,INFJ,INTJ")?;
    writeln!(file, "Japan,0.5,0.4")?;
    let dataset = load(file.path())?;
    let deviations = dataset.row_sum_deviations(0.005);
    assert_eq!(deviations.len(), 1);
    assert!(matches!(
        &deviations[0],
        DataQualityWarning::RowSumDeviation { country, sum }
            if country == "Japan" && (sum - 0.9).abs() < 1e-12
    ));
    assert_eq!(dataset.top_k("INFJ", 1)?.entries[0].value, 0.5);
    Ok(())
}
