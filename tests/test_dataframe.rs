use mbtiframes::dataframe::{CsvReadOptions, DataFrame, Series};

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/countries_sample.csv");

#[test]
fn test_dataframe_head() {
    let df = DataFrame::from_csv(SAMPLE).unwrap();
    let head = df.head(1);
    assert_eq!(head.len(), 1);
    assert_eq!(head.shape(), (1, 17));
}

#[test]
fn test_sample_columns_are_inferred() {
    let opts = CsvReadOptions::default().with_text_column("Country");
    let df = DataFrame::read_csv(SAMPLE, &opts).unwrap();

    assert_eq!(df.shape(), (8, 17));
    match df.get_column("Country") {
        Some(Series::Utf8(names)) => assert_eq!(names[0], "Korea, South"),
        other => panic!("Country should be text, got {:?}", other),
    }
    assert!(df
        .columns
        .iter()
        .skip(1)
        .all(|c| matches!(df.get_column(c), Some(Series::Float64(_)))));
}

#[test]
fn test_sort_keeps_row_order_among_ties() {
    let df = DataFrame::from_csv(SAMPLE).unwrap();
    let sorted = df.sort_by("INTJ", false).unwrap();
    let names = sorted.get_column("Country").and_then(Series::as_utf8).unwrap();
    assert_eq!(&names[..3], ["Japan", "Germany", "France"]);
}

#[test]
fn test_missing_file_is_a_load_error() {
    let err = DataFrame::from_csv("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, mbtiframes::Error::DataLoad { .. }));
}
