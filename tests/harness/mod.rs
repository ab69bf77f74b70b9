use std::{fs, io::Write, path::Path};

use rand::{rngs::StdRng, SeedableRng};
use treebench::{
    config::ExperimentConfig,
    dataset::load_records,
    harness::{run_experiments, run_trial, time_insert, time_search, TrialResult},
    record::Record,
    report::{CsvReporter, CSV_HEADER},
    set::SequentialSet,
    Error,
};
use treebench::{avltree::AVLTree, bst::BST};

const DATASET_HEADER: &str =
    "id,original_title,title,lang,overview,tagline,release,poster,popularity,votes,vote_average";

fn write_dataset(path: &Path, titles: &[(&str, &str)]) {
    let mut file = fs::File::create(path).unwrap();
    writeln!(file, "{}", DATASET_HEADER).unwrap();

    for (i, (title, rating)) in titles.iter().enumerate() {
        writeln!(
            file,
            "{},orig,{},en,overview,tagline,2020-01-01,poster.jpg,1.0,10,{}",
            i, title, rating
        )
        .unwrap();
    }
}

fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record::new(format!("movie {:05}", i), (i % 10) as f64))
        .collect()
}

#[test]
fn test_csv_single_trial() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("movies.csv");
    let output = dir.path().join("output.txt");
    write_dataset(&input, &[("It Follows", "6.9"), ("Get Out", "7.6"), ("Nope", "6.8")]);

    let config = ExperimentConfig {
        sizes: vec![3],
        output: output.clone(),
        seed: Some(3),
    };
    let records = load_records(&input, config.max_size()).unwrap();
    let mut reporter = CsvReporter::new(&config.output);
    run_experiments(&config, "movies.csv", &records, &mut reporter).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], CSV_HEADER.join(","));

    let fields: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(fields.len(), 10);
    assert_eq!(fields[0], "movies.csv");
    assert_eq!(fields[1], "3");
    for field in &fields[2..] {
        assert!(field.parse::<u64>().is_ok(), "{} is not a timing", field);
    }
}

#[test]
fn test_csv_header_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let records = records(20);

    let config = ExperimentConfig {
        sizes: vec![5, 10, 20],
        output: output.clone(),
        seed: None,
    };

    // a second run appends to the first one's file
    run_experiments(&config, "a.csv", &records, &mut CsvReporter::new(&output)).unwrap();
    run_experiments(&config, "b.csv", &records, &mut CsvReporter::new(&output)).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines.iter().filter(|line| line.starts_with("dataset,")).count(), 1);

    let sizes: Vec<&str> = lines[1..]
        .iter()
        .map(|line| line.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(sizes, vec!["5", "10", "20", "5", "10", "20"]);
    assert!(lines[4].starts_with("b.csv,"));
}

#[test]
fn test_unavailable_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("output.txt");

    let config = ExperimentConfig {
        sizes: vec![3],
        output: output.clone(),
        seed: Some(0),
    };
    let result = run_experiments(&config, "x.csv", &records(3), &mut CsvReporter::new(&output));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        load_records(dir.path().join("nope.csv"), 10),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_results_follow_trial_order() {
    let config = ExperimentConfig {
        sizes: vec![100, 10, 50],
        seed: Some(11),
        ..ExperimentConfig::default()
    };
    let mut results: Vec<TrialResult> = Vec::new();

    run_experiments(&config, "d.csv", &records(100), &mut results).unwrap();

    assert_eq!(results.iter().map(|r| r.n).collect::<Vec<_>>(), vec![100, 10, 50]);
}

#[test]
fn test_trial_skips_malformed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("movies.csv");
    write_dataset(&input, &[("", "5.0"), ("Midsommar", "7.1"), ("Smile", "x")]);

    let records = load_records(&input, 3).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].rating(), 0.0);

    let result = run_trial("movies.csv", &records, 3, &mut StdRng::seed_from_u64(5));
    assert_eq!(result.n, 2);
}

#[test]
fn test_timed_passes_fill_the_trees() {
    let items = records(300);

    let mut bst: BST<Record> = BST::new();
    let mut avl: AVLTree<Record> = AVLTree::new();
    let _ = time_insert(&mut bst, items.clone());
    let _ = time_insert(&mut avl, items.clone());

    assert_eq!(bst.len(), 300);
    assert_eq!(avl.len(), 300);
    assert_eq!(bst.get_height(), 300);
    assert!(avl.get_height() <= 12);

    let _ = time_search(&bst, &items);
    assert_eq!(bst.len(), 300);
}
