use minilearn::prelude::*;
use minilearn::CrossValidation;


use polars::prelude::*;

use std::env;


#[test]
fn reads_csv_with_header_and_target() {
    let mut path = env::current_dir().unwrap();
    path.push("tests/toy_train.csv");

    let sample = SampleReader::new()
        .file(path)
        .has_header(true)
        .target_feature("class")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (6, 2));
    assert_eq!(sample.target(), &[0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);

    let outlook = &sample["outlook"];
    assert_eq!(outlook.name(), "outlook");
    assert_eq!(outlook.len(), 6);
    assert_eq!(outlook[4], 2.0);

    let (x, y) = sample.at(2);
    assert_eq!(x, vec![1.0, 0.0]);
    assert_eq!(y, 1.0);
}


#[test]
fn builds_a_sample_from_a_dataframe() {
    let x1 = Series::new("x1", &[1.0, 2.0, 3.0]);
    let x2 = Series::new("x2", &[4.0, 5.0, 6.0]);
    let y = Series::new("y", &[0.0, 1.0, 0.0]);
    let df = DataFrame::new(vec![x1, x2]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    assert_eq!(sample.shape(), (3, 2));
    assert_eq!(sample.target(), &[0.0, 1.0, 0.0]);
    assert_eq!(sample.at(1), (vec![2.0, 5.0], 1.0));
    assert_eq!(sample["x2"][0], 4.0);
}


#[test]
fn split_partitions_rows_for_cross_validation() {
    let x = Series::new("x", (0..10).map(|i| i as f64).collect::<Vec<_>>());
    let y = Series::new("y", (0..10).map(|i| i as f64 * 10.0).collect::<Vec<_>>());
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let ix = (0..10).collect::<Vec<_>>();
    let (train, test) = sample.split(&ix, 2, 5);

    assert_eq!(train.shape(), (7, 1));
    assert_eq!(test.shape(), (3, 1));

    // The test fold holds rows 2, 3, and 4.
    assert_eq!(test.at(0), (vec![2.0], 20.0));
    assert_eq!(test.at(2), (vec![4.0], 40.0));

    // The training fold holds the remaining rows in order.
    assert_eq!(train.at(0), (vec![0.0], 0.0));
    assert_eq!(train.at(2), (vec![5.0], 50.0));
    assert_eq!(train.at(6), (vec![9.0], 90.0));
}


#[test]
fn cross_validation_covers_every_row_once() {
    let x = Series::new("x", (0..10).map(|i| i as f64).collect::<Vec<_>>());
    let y = Series::new("y", vec![0.0; 10]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let cv = CrossValidation::new(&sample)
        .n_folds(5)
        .seed(7)
        .shuffle();

    let mut covered = Vec::new();
    for (train, test) in cv {
        assert_eq!(train.shape(), (8, 1));
        assert_eq!(test.shape(), (2, 1));
        covered.extend(test["x"].iter().copied());
    }

    covered.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let all = (0..10).map(|i| i as f64).collect::<Vec<_>>();
    assert_eq!(covered, all);
}


#[test]
fn standardizer_centers_and_scales() {
    let x = Series::new("x", &[0.0, 2.0, 4.0, 6.0]);
    let c = Series::new("c", &[5.0, 5.0, 5.0, 5.0]);
    let y = Series::new("y", &[1.0, 2.0, 3.0, 4.0]);
    let df = DataFrame::new(vec![x, c]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let scaler = Standardizer::fit(&sample);
    assert_eq!(scaler.mean(), &[3.0, 5.0]);
    assert!((scaler.stddev()[0] - 5f64.sqrt()).abs() < 1e-12);
    assert_eq!(scaler.stddev()[1], 0.0);

    let scaled = scaler.transform(&sample);

    let mean = scaled["x"].iter().sum::<f64>() / 4.0;
    let variance = scaled["x"].iter()
        .map(|z| (z - mean).powi(2))
        .sum::<f64>()
        / 4.0;
    assert!(mean.abs() < 1e-12);
    assert!((variance - 1.0).abs() < 1e-12);

    // A constant feature maps to zero everywhere.
    assert!(scaled["c"].iter().all(|&z| z == 0.0));

    // The target passes through untouched.
    assert_eq!(scaled.target(), sample.target());
}


#[test]
fn fit_transform_matches_fit_then_transform() {
    let x = Series::new("x", &[1.0, 3.0, 5.0]);
    let y = Series::new("y", &[0.0, 0.0, 0.0]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let two_step = Standardizer::fit(&sample).transform(&sample);
    let one_step = Standardizer::fit_transform(&sample);

    let a = two_step["x"].iter().copied().collect::<Vec<_>>();
    let b = one_step["x"].iter().copied().collect::<Vec<_>>();
    assert_eq!(a, b);
}
