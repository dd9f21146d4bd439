use minilearn::prelude::*;
use minilearn::Sample;


use polars::prelude::*;


// Toy example (categorical codes; `y` is the binary class).
// Attribute `a` determines the class, attribute `b` is noise.
//
//   a  b | y
//  ------+---
//   0  0 | 0
//   0  1 | 0
//   1  0 | 1
//   1  1 | 1
//
fn informative_and_noise() -> Sample {
    let a = Series::new("a", &[0.0, 0.0, 1.0, 1.0]);
    let b = Series::new("b", &[0.0, 1.0, 0.0, 1.0]);
    let y = Series::new("y", &[0.0, 0.0, 1.0, 1.0]);

    let df = DataFrame::new(vec![a, b]).unwrap();
    Sample::from_dataframe(df, y).unwrap()
}


#[test]
fn monochromatic_sample_grows_a_single_leaf() {
    let x = Series::new("x", &[0.0, 1.0, 0.0, 1.0]);
    let y = Series::new("y", &[1.0, 1.0, 1.0, 1.0]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let tree = DecisionTreeBuilder::new().build();
    let f = tree.fit(&sample);

    assert!(f.root().is_leaf());
    assert_eq!(f.height(), 0);
    assert_eq!(f.predict_all(&sample), vec![1, 1, 1, 1]);
    assert_eq!(f.classify(&sample, 0), (1, 0));
}


#[test]
fn evenly_split_classes_predict_zero() {
    // A constant attribute carries no gain,
    // so the root stays a leaf holding a 2-2 tie.
    let x = Series::new("x", &[0.0, 0.0, 0.0, 0.0]);
    let y = Series::new("y", &[0.0, 1.0, 1.0, 0.0]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let tree = DecisionTreeBuilder::new().build();
    let f = tree.fit(&sample);

    assert!(f.root().is_leaf());
    assert_eq!(f.predict(&sample, 0), 0);
}


#[test]
fn splits_on_the_informative_attribute() {
    let sample = informative_and_noise();

    let tree = DecisionTreeBuilder::new()
        .criterion(Criterion::Entropy)
        .build();
    let f = tree.fit(&sample);

    assert_eq!(f.root().split_attribute(), Some(0));
    assert_eq!(f.height(), 1);
    assert!(f.root().edges().iter().all(|e| e.node().is_leaf()));
    assert_eq!(f.predict_all(&sample), vec![0, 0, 1, 1]);

    // Row 2 is (a = 1, b = 0): one edge down, label 1.
    assert_eq!(f.classify(&sample, 2), (1, 1));

    let metrics = f.evaluate(&sample);
    assert_eq!(metrics.average_error, 0.0);
    assert_eq!(metrics.average_depth, 1.0);
}


#[test]
fn gini_criterion_grows_the_same_split() {
    let sample = informative_and_noise();

    let tree = DecisionTreeBuilder::new()
        .criterion(Criterion::Gini)
        .build();
    let f = tree.fit(&sample);

    assert_eq!(f.root().split_attribute(), Some(0));
    assert_eq!(f.predict_all(&sample), vec![0, 0, 1, 1]);
}


#[test]
fn first_attribute_wins_gain_ties() {
    // `a` and `b` carry identical values,
    // so their gains tie and the scan order decides.
    let a = Series::new("a", &[0.0, 0.0, 1.0, 1.0]);
    let b = Series::new("b", &[0.0, 0.0, 1.0, 1.0]);
    let y = Series::new("y", &[0.0, 0.0, 1.0, 1.0]);
    let df = DataFrame::new(vec![a, b]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let tree = DecisionTreeBuilder::new().build();
    let f = tree.fit(&sample);

    assert_eq!(f.root().split_attribute(), Some(0));
}


#[test]
fn unseen_code_falls_back_to_the_branch_prediction() {
    let a = Series::new("a", &[0.0, 0.0, 1.0, 1.0]);
    let y = Series::new("y", &[0.0, 0.0, 1.0, 1.0]);
    let df = DataFrame::new(vec![a]).unwrap();
    let train = Sample::from_dataframe(df, y).unwrap();

    let tree = DecisionTreeBuilder::new().build();
    let f = tree.fit(&train);
    assert_eq!(f.root().split_attribute(), Some(0));

    // Code `5` was never seen while training,
    // so classification stops at the root.
    // The root holds a 2-2 tie, hence class 0.
    let a = Series::new("a", &[5.0]);
    let y = Series::new("y", &[1.0]);
    let df = DataFrame::new(vec![a]).unwrap();
    let test = Sample::from_dataframe(df, y).unwrap();

    assert_eq!(f.classify(&test, 0), (0, 0));
}


// Chi-square fixture.  The split below groups the rows
// into three children with class counts
// (3, 1), (2, 2), and (1, 3),
// giving a statistic of 2.0 on two degrees of freedom.
//
//   v | y
//  ---+---
//   0 | 0 0 0 1
//   1 | 0 0 1 1
//   2 | 0 1 1 1
//
fn weak_three_way_split() -> Sample {
    let v = Series::new("v", &[
        0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0,
        2.0, 2.0, 2.0, 2.0,
    ]);
    let y = Series::new("y", &[
        0.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 1.0,
        0.0, 1.0, 1.0, 1.0,
    ]);

    let df = DataFrame::new(vec![v]).unwrap();
    Sample::from_dataframe(df, y).unwrap()
}


#[test]
fn chi_square_rejects_an_insignificant_split() {
    let sample = weak_three_way_split();

    // The critical value at p = 0.05 exceeds the statistic,
    // so the split is discarded and the tree is a bare leaf.
    let tree = DecisionTreeBuilder::new()
        .significance_level(SignificanceLevel::P05)
        .build();
    let f = tree.fit(&sample);

    assert!(f.root().is_leaf());
    assert_eq!(f.height(), 0);
    assert_eq!(f.predict(&sample, 0), 0);
}


#[test]
fn chi_square_admits_a_significant_split() {
    let sample = weak_three_way_split();

    for level in [SignificanceLevel::P100, SignificanceLevel::P25] {
        let tree = DecisionTreeBuilder::new()
            .significance_level(level)
            .build();
        let f = tree.fit(&sample);

        assert_eq!(f.height(), 1);
        assert_eq!(f.root().edges().len(), 3);

        // Children with counts (3, 1) and (2, 2) predict 0,
        // the (1, 3) child predicts 1.
        let expected = vec![0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1];
        assert_eq!(f.predict_all(&sample), expected);
    }
}


#[test]
fn strict_pruning_keeps_only_strong_splits() {
    let sample = weak_three_way_split();

    let tree = DecisionTreeBuilder::new()
        .significance_level(SignificanceLevel::P005)
        .build();
    let f = tree.fit(&sample);

    assert!(f.root().is_leaf());
}


#[test]
fn two_way_splits_bypass_the_critical_table() {
    // A two-way split has a single degree of freedom,
    // below the smallest row of the critical-value table,
    // so it passes even the strictest level.
    let a = Series::new("a", &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    let y = Series::new("y", &[0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
    let df = DataFrame::new(vec![a]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let tree = DecisionTreeBuilder::new()
        .significance_level(SignificanceLevel::P005)
        .build();
    let f = tree.fit(&sample);

    assert_eq!(f.root().split_attribute(), Some(0));
    assert_eq!(f.height(), 1);
    assert_eq!(f.predict_all(&sample), vec![0, 0, 0, 1, 1, 1]);

    let metrics = f.evaluate(&sample);
    assert!((metrics.average_error - 2.0 / 6.0).abs() < 1e-12);
    assert_eq!(metrics.average_depth, 1.0);
}


#[test]
fn no_single_attribute_gain_keeps_the_root_a_leaf() {
    // `y = a XOR b`: neither attribute helps on its own,
    // so the greedy growth stops immediately.
    let a = Series::new("a", &[0.0, 0.0, 1.0, 1.0]);
    let b = Series::new("b", &[0.0, 1.0, 0.0, 1.0]);
    let y = Series::new("y", &[0.0, 1.0, 1.0, 0.0]);
    let df = DataFrame::new(vec![a, b]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let tree = DecisionTreeBuilder::new().build();
    let f = tree.fit(&sample);

    assert!(f.root().is_leaf());
    assert_eq!(f.height(), 0);
}


#[test]
fn evaluate_averages_error_and_stopping_depth() {
    // The `a = 0` half needs a second split on `b`,
    // the `a = 1` half is already pure.
    //
    //   a  b | y
    //  ------+---
    //   0  0 | 0 0
    //   0  1 | 0 1
    //   1  0 | 1 1
    //   1  1 | 1 1
    //
    let a = Series::new("a", &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    let b = Series::new("b", &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
    let y = Series::new("y", &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    let df = DataFrame::new(vec![a, b]).unwrap();
    let sample = Sample::from_dataframe(df, y).unwrap();

    let tree = DecisionTreeBuilder::new().build();
    let f = tree.fit(&sample);

    assert_eq!(f.height(), 2);

    // Rows with `a = 0` descend two edges, the rest one.
    // Only the (0, 1, y = 1) row is misclassified.
    let metrics = f.evaluate(&sample);
    assert!((metrics.average_error - 1.0 / 8.0).abs() < 1e-12);
    assert!((metrics.average_depth - 1.5).abs() < 1e-12);

    assert_eq!(metrics.average_error, f.average_error(&sample));
    assert_eq!(metrics.average_depth, f.average_depth(&sample));
}
