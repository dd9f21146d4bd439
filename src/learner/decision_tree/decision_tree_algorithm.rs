use crate::Sample;
use crate::common::checker;


use super::{
    node::Node,
    criterion::{ClassCounts, Criterion},
    chi_square::{self, SignificanceLevel},
    train_node::TrainNode,
    decision_tree_classifier::DecisionTreeClassifier,
};


use std::fmt;
use std::mem;
use std::rc::Rc;
use std::collections::VecDeque;


/// The Decision Tree algorithm.
/// Given a training sample with categorical features
/// and binary class labels,
/// [`DecisionTree`] grows a decision tree classifier
/// named [`DecisionTreeClassifier`]
/// under the specified parameters.
///
/// Growth proceeds over a FIFO worklist of open nodes.
/// A node becomes a leaf when its subset is monochromatic,
/// when no attribute improves the impurity,
/// or when the best split fails a chi-square significance test.
/// An accepted split creates one child per attribute code
/// that actually received rows.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::learner::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
///
/// // Grow a tree, discarding splits that fail
/// // a chi-square test at the 5% level.
/// let tree = DecisionTreeBuilder::new()
///     .criterion(Criterion::Entropy)
///     .significance_level(SignificanceLevel::P05)
///     .build();
///
/// let f = tree.fit(&sample);
///
/// let n_sample = sample.shape().0;
/// let predictions = f.predict_all(&sample);
///
/// let loss = sample.target()
///     .iter()
///     .zip(predictions)
///     .map(|(ty, py)| if *ty == py as f64 { 0f64 } else { 1f64 })
///     .sum::<f64>()
///     / n_sample as f64;
/// println!("loss (train) is: {loss}");
/// ```
pub struct DecisionTree {
    criterion: Criterion,
    significance_level: SignificanceLevel,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        criterion: Criterion,
        significance_level: SignificanceLevel,
    ) -> Self
    {
        Self { criterion, significance_level, }
    }


    /// Grow a decision tree classifier on `sample`.
    ///
    /// Growth is single-threaded: the attribute scan runs in index
    /// order and the first attribute reaching the best gain wins,
    /// so the learned tree is deterministic.
    ///
    /// # Panics
    /// Panics when `sample` is empty, has no features,
    /// carries labels other than `{0, 1}`,
    /// or carries feature values that are not
    /// non-negative integer codes.
    pub fn fit(&self, sample: &Sample) -> DecisionTreeClassifier {
        checker::check_sample(sample);
        checker::check_binary_target(sample);
        checker::check_categorical_features(sample);

        let target = sample.target();

        // The code range of each attribute, taken over the whole
        // training sample. Splits branch over the full range,
        // not just the codes observed in a node's subset.
        let cardinality = sample.features()
            .iter()
            .map(|feature| feature.cardinality())
            .collect::<Vec<_>>();

        let n_sample = sample.shape().0;
        let root = TrainNode::new((0..n_sample).collect(), 0);

        let mut worklist = VecDeque::from([Rc::clone(&root)]);
        while let Some(current) = worklist.pop_front() {
            let mut node = current.borrow_mut();

            if node.rows.is_empty() { continue; }

            let counts = ClassCounts::from_rows(&node.rows, target);
            node.prediction = counts.majority();

            if counts.is_pure() { continue; }

            // Scan the attributes in index order.
            // Only a strictly larger gain replaces the incumbent,
            // so the first attribute reaching the best gain wins.
            let parent_impurity = self.criterion.impurity(counts);
            let mut best_gain = 0.0;
            let mut best_attribute = 0;
            for (j, feature) in sample.features().iter().enumerate() {
                let gain = self.criterion.gain(
                    parent_impurity,
                    feature,
                    &node.rows,
                    target,
                    cardinality[j],
                );
                if gain > best_gain {
                    best_gain = gain;
                    best_attribute = j;
                }
            }

            if best_gain <= 0.0 { continue; }

            // Partition the rows by the chosen attribute.
            // Every code in `0..cardinality` gets a bucket;
            // codes absent from this subset leave theirs empty.
            let feature = &sample.features()[best_attribute];
            let rows = mem::take(&mut node.rows);
            let mut buckets = vec![Vec::new(); cardinality[best_attribute]];
            for i in rows {
                buckets[feature[i] as usize].push(i);
            }

            let child_counts = buckets.iter()
                .filter(|bucket| !bucket.is_empty())
                .map(|bucket| ClassCounts::from_rows(bucket, target))
                .collect::<Vec<_>>();
            debug_assert!(child_counts.len() >= 2);

            let statistic = chi_square::statistic(counts, &child_counts);
            if !self.significance_level.admits(child_counts.len(), statistic) {
                // The split is not significant.
                // The node stays a leaf with the majority
                // prediction computed above.
                continue;
            }

            node.attribute = Some(best_attribute);
            for (value, bucket) in buckets.into_iter().enumerate() {
                if bucket.is_empty() { continue; }

                let child = TrainNode::new(bucket, node.prediction);
                node.children.push((value, Rc::clone(&child)));
                worklist.push_back(child);
            }
        }

        let root = Node::from(
            Rc::try_unwrap(root)
                .expect("Root node has reference counter >= 1")
                .into_inner()
        );

        DecisionTreeClassifier::from(root)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Splitting criterion: {}\n\
            - Significance level: {}\n\
            ----------\
            ",
            self.criterion,
            self.significance_level,
        )
    }
}
