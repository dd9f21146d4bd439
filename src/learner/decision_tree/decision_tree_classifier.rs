//! Defines the decision tree classifier.
use crate::{Classifier, Sample};
use crate::common::checker;


use super::node::Node;
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Aggregate quality measures of a decision tree over a sample,
/// computed by [`DecisionTreeClassifier::evaluate`] in a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeMetrics {
    /// Mean absolute difference between prediction and label.
    pub average_error: f64,
    /// Mean depth at which classification stopped.
    pub average_depth: f64,
}


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        self.classify(sample, row).0
    }
}


impl DecisionTreeClassifier {
    /// The root node of the learned tree.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Classify the i'th row of `sample`.
    /// Returns the predicted label together with the depth
    /// at which classification stopped.
    ///
    /// The walk descends one edge per matched attribute code.
    /// A code with no matching edge stops the walk and yields the
    /// current node's majority prediction, so rows may carry codes
    /// never seen during training.
    pub fn classify(&self, sample: &Sample, row: usize) -> (i64, usize) {
        let mut node = &self.root;
        let mut depth = 0;

        while let Node::Branch(branch) = node {
            let code = sample.features()[branch.attribute][row];
            match branch.edges.iter().find(|e| e.value as f64 == code) {
                Some(edge) => {
                    node = &edge.node;
                    depth += 1;
                },
                None => return (branch.prediction, depth),
            }
        }

        (node.prediction(), depth)
    }


    /// Evaluate the classifier over `sample` in one pass,
    /// returning the mean absolute error and the mean stopping depth.
    /// All accumulators are local to this call.
    pub fn evaluate(&self, sample: &Sample) -> TreeMetrics {
        checker::check_sample(sample);
        checker::check_target_specified(sample);

        let target = sample.target();
        let n_sample = sample.shape().0;

        let mut error_sum = 0.0;
        let mut depth_sum = 0.0;
        for row in 0..n_sample {
            let (label, depth) = self.classify(sample, row);
            error_sum += (label as f64 - target[row]).abs();
            depth_sum += depth as f64;
        }

        let n_sample = n_sample as f64;
        TreeMetrics {
            average_error: error_sum / n_sample,
            average_depth: depth_sum / n_sample,
        }
    }


    /// Mean absolute difference between prediction and label
    /// over `sample`.
    pub fn average_error(&self, sample: &Sample) -> f64 {
        self.evaluate(sample).average_error
    }


    /// Mean depth at which classification stopped over `sample`.
    pub fn average_depth(&self, sample: &Sample) -> f64 {
        self.evaluate(sample).average_depth
    }


    /// The number of edges on the longest root-to-leaf path.
    /// A tree whose root is a leaf has height `0`.
    pub fn height(&self) -> usize {
        self.root.height()
    }


    /// Write the current decision tree to dot file.
    /// Branch nodes are labeled with the feature names of `sample`,
    /// edges with the attribute code they match.
    #[inline]
    pub fn to_dot_file<P>(&self, sample: &Sample, path: P)
        -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {")?;


        let info = self.root.to_dot_info(sample, 0).0;
        info.into_iter()
            .for_each(|row| {
                f.write_all(row.as_bytes()).unwrap();
            });

        f.write_all(b"}")?;

        Ok(())
    }
}
