//! Defines the decision tree learner over categorical features.

mod builder;
mod criterion;
mod chi_square;
mod node;
mod train_node;
mod decision_tree_algorithm;
mod decision_tree_classifier;


pub use builder::DecisionTreeBuilder;
pub use criterion::Criterion;
pub use chi_square::SignificanceLevel;
pub use node::{
    Node,
    BranchNode,
    LeafNode,
    Edge,
};
pub use decision_tree_algorithm::DecisionTree;
pub use decision_tree_classifier::{
    DecisionTreeClassifier,
    TreeMetrics,
};
