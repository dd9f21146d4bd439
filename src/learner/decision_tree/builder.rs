use super::criterion::Criterion;
use super::chi_square::SignificanceLevel;
use super::decision_tree_algorithm::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing
/// `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minilearn::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .criterion(Criterion::Entropy)
///     .significance_level(SignificanceLevel::P05)
///     .build();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeBuilder {
    criterion: Criterion,
    significance_level: SignificanceLevel,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// criterion: Criterion::Entropy,
    /// significance_level: SignificanceLevel::P100,
    /// ```
    pub fn new() -> Self {
        let criterion = Criterion::Entropy;
        let significance_level = SignificanceLevel::P100;

        Self { criterion, significance_level, }
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Entropy`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Set the significance level of the chi-square test
    /// applied to every candidate split.
    /// Default value is `SignificanceLevel::P100`,
    /// which disables pruning.
    #[inline]
    pub fn significance_level(mut self, level: SignificanceLevel) -> Self {
        self.significance_level = level;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(
            self.criterion, self.significance_level,
        )
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
