//! Defines the nodes used while growing the decision tree.
use std::rc::Rc;
use std::cell::RefCell;


/// A node under construction.
/// `TrainNode` owns the row indices of its subset;
/// once a split is accepted the rows move into the children
/// and the node keeps only the edges to them.
#[derive(Debug)]
pub(super) struct TrainNode {
    /// Rows of the training sample that reached this node.
    pub(super) rows: Vec<usize>,
    /// The majority class of `rows`.
    /// Initialized with the parent's majority as a placeholder
    /// and overwritten when this node is processed.
    pub(super) prediction: i64,
    /// The attribute this node splits on, once a split is accepted.
    pub(super) attribute: Option<usize>,
    /// Pairs of attribute code and the child that code routes to.
    pub(super) children: Vec<(usize, Rc<RefCell<TrainNode>>)>,
}


impl TrainNode {
    /// A fresh node holding `rows`.
    /// `prediction` carries the parent's majority until the node
    /// is dequeued and computes its own.
    pub(super) fn new(rows: Vec<usize>, prediction: i64)
        -> Rc<RefCell<Self>>
    {
        let node = Self {
            rows,
            prediction,
            attribute: None,
            children: Vec::new(),
        };

        Rc::new(RefCell::new(node))
    }
}
