//! Defines the learned representation of the decision tree.
use crate::Sample;


use super::train_node::TrainNode;


use serde::{Serialize, Deserialize};

use std::rc::Rc;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has at least two children.
    Branch(BranchNode),


    /// A node that has no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// A branch node keeps its own majority prediction:
/// classification stops here whenever a row carries a code
/// with no matching edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) attribute: usize,
    pub(super) prediction: i64,
    pub(super) edges: Vec<Edge>,
}


/// An outgoing edge of a branch node.
/// `value` is the attribute code that routes rows into `node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub(super) value: usize,
    pub(super) node: Node,
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) prediction: i64,
}


impl Node {
    /// The majority class of the training rows that reached this node.
    pub fn prediction(&self) -> i64 {
        match self {
            Self::Branch(node) => node.prediction,
            Self::Leaf(node) => node.prediction,
        }
    }


    /// The attribute index this node splits on.
    /// Returns `None` for leaves.
    pub fn split_attribute(&self) -> Option<usize> {
        match self {
            Self::Branch(node) => Some(node.attribute),
            Self::Leaf(_) => None,
        }
    }


    /// The outgoing edges of this node.
    /// Leaves have none.
    pub fn edges(&self) -> &[Edge] {
        match self {
            Self::Branch(node) => &node.edges[..],
            Self::Leaf(_) => &[],
        }
    }


    /// Returns `true` if this node has no child.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// The number of edges on the longest downward path
    /// starting at this node.
    pub(super) fn height(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(node) => {
                1 + node.edges.iter()
                    .map(|edge| edge.node.height())
                    .max()
                    .unwrap_or(0)
            },
        }
    }
}


impl Edge {
    /// The attribute code that routes rows into the child.
    pub fn value(&self) -> usize {
        self.value
    }


    /// The child node this edge leads to.
    pub fn node(&self) -> &Node {
        &self.node
    }
}


impl From<TrainNode> for Node {
    #[inline]
    fn from(train_node: TrainNode) -> Self {
        if train_node.children.is_empty() {
            let leaf = LeafNode { prediction: train_node.prediction, };
            return Node::Leaf(leaf);
        }

        let attribute = train_node.attribute
            .expect("A node with children has no split attribute");

        let edges = train_node.children
            .into_iter()
            .map(|(value, child)| {
                let child = match Rc::try_unwrap(child) {
                    Ok(c) => c.into_inner().into(),
                    Err(_) => panic!("Strong count is greater than 1"),
                };
                Edge { value, node: child, }
            })
            .collect::<Vec<_>>();

        let branch = BranchNode {
            attribute,
            prediction: train_node.prediction,
            edges,
        };
        Node::Branch(branch)
    }
}


impl Node {
    pub(super) fn to_dot_info(&self, sample: &Sample, id: usize)
        -> (Vec<String>, usize)
    {
        match self {
            Node::Branch(b) => {
                let feat = sample.features()[b.attribute].name();
                let mut info = vec![
                    format!("\tnode_{id} [ label = \"{feat} = ?\" ];\n")
                ];

                let mut next_id = id + 1;
                for edge in b.edges.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) =
                        edge.node.to_dot_info(sample, child_id);
                    info.append(&mut child_info);

                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{v}\" ];\n",
                        v = edge.value
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = l.prediction
                );

                (vec![info], id + 1)
            }
        }
    }
}
