//! Tree-based regression learners
//!
//! - [`DecisionTree`] - CART regression tree with variance-reduction splits
//! - [`RandomForest`] - bagged ensemble of trees with seeded, reproducible fitting

pub mod decision_tree;
pub mod random_forest;

pub use decision_tree::{DecisionTree, TreeNode};
pub use random_forest::{MaxFeatures, RandomForest};
