use serde::Deserialize;

use crate::error::ModelError;

use super::regressor::{check_feature_names, check_row, Regressor};

/// How per-tree outputs are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Boosted ensembles: leaves are added on top of `base_score`.
    #[default]
    Sum,
    /// Random forests: leaves are averaged, then added to `base_score`.
    Mean,
}

/// A node in a flattened decision tree. Node 0 is the root.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A single decision tree stored as a node table.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Walks from the root to a leaf. Rows go left when
    /// `row[feature] <= threshold`.
    fn evaluate(&self, tree: usize, row: &[f64]) -> Result<f64, ModelError> {
        let mut idx = 0;

        // Children point forward, so a valid walk visits each node at most once.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(Node::Leaf { value }) => return Ok(*value),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = row
                        .get(*feature)
                        .ok_or(ModelError::BrokenTree { tree, node: idx })?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
                None => break,
            }
        }

        Err(ModelError::BrokenTree { tree, node: idx })
    }

    fn validate(&self, tree: usize, num_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(format!("tree {tree} has no nodes"));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Leaf { value } if !value.is_finite() => {
                    return Err(format!("tree {tree} node {i}: leaf value must be finite"));
                }
                Node::Leaf { .. } => {}
                Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= num_features {
                        return Err(format!(
                            "tree {tree} node {i}: feature {feature} out of range ({num_features} features)"
                        ));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(format!(
                                "tree {tree} node {i}: child {child} must point forward inside the tree"
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Ensemble of decision trees (gradient boosting or random forest).
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsemble {
    feature_names: Vec<String>,
    #[serde(default)]
    base_score: f64,
    #[serde(default)]
    aggregation: Aggregation,
    trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Creates a validated ensemble.
    ///
    /// # Errors
    /// Returns a human-readable reason if any tree is malformed.
    pub fn new(
        feature_names: Vec<String>,
        base_score: f64,
        aggregation: Aggregation,
        trees: Vec<Tree>,
    ) -> Result<Self, String> {
        let model = Self {
            feature_names,
            base_score,
            aggregation,
            trees,
        };
        model.validate()?;
        Ok(model)
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        check_feature_names(&self.feature_names)?;

        if self.trees.is_empty() {
            return Err("ensemble must have at least one tree".into());
        }

        self.trees
            .iter()
            .enumerate()
            .try_for_each(|(i, t)| t.validate(i, self.feature_names.len()))
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for TreeEnsemble {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &[f64]) -> Result<f64, ModelError> {
        check_row(row, self.feature_names.len())?;

        let mut total = 0.0;
        for (i, tree) in self.trees.iter().enumerate() {
            total += tree.evaluate(i, row)?;
        }

        let combined = match self.aggregation {
            Aggregation::Sum => total,
            Aggregation::Mean => total / self.trees.len() as f64,
        };

        Ok(self.base_score + combined)
    }
}
