//! The proof tree recorded as the expansion driver works: one node per
//! branch state, with edges to the state(s) produced by the next
//! expansion step.

#[derive(Debug, Clone)]
pub struct ProofNode {
    pub id: u64,
    pub label: String,
    pub children: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct ProofTree {
    pub nodes: Vec<ProofNode>,
    pub root: u64,
}

impl ProofTree {
    pub fn new(root_label: String) -> Self {
        ProofTree {
            nodes: vec![ProofNode {
                id: 0,
                label: root_label,
                children: Vec::new(),
            }],
            root: 0,
        }
    }

    pub fn add_child(&mut self, parent: u64, label: String) -> u64 {
        let id = self.nodes.len() as u64;
        self.nodes.push(ProofNode {
            id,
            label,
            children: Vec::new(),
        });
        self.nodes[parent as usize].children.push(id);
        id
    }

    pub fn annotate(&mut self, node: u64, suffix: &str) {
        self.nodes[node as usize].label.push_str(suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_child_records_parent_edge() {
        let mut tree = ProofTree::new("root".to_string());
        let child = tree.add_child(tree.root, "child".to_string());
        assert_eq!(tree.nodes[0].children, vec![child]);
        assert_eq!(tree.nodes[child as usize].label, "child");
    }
}
