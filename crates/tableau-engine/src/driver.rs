//! The expansion driver: repeatedly picks the highest-priority unexpanded
//! `Spf` on each open branch, applies the rule table, and forks or extends
//! the branch accordingly, until every branch is closed or saturated.

use log::{debug, trace, warn};

use tableau_base::Interner;
use tableau_kernel::{is_closed, Branch, PrefixStore, Spf};

use crate::rules::{apply, classify, RuleKind, RuleOutput};
use crate::proof_tree::ProofTree;

#[derive(Debug, Clone, Copy)]
pub struct ExpansionConfig {
    pub max_expansions: usize,
    pub max_prefix_length: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        ExpansionConfig {
            max_expansions: 100_000,
            max_prefix_length: 64,
        }
    }
}

pub enum ExpansionOutcome<'a> {
    Saturated { open_branches: Vec<Branch<'a>> },
    Inconclusive { reason: String },
}

fn spf_label(spf: &Spf<'_>, interner: &Interner) -> String {
    let formula = tableau_base::FormulaView {
        formula: spf.formula,
        interner,
    };
    format!("{} {} {}", spf.sign, spf.prefix, formula)
}

fn prefix_depth(prefix: &str) -> usize {
    prefix.split('.').count()
}

/// Which `Spf`, if any, the priority order picks next on this branch.
/// δ/ν rules that reach for worlds read `prefixes` directly rather than
/// storing their own copy, since the branch may have minted new worlds
/// since the last time it was scanned.
enum Selection {
    Alpha(usize),
    Delta(usize),
    Beta(usize),
    Nu(usize, Vec<String>),
}

fn select(branch: &Branch<'_>, prefixes: &PrefixStore) -> Option<Selection> {
    let mut alpha_candidate = None;
    let mut delta_candidate = None;
    let mut beta_candidate = None;
    let mut nu_candidate = None;

    for (idx, spf) in branch.spfs.iter().enumerate() {
        if branch.is_expanded(idx) {
            continue;
        }
        match classify(spf) {
            RuleKind::Literal => continue,
            RuleKind::Alpha if alpha_candidate.is_none() => alpha_candidate = Some(idx),
            RuleKind::Delta if delta_candidate.is_none() => delta_candidate = Some(idx),
            RuleKind::Beta if beta_candidate.is_none() => beta_candidate = Some(idx),
            RuleKind::Nu if nu_candidate.is_none() => {
                let missing: Vec<String> = prefixes
                    .successors(&spf.prefix)
                    .iter()
                    .filter(|w2| !branch.nu_discharged_at(idx, w2))
                    .cloned()
                    .collect();
                if !missing.is_empty() {
                    nu_candidate = Some((idx, missing));
                }
            }
            _ => {}
        }
    }

    if let Some(idx) = alpha_candidate {
        return Some(Selection::Alpha(idx));
    }
    if let Some(idx) = delta_candidate {
        return Some(Selection::Delta(idx));
    }
    if let Some(idx) = beta_candidate {
        return Some(Selection::Beta(idx));
    }
    if let Some((idx, missing)) = nu_candidate {
        return Some(Selection::Nu(idx, missing));
    }
    None
}

/// Run the driver on a single seeded `Spf`, returning every open, saturated
/// branch plus the recorded proof tree, or `Inconclusive` if the depth
/// guard trips.
pub fn run<'a>(
    root: Spf<'a>,
    prefixes: PrefixStore,
    interner: &Interner,
    config: &ExpansionConfig,
) -> (ExpansionOutcome<'a>, ProofTree) {
    let root_label = spf_label(&root, interner);
    let mut tree = ProofTree::new(root_label);
    let root_branch = Branch::new(root, prefixes);

    let mut worklist: Vec<(Branch<'a>, u64)> = vec![(root_branch, tree.root)];
    let mut open_branches = Vec::new();
    let mut expansions = 0usize;

    while let Some((mut branch, node)) = worklist.pop() {
        if is_closed(&branch) {
            tree.annotate(node, " [closed]");
            debug!("branch closed at node {node}");
            continue;
        }

        let Some(selection) = select(&branch, &branch.prefixes) else {
            tree.annotate(node, " [open, saturated]");
            debug!("branch saturated and open at node {node}");
            open_branches.push(branch);
            continue;
        };

        expansions += 1;
        if expansions > config.max_expansions {
            warn!("expansion driver exceeded max_expansions={}", config.max_expansions);
            return (
                ExpansionOutcome::Inconclusive {
                    reason: format!(
                        "exceeded max_expansions ({}) without saturating every branch",
                        config.max_expansions
                    ),
                },
                tree,
            );
        }

        match selection {
            Selection::Alpha(idx) => {
                let label = spf_label(&branch.spfs[idx], interner);
                trace!("alpha rule firing on {label}");
                if let RuleOutput::Alpha(new_spfs) = apply(&branch.spfs[idx], &mut branch.prefixes) {
                    branch.mark_expanded(idx);
                    for spf in new_spfs {
                        branch.push(spf);
                    }
                    let child = tree.add_child(node, label);
                    worklist.push((branch, child));
                } else {
                    unreachable!("classify/apply disagree on alpha");
                }
            }
            Selection::Delta(idx) => {
                let label = spf_label(&branch.spfs[idx], interner);
                trace!("delta rule firing on {label}");
                if let RuleOutput::Delta(new_spf) = apply(&branch.spfs[idx], &mut branch.prefixes) {
                    branch.mark_expanded(idx);
                    if prefix_depth(&new_spf.prefix) > config.max_prefix_length {
                        warn!(
                            "expansion driver exceeded max_prefix_length={}",
                            config.max_prefix_length
                        );
                        return (
                            ExpansionOutcome::Inconclusive {
                                reason: format!(
                                    "exceeded max_prefix_length ({}) without saturating every branch",
                                    config.max_prefix_length
                                ),
                            },
                            tree,
                        );
                    }
                    branch.push(new_spf);
                    let child = tree.add_child(node, label);
                    worklist.push((branch, child));
                } else {
                    unreachable!("classify/apply disagree on delta");
                }
            }
            Selection::Beta(idx) => {
                let label = spf_label(&branch.spfs[idx], interner);
                trace!("beta rule firing on {label}");
                if let RuleOutput::Beta(fragments) = apply(&branch.spfs[idx], &mut branch.prefixes) {
                    branch.mark_expanded(idx);
                    debug!("branch forking into {} fragments at node {node}", fragments.len());
                    let child = tree.add_child(node, label);
                    for fragment in fragments {
                        let mut child_branch = branch.clone();
                        for spf in fragment {
                            child_branch.push(spf);
                        }
                        let grandchild = tree.add_child(child, "fragment".to_string());
                        worklist.push((child_branch, grandchild));
                    }
                } else {
                    unreachable!("classify/apply disagree on beta");
                }
            }
            Selection::Nu(idx, missing) => {
                let spf = branch.spfs[idx].clone();
                let label = spf_label(&spf, interner);
                trace!("nu rule firing on {label} over {} world(s)", missing.len());
                if let RuleOutput::Nu { sign, inner } = apply(&spf, &mut branch.prefixes) {
                    for w2 in &missing {
                        branch.push(Spf::new(sign, w2.clone(), inner));
                        branch.mark_nu_discharged(idx, w2);
                    }
                    let child = tree.add_child(node, label);
                    worklist.push((branch, child));
                } else {
                    unreachable!("classify/apply disagree on nu");
                }
            }
        }
    }

    (ExpansionOutcome::Saturated { open_branches }, tree)
}
