//! The modal-formula AST.
//!
//! Nodes are allocated out of a [`FormulaArena`] and borrow each other for
//! their lifetime, so a whole formula (and every subformula the tableau
//! ever needs to point at) is one cheap, freely-shared, immutable tree.

use crate::intern::{Interner, Symbol};
use bumpalo::Bump;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;

/// A modal propositional formula.
///
/// `And`/`Or` are n-ary to mirror how a parser naturally groups chained
/// conjunctions/disjunctions; this crate's own parser only ever builds the
/// binary (`n = 2`) case, but the rule engine treats any arity uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula<'a> {
    Atom(Symbol),
    Not(&'a Formula<'a>),
    And(&'a [&'a Formula<'a>]),
    Or(&'a [&'a Formula<'a>]),
    Implies(&'a Formula<'a>, &'a Formula<'a>),
    Box(&'a Formula<'a>),
    Diamond(&'a Formula<'a>),
}

impl<'a> Formula<'a> {
    /// Structural equality. `derive(PartialEq)` already does this (refs and
    /// slices compare by value, not by address); this just gives it a name
    /// callers can reach for explicitly.
    pub fn equals(&self, other: &Formula<'a>) -> bool {
        self == other
    }

    fn collect_atoms(&self, out: &mut BTreeSet<Symbol>) {
        match self {
            Formula::Atom(sym) => {
                out.insert(*sym);
            }
            Formula::Not(f) | Formula::Box(f) | Formula::Diamond(f) => f.collect_atoms(out),
            Formula::And(items) | Formula::Or(items) => {
                for item in items.iter() {
                    item.collect_atoms(out);
                }
            }
            Formula::Implies(l, r) => {
                l.collect_atoms(out);
                r.collect_atoms(out);
            }
        }
    }

    /// The set of atom names occurring anywhere in this formula.
    pub fn atoms(&self, interner: &Interner) -> BTreeSet<String> {
        let mut symbols = BTreeSet::new();
        self.collect_atoms(&mut symbols);
        symbols
            .into_iter()
            .map(|s| interner.resolve(s).to_string())
            .collect()
    }

    fn precedence(&self) -> u8 {
        match self {
            Formula::Atom(_) => 5,
            Formula::Not(_) | Formula::Box(_) | Formula::Diamond(_) => 4,
            Formula::And(_) => 3,
            Formula::Or(_) => 2,
            Formula::Implies(_, _) => 1,
        }
    }

    fn render(&self, interner: &Interner, required: u8, out: &mut String) {
        let own = self.precedence();
        let needs_parens = own < required;
        if needs_parens {
            out.push('(');
        }
        match self {
            Formula::Atom(sym) => out.push_str(interner.resolve(*sym)),
            Formula::Not(inner) => {
                out.push('~');
                inner.render(interner, 4, out);
            }
            Formula::Box(inner) => {
                out.push_str("[]");
                inner.render(interner, 4, out);
            }
            Formula::Diamond(inner) => {
                out.push_str("<>");
                inner.render(interner, 4, out);
            }
            Formula::And(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" & ");
                    }
                    item.render(interner, 3, out);
                }
            }
            Formula::Or(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" | ");
                    }
                    item.render(interner, 2, out);
                }
            }
            Formula::Implies(l, r) => {
                l.render(interner, 2, out);
                out.push_str(" -> ");
                r.render(interner, 1, out);
            }
        }
        if needs_parens {
            out.push(')');
        }
    }
}

/// Pairs a formula with the interner needed to resolve its atom symbols,
/// since a bare `Symbol` cannot render itself.
pub struct FormulaView<'a, 'b> {
    pub formula: &'a Formula<'a>,
    pub interner: &'b Interner,
}

impl<'a, 'b> fmt::Display for FormulaView<'a, 'b> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.formula.render(self.interner, 1, &mut out);
        f.write_str(&out)
    }
}

/// Owns the arena and interner a parsed formula (and all of its
/// subformulas) live in.
///
/// The tableau never allocates new `Formula` nodes of its own — expansion
/// only ever produces references into subterms that already exist — so one
/// `FormulaArena` built at parse time safely backs an entire decision call.
pub struct FormulaArena {
    bump: Bump,
    interner: RefCell<Interner>,
}

impl FormulaArena {
    pub fn new() -> Self {
        FormulaArena {
            bump: Bump::new(),
            interner: RefCell::new(Interner::new()),
        }
    }

    pub fn intern(&self, name: &str) -> Symbol {
        self.interner.borrow_mut().intern(name)
    }

    /// Resolve a symbol to its source name. Panics if `sym` was not
    /// interned through this arena.
    pub fn resolve(&self, sym: Symbol) -> String {
        self.interner.borrow().resolve(sym).to_string()
    }

    pub fn with_interner<R>(&self, f: impl FnOnce(&Interner) -> R) -> R {
        f(&self.interner.borrow())
    }

    pub fn atom<'a>(&'a self, name: &str) -> &'a Formula<'a> {
        let sym = self.intern(name);
        self.bump.alloc(Formula::Atom(sym))
    }

    pub fn not<'a>(&'a self, inner: &'a Formula<'a>) -> &'a Formula<'a> {
        self.bump.alloc(Formula::Not(inner))
    }

    pub fn necessity<'a>(&'a self, inner: &'a Formula<'a>) -> &'a Formula<'a> {
        self.bump.alloc(Formula::Box(inner))
    }

    pub fn possibility<'a>(&'a self, inner: &'a Formula<'a>) -> &'a Formula<'a> {
        self.bump.alloc(Formula::Diamond(inner))
    }

    pub fn implies<'a>(&'a self, l: &'a Formula<'a>, r: &'a Formula<'a>) -> &'a Formula<'a> {
        self.bump.alloc(Formula::Implies(l, r))
    }

    pub fn and<'a>(&'a self, parts: Vec<&'a Formula<'a>>) -> &'a Formula<'a> {
        debug_assert!(parts.len() >= 2, "And requires at least 2 operands");
        let slice = self.bump.alloc_slice_fill_iter(parts);
        self.bump.alloc(Formula::And(slice))
    }

    pub fn or<'a>(&'a self, parts: Vec<&'a Formula<'a>>) -> &'a Formula<'a> {
        debug_assert!(parts.len() >= 2, "Or requires at least 2 operands");
        let slice = self.bump.alloc_slice_fill_iter(parts);
        self.bump.alloc(Formula::Or(slice))
    }
}

impl Default for FormulaArena {
    fn default() -> Self {
        Self::new()
    }
}
