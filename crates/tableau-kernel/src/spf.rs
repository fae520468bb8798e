//! A signed, prefixed formula: the unit the tableau reasons over.

use tableau_base::Formula;

use crate::sign::Sign;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spf<'a> {
    pub sign: Sign,
    pub prefix: String,
    pub formula: &'a Formula<'a>,
}

impl<'a> Spf<'a> {
    pub fn new(sign: Sign, prefix: impl Into<String>, formula: &'a Formula<'a>) -> Self {
        Spf {
            sign,
            prefix: prefix.into(),
            formula,
        }
    }
}
