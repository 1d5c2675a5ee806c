//! Fixed-order reduction of a flat `value op value op ...` list.
//!
//! Operators are resolved one symbol class at a time, in the configured pass
//! order, not by standard precedence. Within a pass the leftmost occurrence is
//! folded first, repeatedly, until that operator is gone.

use tracing::warn;

use crate::engine::format::parse_operand;
use crate::engine::token::{Operator, Token};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item {
    Value(f64),
    Op(Operator),
}

/// Flatten history into reduction items. The `Equals` sentinel is skipped.
pub fn items_from_tokens(tokens: &[Token]) -> Vec<Item> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Number(text) => Some(Item::Value(parse_operand(text))),
            Token::Operator(op) => Some(Item::Op(*op)),
            Token::Equals => None,
        })
        .collect()
}

/// Run one pass: fold every occurrence of `op`, leftmost first.
pub fn reduce_pass(items: &mut Vec<Item>, op: Operator) {
    while let Some(index) = items.iter().position(|item| *item == Item::Op(op)) {
        let left = index.checked_sub(1).and_then(|i| items.get(i)).copied();
        let right = items.get(index + 1).copied();
        let (Some(Item::Value(left)), Some(Item::Value(right))) = (left, right) else {
            warn!(operator = %op, index, "operator without two operands, stopping pass");
            return;
        };
        let folded = op.apply(left, right);
        items.drain(index..=index + 1);
        items[index - 1] = Item::Value(folded);
    }
}

/// Reduce items to a single value using `pass_order`.
///
/// Returns NaN when anything other than one value survives all passes, which
/// is what happens to any operator missing from the pass order.
pub fn reduce(mut items: Vec<Item>, pass_order: &[Operator]) -> f64 {
    for &op in pass_order {
        reduce_pass(&mut items, op);
    }

    match items.as_slice() {
        [Item::Value(value)] => *value,
        _ => {
            let leftover: Vec<&'static str> = items
                .iter()
                .filter_map(|item| match item {
                    Item::Op(op) => Some(op.symbol()),
                    Item::Value(_) => None,
                })
                .collect();
            warn!(?leftover, "expression not fully reduced");
            f64::NAN
        }
    }
}

pub fn reduce_tokens(tokens: &[Token], pass_order: &[Operator]) -> f64 {
    reduce(items_from_tokens(tokens), pass_order)
}
