//! The autocatalysis predicate.
//!
//! A (sub)network is autocatalytic when every catalyst it uses is one of its own symbols,
//! i.e. appears somewhere in the network as a product or a constituent. This is a structural
//! proxy: it does not require a catalyst to (transitively) catalyse its own production.

use crate::reaction::Reaction;
use log::trace;
use std::collections::BTreeSet;

/// Check whether `reactions` form an autocatalytic network.
///
/// With `check_for_catalysts`, a network without any catalyst is never autocatalytic.
/// Without it, such a network is (vacuously) autocatalytic.
pub fn is_autocatalytic(reactions: &[Reaction], check_for_catalysts: bool) -> bool {
    let symbols: BTreeSet<&str> = reactions
        .iter()
        .flat_map(|r| {
            [
                r.product.as_str(),
                r.constituent_1.as_str(),
                r.constituent_2.as_str(),
            ]
        })
        .collect();
    let catalysts: BTreeSet<&str> = reactions
        .iter()
        .filter_map(|r| r.catalyst.as_deref())
        .filter(|c| !c.is_empty())
        .collect();

    if check_for_catalysts && catalysts.is_empty() {
        return false;
    }

    if let Some(external) = catalysts.iter().find(|c| !symbols.contains(*c)) {
        trace!("Catalyst `{external}` is external to the network.");
        return false;
    }

    true
}
