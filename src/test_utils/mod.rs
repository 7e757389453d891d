use crate::reaction::{Reaction, ReactionSet};
use crate::symbol::join;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// A deterministic random source for reproducible tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a single reaction. The product is the canonical join of both constituents.
///
/// # Example
///
/// `mk_reaction(3, 1, "B", "A", Some("C"))` creates reaction `#3: B + A -> AB` at layer 1,
/// catalysed by `C`.
pub fn mk_reaction(
    id: usize,
    layer: usize,
    constituent_1: &str,
    constituent_2: &str,
    catalyst: Option<&str>,
) -> Reaction {
    Reaction {
        id,
        layer,
        constituent_1: constituent_1.to_string(),
        constituent_2: constituent_2.to_string(),
        catalyst: catalyst.map(str::to_string),
        product: join(constituent_1, constituent_2),
    }
}

pub fn mk_reaction_set(final_product: &str, reactions: Vec<Reaction>) -> ReactionSet {
    ReactionSet::new(final_product, reactions)
}

/// A fixed network for `ABCD` with catalysts chosen by hand.
///
/// ```text
/// #0 (layer 2)  A + B  -> AB     catalyst CD
/// #1 (layer 1)  AB + C -> ABC    catalyst -
/// #2 (layer 0)  ABC + D -> ABCD  catalyst AB
/// ```
///
/// The subnetwork of `AB` uses the external catalyst `CD` (not autocatalytic), the subnetwork
/// of `ABC` uses `CD` as well (not autocatalytic), and the whole set is not autocatalytic
/// either, because `CD` never appears as a product or constituent.
pub fn example_network_abcd() -> ReactionSet {
    mk_reaction_set(
        "ABCD",
        vec![
            mk_reaction(0, 2, "A", "B", Some("CD")),
            mk_reaction(1, 1, "AB", "C", None),
            mk_reaction(2, 0, "ABC", "D", Some("AB")),
        ],
    )
}

/// A balanced network for `ABCD` whose catalysts are all internal.
///
/// ```text
/// #0 (layer 1)  A + B   -> AB    catalyst B
/// #1 (layer 1)  C + D   -> CD    catalyst AB
/// #2 (layer 0)  AB + CD -> ABCD  catalyst -
/// ```
///
/// `AB` is autocatalytic (its catalyst `B` is one of its constituents), `CD` is not
/// (catalyst `AB` is external to it), and the whole set is autocatalytic.
pub fn balanced_network_abcd() -> ReactionSet {
    mk_reaction_set(
        "ABCD",
        vec![
            mk_reaction(0, 1, "A", "B", Some("B")),
            mk_reaction(1, 1, "C", "D", Some("AB")),
            mk_reaction(2, 0, "AB", "CD", None),
        ],
    )
}
