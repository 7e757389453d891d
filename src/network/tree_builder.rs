use crate::reaction::{Reaction, ReactionSet};
use crate::symbol::canonical;
use log::trace;
use rand::Rng;

/// Split `product` at a uniformly random position `1..len` into its (canonical) prefix
/// and suffix.
///
/// The split is by contiguous position, not an arbitrary bipartition.
///
/// # Panics
///
/// The product must have at least two elements.
pub fn random_split<R: Rng + ?Sized>(product: &str, rng: &mut R) -> (String, String) {
    let chars: Vec<char> = product.chars().collect();
    assert!(chars.len() >= 2, "Cannot split `{product}`.");
    let split_index = rng.gen_range(1..chars.len());
    let prefix: String = chars[..split_index].iter().collect();
    let suffix: String = chars[split_index..].iter().collect();
    (canonical(&prefix), canonical(&suffix))
}

/// Recursively decompose `final_product` into a table of binary reactions.
///
/// Both halves of a split are decomposed before the reaction for the split itself is
/// recorded, so children always precede their parent. Identical halves are decomposed
/// independently and may produce duplicate reactions for the same product.
///
/// The final product is canonicalised first, so the root reaction satisfies
/// `product == canonical(constituent_1 + constituent_2)` like every other reaction.
pub fn build_reactions<R: Rng + ?Sized>(final_product: &str, rng: &mut R) -> ReactionSet {
    let final_product = canonical(final_product);
    let mut reactions = Vec::new();
    split_product(&final_product, 0, rng, &mut reactions);
    ReactionSet::new(final_product, reactions)
}

fn split_product<R: Rng + ?Sized>(
    product: &str,
    layer: usize,
    rng: &mut R,
    reactions: &mut Vec<Reaction>,
) {
    if product.chars().count() <= 1 {
        return;
    }

    let (constituent_1, constituent_2) = random_split(product, rng);
    trace!("[layer:{layer}] Split `{product}` into `{constituent_1}` + `{constituent_2}`.");

    split_product(&constituent_1, layer + 1, rng, reactions);
    split_product(&constituent_2, layer + 1, rng, reactions);

    reactions.push(Reaction {
        id: reactions.len(),
        layer,
        constituent_1,
        constituent_2,
        catalyst: None,
        product: product.to_string(),
    });
}
