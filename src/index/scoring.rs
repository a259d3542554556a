//! Result weighting and intersection
//!
//! Weights are a pure function of the term's document frequency and the
//! corpus size, so repeated searches over a fixed index state always
//! produce identical results. Accumulators arrive in ascending docid
//! order (segments are visited in roster order and append in docid
//! order), which intersection relies on.

use crate::models::DocIdNode;

/// Scale factor applied to the IDF term so weights survive as integers
const WEIGHT_SCALE: f64 = 1000.0;

/// Assign an IDF-style weight to every accumulated match
pub(crate) fn compute_weight(acc: &mut [DocIdNode], total_docs: u32) {
    let df = acc.len();
    if df == 0 {
        return;
    }
    let idf = (1.0 + total_docs as f64 / df as f64).ln();
    let weight = (idf * WEIGHT_SCALE) as u32;
    for node in acc.iter_mut() {
        node.weight = weight;
    }
}

/// Intersect `acc` with `sub` in place, keeping `acc`'s order and weights
///
/// Both inputs are ascending by docid. Returns false when the
/// intersection is empty; `acc` is left truncated either way.
pub(crate) fn intersect_into(acc: &mut Vec<DocIdNode>, sub: &[DocIdNode]) -> bool {
    let mut write = 0;
    let mut j = 0;
    for i in 0..acc.len() {
        let docid = acc[i].docid;
        while j < sub.len() && sub[j].docid < docid {
            j += 1;
        }
        if j == sub.len() {
            break;
        }
        if sub[j].docid == docid {
            acc[write] = acc[i];
            write += 1;
            j += 1;
        }
    }
    acc.truncate(write);
    write > 0
}
