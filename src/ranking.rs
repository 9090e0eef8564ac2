/// One pooled observation annotated with its rank. Ranks are 1-based and
/// fractional when ties are averaged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedObservation {
    pub value: f64,
    pub rank: f64,
}

/// Rank the pooled observations ascending, giving every run of equal
/// values the mean of its provisional ranks (mid-rank tie treatment).
/// The caller's slice is not modified.
pub fn rank(pool: &[f64]) -> Vec<RankedObservation> {
    let mut ranked: Vec<RankedObservation> = pool
        .iter()
        .map(|&value| RankedObservation { value, rank: 0.0 })
        .collect();

    ranked.sort_by(|x, y| x.value.total_cmp(&y.value));

    let mut i = 0;
    while i < ranked.len() {
        let mut j = i + 1;
        while j < ranked.len() && ranked[j].value == ranked[i].value {
            j += 1;
        }
        // Provisional ranks i+1..=j average to (i + j + 1) / 2.
        let rank_val = (i + j + 1) as f64 / 2.0;
        for obs in &mut ranked[i..j] {
            obs.rank = rank_val;
        }
        i = j;
    }

    ranked
}

/// Sum the ranks that belong to one sample's observations. Each pooled
/// entry consumes at most one occurrence from a working copy of the
/// sample, so duplicate values within or across samples are attributed
/// exactly once.
pub fn rank_sum(ranked: &[RankedObservation], sample: &[f64]) -> f64 {
    let mut remaining = sample.to_vec();
    let mut sum = 0.0;
    for obs in ranked {
        if let Some(index) = remaining.iter().position(|&v| v == obs.value) {
            sum += obs.rank;
            remaining.swap_remove(index);
        }
    }
    sum
}
