//! This file provides some common functions
//! such as normalization and entropy calculation.
use rayon::prelude::*;


/// Normalizes the given slice so that `sum(items) == 1`.
#[inline(always)]
pub fn normalize(items: &mut [f64]) {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    assert_ne!(z, 0.0, "{items:?}");

    items.par_iter_mut()
        .for_each(|item| { *item /= z; });
}


/// Returns the importance factor of a hypothesis
/// whose weighted error is `error` on a `n_class`-class problem:
/// ```txt
/// alpha = ln( (1 - error) / error ) + ln( n_class - 1 )
/// ```
/// `alpha > 0` iff `error < (n_class - 1) / n_class`,
/// i.e., the hypothesis beats the random guessing.
#[inline(always)]
pub fn importance_factor(error: f64, n_class: usize) -> f64 {
    ((1f64 - error) / error).ln() + ((n_class - 1) as f64).ln()
}


/// Returns `N * H(p)`,
/// where `N` is the total mass of `counts`
/// and `H(p)` is the entropy of the distribution `p = counts / N`.
/// `0 ln 0` is treated as `0`.
/// Returns `0` for an empty branch.
#[inline(always)]
pub fn mass_weighted_entropy(counts: &[f64]) -> f64 {
    let total = counts.iter().sum::<f64>();
    if total <= 0.0 { return 0.0; }

    let entropy = counts.iter()
        .map(|&c| {
            let p = c / total;
            if p <= 0.0 { 0.0 } else { - p * p.ln() }
        })
        .sum::<f64>();

    total * entropy
}


/// Returns an index whose entry is the maximal value.
/// Ties are broken by the smallest index.
pub fn argmax(arr: &[f64]) -> usize {
    let dim = arr.len();
    let (ix, _) = arr.iter()
        .enumerate()
        .fold((dim, f64::MIN), |acc, (i, &a)| {
            if acc.0 == dim || acc.1 < a {
                (i, a)
            } else {
                acc
            }
        });
    assert_ne!(
        ix, dim,
        "failed to execute argmax. array is {arr:?}"
    );
    ix
}


/// Returns an index whose entry is the minimal value.
/// Ties are broken by the smallest index.
pub fn argmin(arr: &[f64]) -> usize {
    let dim = arr.len();
    let (ix, _) = arr.iter()
        .enumerate()
        .fold((dim, f64::MAX), |acc, (i, &a)| {
            if acc.0 == dim || a < acc.1 {
                (i, a)
            } else {
                acc
            }
        });
    assert_ne!(
        ix, dim,
        "failed to execute argmin. array is {arr:?}"
    );
    ix
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_01() {
        let mut v = vec![1.0, 1.0, 2.0];
        normalize(&mut v[..]);
        assert_eq!(v, vec![0.25, 0.25, 0.5]);
    }

    #[test]
    #[should_panic]
    fn test_normalize_02() {
        let mut v = vec![0.0; 3];
        normalize(&mut v[..]);
    }

    #[test]
    fn test_importance_factor_binary() {
        // For two classes, this is twice the weight of binary AdaBoost.
        let alpha = importance_factor(0.25, 2);
        assert!((alpha - 3f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_importance_factor_sign() {
        let k = 8;
        let chance = (k - 1) as f64 / k as f64;
        assert!(importance_factor(chance - 0.01, k) > 0.0);
        assert!(importance_factor(chance + 0.01, k) < 0.0);
        assert!(importance_factor(chance, k).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_pure_branch() {
        let h = mass_weighted_entropy(&[0.0, 0.5, 0.0]);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_entropy_empty_branch() {
        let h = mass_weighted_entropy(&[0.0, 0.0]);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_entropy_even_branch() {
        // mass 0.5, entropy ln 2
        let h = mass_weighted_entropy(&[0.25, 0.25]);
        let expected = 0.5 * 2f64.ln();
        assert!((h - expected).abs() < 1e-12, "expected {expected}, got {h}");
    }

    #[test]
    fn test_argmax_ties() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 0.0]), 1);
        assert_eq!(argmax(&[0.0, 0.0]), 0);
    }

    #[test]
    fn test_argmin_ties() {
        assert_eq!(argmin(&[2.0, 1.0, 1.0]), 1);
        assert_eq!(argmin(&[f64::MAX, f64::MAX]), 0);
    }
}
