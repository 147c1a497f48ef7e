//! Comparisons over multi-denomination amounts.
//!
//! A `&[Coin]` is read as a map from denom to amount. A denom that does not
//! appear counts as zero; repeated denoms are summed.

use std::collections::BTreeMap;

use cosmwasm_std::{Coin, Uint128};

/// Total amount of `denom` in `coins`.
pub fn amount_of(coins: &[Coin], denom: &str) -> Uint128 {
    coins
        .iter()
        .filter(|c| c.denom == denom)
        .fold(Uint128::zero(), |acc, c| acc + c.amount)
}

/// True when `coins` is non-empty and every entry has a positive amount.
pub fn is_all_positive(coins: &[Coin]) -> bool {
    !coins.is_empty() && coins.iter().all(|c| !c.amount.is_zero())
}

/// True when `coins` holds strictly more than `than` in every denom `than` names.
///
/// An empty `than` is a zero price, which anything beats.
pub fn is_all_gt(coins: &[Coin], than: &[Coin]) -> bool {
    than.iter()
        .all(|c| amount_of(coins, &c.denom) > amount_of(than, &c.denom))
}

/// True when `funds` holds at least `required` in every denom `required` names.
pub fn has_coins(funds: &[Coin], required: &[Coin]) -> bool {
    required
        .iter()
        .all(|c| amount_of(funds, &c.denom) >= amount_of(required, &c.denom))
}

/// What is left of `funds` after paying `cost`, dropping zero entries.
///
/// Callers check `has_coins(funds, cost)` first; a short denom saturates at zero.
pub fn remainder(funds: &[Coin], cost: &[Coin]) -> Vec<Coin> {
    let mut denoms: Vec<&str> = funds.iter().map(|c| c.denom.as_str()).collect();
    denoms.sort_unstable();
    denoms.dedup();
    denoms
        .into_iter()
        .filter_map(|denom| {
            let left = amount_of(funds, denom).saturating_sub(amount_of(cost, denom));
            if left.is_zero() {
                None
            } else {
                Some(Coin {
                    denom: denom.to_string(),
                    amount: left,
                })
            }
        })
        .collect()
}

/// Merges repeated denoms and sorts by denom, the shape the bank expects.
pub fn normalize(coins: Vec<Coin>) -> Vec<Coin> {
    let mut merged: BTreeMap<String, Uint128> = BTreeMap::new();
    for c in coins {
        *merged.entry(c.denom).or_default() += c.amount;
    }
    merged
        .into_iter()
        .map(|(denom, amount)| Coin { denom, amount })
        .collect()
}

/// `10usd,5eur` style rendering for response attributes.
pub fn coins_attr(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{coin, coins};

    #[test]
    fn positive_needs_entries() {
        assert!(!is_all_positive(&[]));
        assert!(is_all_positive(&coins(1, "usd")));
        assert!(!is_all_positive(&[coin(1, "usd"), coin(0, "eur")]));
    }

    #[test]
    fn anything_beats_zero_price() {
        assert!(is_all_gt(&coins(1, "usd"), &[]));
    }

    #[test]
    fn equal_bid_does_not_win() {
        assert!(!is_all_gt(&coins(10, "usd"), &coins(10, "usd")));
        assert!(is_all_gt(&coins(11, "usd"), &coins(10, "usd")));
        assert!(!is_all_gt(&coins(9, "usd"), &coins(10, "usd")));
    }

    #[test]
    fn missing_denom_counts_as_zero() {
        let price = vec![coin(5, "eur"), coin(10, "usd")];
        assert!(!is_all_gt(&coins(100, "usd"), &price));
        assert!(!is_all_gt(&[coin(6, "eur"), coin(10, "usd")], &price));
        assert!(is_all_gt(&[coin(6, "eur"), coin(11, "usd")], &price));
        // extra denoms in the bid are not compared
        assert!(is_all_gt(&[coin(6, "eur"), coin(1, "gbp"), coin(11, "usd")], &price));
        // a bid in a foreign denom does not beat a real price
        assert!(!is_all_gt(&coins(1000, "gbp"), &coins(1, "usd")));
    }

    #[test]
    fn cover_and_change() {
        let funds = vec![coin(3, "eur"), coin(25, "usd")];
        assert!(has_coins(&funds, &coins(20, "usd")));
        assert!(!has_coins(&funds, &coins(4, "eur")));
        assert_eq!(
            remainder(&funds, &coins(20, "usd")),
            vec![coin(3, "eur"), coin(5, "usd")]
        );
        assert!(remainder(&coins(20, "usd"), &coins(20, "usd")).is_empty());
    }

    #[test]
    fn normalize_merges_and_sorts() {
        let price = vec![coin(5, "usd"), coin(5, "usd"), coin(1, "eur")];
        assert_eq!(normalize(price), vec![coin(1, "eur"), coin(10, "usd")]);
        assert!(normalize(vec![]).is_empty());
    }

    #[test]
    fn attribute_rendering() {
        assert_eq!(coins_attr(&[coin(1, "eur"), coin(10, "usd")]), "1eur,10usd");
        assert_eq!(coins_attr(&[]), "");
    }
}
