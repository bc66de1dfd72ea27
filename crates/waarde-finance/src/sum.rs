//! Iterator adapters for totalling amounts and money.
//!
//! `Money` totals group by currency, since cross-currency addition is not
//! defined: `["$10.00", "$15.00", "€20.00"]` totals to `$ 25.00` and
//! `€ 20.00`.

use crate::amount::Amount;
use crate::money::Money;
use waarde_core::ValueObject;

/// Totalling for `Amount` iterators.
pub trait AmountIterExt: Iterator<Item = Amount> + Sized {
    /// Sums the amounts. A sentinel element makes the total `Unknown`.
    fn total(self) -> Amount {
        self.sum()
    }
}

impl<I: Iterator<Item = Amount>> AmountIterExt for I {}

/// Grouped totalling for `Money` iterators.
pub trait MoneyIterExt: Iterator<Item = Money> + Sized {
    /// Sums per currency, in first-seen currency order. `Empty` and
    /// `Unknown` elements are skipped.
    fn sum_by_currency(self) -> Vec<Money> {
        let mut totals: Vec<Money> = Vec::new();
        for money in self {
            if money.currency().is_empty() || money.currency().is_unknown() {
                continue;
            }
            match totals
                .iter_mut()
                .find(|t| t.currency() == money.currency())
            {
                // Same currency, so the addition cannot fail.
                Some(total) => {
                    if let Ok(sum) = total.add(&money) {
                        *total = sum;
                    }
                }
                None => totals.push(money),
            }
        }
        totals
    }
}

impl<I: Iterator<Item = Money>> MoneyIterExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use waarde_core::ValueObject;

    #[test]
    fn test_total_amounts() {
        let total = ["10", "15", "20"]
            .into_iter()
            .map(Amount::parse_lossy)
            .total();
        assert_eq!(total, Amount::parse("45").unwrap());
    }

    #[test]
    fn test_total_with_sentinel_is_unknown() {
        let total = ["10", "?"].into_iter().map(Amount::parse_lossy).total();
        assert!(total.is_unknown());
    }

    #[test]
    fn test_sum_by_currency() {
        let totals = ["$10.00", "$15.00", "\u{20ac}20.00"]
            .into_iter()
            .map(Money::parse_lossy)
            .sum_by_currency();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0], Money::parse("$ 25.00").unwrap());
        assert_eq!(totals[1], Money::parse("\u{20ac} 20.00").unwrap());
    }

    #[test]
    fn test_sum_by_currency_skips_sentinels() {
        let totals = ["$5.00", "?", ""]
            .into_iter()
            .map(Money::parse_lossy)
            .sum_by_currency();
        assert_eq!(totals, vec![Money::parse("$5.00").unwrap()]);
    }

    #[test]
    fn test_sum_by_currency_empty_iterator() {
        let totals = std::iter::empty::<Money>().sum_by_currency();
        assert!(totals.is_empty());
    }
}
