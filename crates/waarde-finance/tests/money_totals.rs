//! Cross-type scenario: parsing mixed money spellings and totalling per
//! currency.

use rust_decimal::Decimal;
use waarde_core::ValueObject;
use waarde_finance::{Amount, Currency, Money, MoneyIterExt, DOLLAR, EURO};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_mixed_spellings_total_per_currency() {
    let receipts = ["$10.00", "$ 15,00", "\u{20ac}20.00", "EUR 5"];
    let totals = receipts
        .into_iter()
        .map(Money::parse_lossy)
        .sum_by_currency();

    assert_eq!(
        totals,
        vec![
            Money::new(DOLLAR, Amount::new(dec("25.00"))),
            Money::new(EURO, Amount::new(dec("25.00"))),
        ]
    );
    assert_eq!(totals[0].to_string(), "$ 25.00");
    assert_eq!(totals[1].to_string(), "\u{20ac} 25.00");
}

#[test]
fn test_comma_decimal_dollar_scenario() {
    let m = Money::parse("$ 20,00").unwrap();
    assert_eq!(m.currency(), Currency::parse("USD").unwrap());
    assert_eq!(m.amount(), Amount::new(dec("20.00")));
}

#[test]
fn test_unparseable_receipts_drop_out_of_totals() {
    let totals = ["$10.00", "illegible", ""]
        .into_iter()
        .map(Money::parse_lossy)
        .sum_by_currency();
    assert_eq!(totals, vec![Money::parse("$ 10.00").unwrap()]);
}
