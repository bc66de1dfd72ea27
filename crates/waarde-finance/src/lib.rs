//! # waarde-finance — Monetary Value Objects
//!
//! Currencies, amounts, money, and percentages, all following the
//! value-object contract from `waarde-core`: canonical text form, `Empty`
//! and `Unknown` sentinels, serde through the canonical string.
//!
//! ```
//! use waarde_core::ValueObject;
//! use waarde_finance::{Money, MoneyIterExt};
//!
//! let totals = ["$10.00", "$15.00", "€20.00"]
//!     .into_iter()
//!     .map(Money::parse_lossy)
//!     .sum_by_currency();
//! assert_eq!(totals[0], Money::parse("$ 25.00")?);
//! assert_eq!(totals[1], Money::parse("€ 20.00")?);
//! # Ok::<(), waarde_core::FormatError>(())
//! ```

pub mod amount;
pub mod currency;
pub mod money;
pub mod percentage;
pub mod sum;

pub use amount::Amount;
pub use currency::{Currency, CurrencyDef, DOLLAR, EURO, POUND, YEN};
pub use money::Money;
pub use percentage::Percentage;
pub use sum::{AmountIterExt, MoneyIterExt};
