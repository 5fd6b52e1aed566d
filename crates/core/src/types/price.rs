//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive in US dollars and the storefront displays them in
//! Indian rupees, so a [`Price`] carries its currency and knows how to
//! convert and format itself for either.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A price in US dollars.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// Convert to another currency at `rate` target units per source unit.
    ///
    /// The converted amount is rounded to two decimal places, half away
    /// from zero, and saturates at the `Decimal` bounds.
    #[must_use]
    pub fn convert(&self, rate: Decimal, target: CurrencyCode) -> Self {
        let amount = self
            .amount
            .saturating_mul(rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self::new(amount, target)
    }

    /// Convert to rupees at the given USD→INR rate.
    #[must_use]
    pub fn to_inr(&self, rate: Decimal) -> Self {
        self.convert(rate, CurrencyCode::INR)
    }
}

impl fmt::Display for Price {
    /// Formats with the currency symbol and locale digit grouping:
    /// `$1,234.50` for dollars, `₹1,23,457` for rupees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.currency_code;
        let rounded = self
            .amount
            .round_dp_with_strategy(code.fraction_digits(), RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = match code.fraction_digits() {
            0 => format!("{:.0}", rounded.abs()),
            _ => format!("{:.2}", rounded.abs()),
        };
        let (whole, fraction) = digits
            .split_once('.')
            .map_or((digits.as_str(), None), |(w, fr)| (w, Some(fr)));

        write!(f, "{sign}{}{}", code.symbol(), code.group_digits(whole))?;
        if let Some(fraction) = fraction {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

/// ISO 4217 currency codes used by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Catalog source currency.
    #[default]
    USD,
    /// Display currency.
    INR,
}

impl CurrencyCode {
    /// Currency symbol used in display strings.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::INR => "₹",
        }
    }

    /// The three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::INR => "INR",
        }
    }

    /// Fraction digits shown when formatting.
    ///
    /// Rupee prices are shown whole, matching the storefront's
    /// `maximumFractionDigits: 0`.
    #[must_use]
    pub const fn fraction_digits(self) -> u32 {
        match self {
            Self::USD => 2,
            Self::INR => 0,
        }
    }

    /// Insert grouping separators into a string of ASCII digits.
    ///
    /// Dollars group by thousands. Rupees use the Indian system: the last
    /// three digits, then groups of two (`12,34,567`).
    fn group_digits(self, digits: &str) -> String {
        let len = digits.len();
        if len <= 3 {
            return digits.to_owned();
        }

        let (head, tail) = digits.split_at(len - 3);
        let head_group = match self {
            Self::USD => 3,
            Self::INR => 2,
        };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(head_group);
            groups.push(head.get(start..end).unwrap_or_default());
            end = start;
        }
        groups.reverse();

        let mut out = groups.join(",");
        out.push(',');
        out.push_str(tail);
        out
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
