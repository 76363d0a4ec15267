use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum HbarUnit {
    Tinybar,
    Microbar,
    Millibar,
    Hbar,
    Kilobar,
    Megabar,
    Gigabar,
}

impl HbarUnit {
    /// Number of decimal places between this unit and a tinybar.
    pub const fn decimals(self) -> i64 {
        match self {
            HbarUnit::Tinybar => 0,
            HbarUnit::Microbar => 2,
            HbarUnit::Millibar => 5,
            HbarUnit::Hbar => 8,
            HbarUnit::Kilobar => 11,
            HbarUnit::Megabar => 14,
            HbarUnit::Gigabar => 17,
        }
    }

    pub const fn tinybars(self) -> i64 {
        10_i64.pow(self.decimals() as u32)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            HbarUnit::Tinybar => "tℏ",
            HbarUnit::Microbar => "μℏ",
            HbarUnit::Millibar => "mℏ",
            HbarUnit::Hbar => "ℏ",
            HbarUnit::Kilobar => "kℏ",
            HbarUnit::Megabar => "Mℏ",
            HbarUnit::Gigabar => "Gℏ",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HbarError {
    #[error("{amount} {unit} overflows the tinybar range")]
    Overflow { amount: i64, unit: HbarUnit },
}

/// An amount of the native currency, stored as tinybars.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Hbar {
    tinybars: i64,
}

impl Hbar {
    pub const ZERO: Hbar = Hbar::from_tinybars(0);

    pub const fn from_tinybars(tinybars: i64) -> Self {
        Self { tinybars }
    }

    pub fn from_unit(amount: i64, unit: HbarUnit) -> Result<Self, HbarError> {
        amount
            .checked_mul(unit.tinybars())
            .map(Self::from_tinybars)
            .ok_or(HbarError::Overflow { amount, unit })
    }

    pub const fn to_tinybars(&self) -> i64 {
        self.tinybars
    }

    /// Exact value of this amount expressed in `unit`.
    pub fn to(&self, unit: HbarUnit) -> BigDecimal {
        BigDecimal::new(self.tinybars.into(), unit.decimals())
    }

    pub fn to_hbars(&self) -> BigDecimal {
        self.to(HbarUnit::Hbar)
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_hbar = HbarUnit::Hbar.tinybars();
        let whole = self.tinybars / per_hbar;
        let fraction = (self.tinybars % per_hbar).unsigned_abs();

        if fraction == 0 {
            return write!(f, "{}", whole);
        }

        // `whole` loses the sign for amounts between -1 and 0 hbar
        let sign = if self.tinybars < 0 && whole == 0 {
            "-"
        } else {
            ""
        };
        let fraction = format!(
            "{:0width$}",
            fraction,
            width = HbarUnit::Hbar.decimals() as usize
        );

        write!(f, "{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case::zero(0, "0")]
    #[case::one_hbar(100_000_000, "1")]
    #[case::fraction(150_000_000, "1.5")]
    #[case::one_tinybar(1, "0.00000001")]
    #[case::negative_fraction(-50_000_000, "-0.5")]
    #[case::negative(-250_000_000, "-2.5")]
    #[case::large(4_200_000_000_000, "42000")]
    fn hbar_display(#[case] tinybars: i64, #[case] expected: &str) {
        assert_eq!(Hbar::from_tinybars(tinybars).to_string(), expected);
    }

    #[test]
    fn hbar_display_extremes() {
        assert_eq!(
            Hbar::from_tinybars(i64::MAX).to_string(),
            "92233720368.54775807"
        );
        assert_eq!(
            Hbar::from_tinybars(i64::MIN).to_string(),
            "-92233720368.54775808"
        );
    }

    #[test]
    fn from_unit_scales_to_tinybars() {
        let hbar = Hbar::from_unit(3, HbarUnit::Hbar).unwrap();
        assert_eq!(hbar.to_tinybars(), 300_000_000);

        let hbar = Hbar::from_unit(7, HbarUnit::Millibar).unwrap();
        assert_eq!(hbar.to_tinybars(), 700_000);
    }

    #[test]
    fn from_unit_reports_overflow() {
        let result = Hbar::from_unit(100, HbarUnit::Gigabar);

        assert_eq!(
            result,
            Err(HbarError::Overflow {
                amount: 100,
                unit: HbarUnit::Gigabar,
            })
        );
    }

    #[test]
    fn conversion_is_exact() {
        let hbar = Hbar::from_tinybars(150_000_001);

        assert_eq!(
            hbar.to_hbars(),
            BigDecimal::from_str("1.50000001").unwrap()
        );
        assert_eq!(
            hbar.to(HbarUnit::Microbar),
            BigDecimal::from_str("1500000.01").unwrap()
        );
        assert_eq!(hbar.to(HbarUnit::Tinybar), BigDecimal::from(150_000_001));
    }

    #[test]
    fn units_parse_from_their_names() {
        for unit in HbarUnit::iter() {
            assert_eq!(HbarUnit::from_str(&unit.to_string()), Ok(unit));
            assert_eq!(
                unit.tinybars(),
                Hbar::from_unit(1, unit).unwrap().to_tinybars()
            );
        }
        assert_eq!(HbarUnit::Kilobar.to_string(), "kilobar");
        assert_eq!(HbarUnit::Hbar.symbol(), "ℏ");
        assert!(HbarUnit::from_str("bar").is_err());
    }

    #[test]
    fn serializes_as_tinybars() {
        let hbar = Hbar::from_tinybars(12);

        assert_eq!(serde_json::to_string(&hbar).unwrap(), "12");
        assert_eq!(serde_json::from_str::<Hbar>("12").unwrap(), hbar);
        assert_eq!(Hbar::default(), Hbar::ZERO);
    }
}
