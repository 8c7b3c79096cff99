//! SI prefixes

use std::fmt;

/// An SI prefix, scaling a unit by a power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// 10^-30
    Quecto,
    /// 10^-27
    Ronto,
    /// 10^-24
    Yocto,
    /// 10^-21
    Zepto,
    /// 10^-18
    Atto,
    /// 10^-15
    Femto,
    /// 10^-12
    Pico,
    /// 10^-9
    Nano,
    /// 10^-6
    Micro,
    /// 10^-3
    Milli,
    /// 10^-2
    Centi,
    /// 10^-1
    Deci,
    /// 10^1
    Deca,
    /// 10^2
    Hecto,
    /// 10^3
    Kilo,
    /// 10^6
    Mega,
    /// 10^9
    Giga,
    /// 10^12
    Tera,
    /// 10^15
    Peta,
    /// 10^18
    Exa,
    /// 10^21
    Zetta,
    /// 10^24
    Yotta,
    /// 10^27
    Ronna,
    /// 10^30
    Quetta,
}

impl Prefix {
    /// All SI prefixes, from smallest to largest.
    pub const ALL: [Self; 24] = [
        Self::Quecto,
        Self::Ronto,
        Self::Yocto,
        Self::Zepto,
        Self::Atto,
        Self::Femto,
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Centi,
        Self::Deci,
        Self::Deca,
        Self::Hecto,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Zetta,
        Self::Yotta,
        Self::Ronna,
        Self::Quetta,
    ];

    /// Returns the power of ten the prefix scales by.
    #[must_use]
    pub const fn tens(self) -> i32 {
        match self {
            Self::Quecto => -30,
            Self::Ronto => -27,
            Self::Yocto => -24,
            Self::Zepto => -21,
            Self::Atto => -18,
            Self::Femto => -15,
            Self::Pico => -12,
            Self::Nano => -9,
            Self::Micro => -6,
            Self::Milli => -3,
            Self::Centi => -2,
            Self::Deci => -1,
            Self::Deca => 1,
            Self::Hecto => 2,
            Self::Kilo => 3,
            Self::Mega => 6,
            Self::Giga => 9,
            Self::Tera => 12,
            Self::Peta => 15,
            Self::Exa => 18,
            Self::Zetta => 21,
            Self::Yotta => 24,
            Self::Ronna => 27,
            Self::Quetta => 30,
        }
    }

    /// Returns the symbol of the prefix, such as `k` for kilo.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Quecto => "q",
            Self::Ronto => "r",
            Self::Yocto => "y",
            Self::Zepto => "z",
            Self::Atto => "a",
            Self::Femto => "f",
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "μ",
            Self::Milli => "m",
            Self::Centi => "c",
            Self::Deci => "d",
            Self::Deca => "da",
            Self::Hecto => "h",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
            Self::Tera => "T",
            Self::Peta => "P",
            Self::Exa => "E",
            Self::Zetta => "Z",
            Self::Yotta => "Y",
            Self::Ronna => "R",
            Self::Quetta => "Q",
        }
    }

    /// Looks up a prefix by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        // `u` is accepted as an ASCII spelling of micro
        if symbol == "u" {
            return Some(Self::Micro);
        }

        Self::ALL
            .into_iter()
            .find(|prefix| prefix.symbol() == symbol)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_sorted_by_power() {
        let powers = Prefix::ALL.map(Prefix::tens);

        assert!(powers.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn symbols_round_trip() {
        for prefix in Prefix::ALL {
            assert_eq!(Prefix::from_symbol(prefix.symbol()), Some(prefix));
        }

        assert_eq!(Prefix::from_symbol("u"), Some(Prefix::Micro));
        assert_eq!(Prefix::from_symbol("x"), None);
    }
}
