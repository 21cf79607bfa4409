//! Display-currency conversion. All stored prices are AZN; the fixed
//! rate table below is configuration, not a live service.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Azn,
    Usd,
    Eur,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Azn, Currency::Usd, Currency::Eur]
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Azn => "AZN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn parse(value: &str) -> Option<Currency> {
        match value {
            "AZN" => Some(Currency::Azn),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }

    /// Rate relative to the AZN base.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Azn => 1.0,
            Currency::Usd => 0.59,
            Currency::Eur => 0.54,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Azn => "₼",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

/// Formats an AZN amount in the target currency, one decimal place
/// followed by the symbol. Never mutates the stored amount.
pub fn convert(amount_azn: f64, currency: Currency) -> String {
    format!("{:.1} {}", amount_azn * currency.rate(), currency.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_linear_in_the_rate() {
        assert_eq!(convert(100.0, Currency::Azn), "100.0 ₼");
        assert_eq!(convert(100.0, Currency::Usd), "59.0 $");
        assert_eq!(convert(100.0, Currency::Eur), "54.0 €");
    }

    #[test]
    fn conversion_keeps_one_decimal_place() {
        assert_eq!(convert(5.0, Currency::Azn), "5.0 ₼");
        assert_eq!(convert(10.0, Currency::Usd), "5.9 $");
        assert_eq!(convert(45.0, Currency::Eur), "24.3 €");
    }

    #[test]
    fn codes_round_trip() {
        for currency in Currency::all() {
            assert_eq!(Currency::parse(currency.code()), Some(*currency));
        }
        assert_eq!(Currency::parse("GBP"), None);
    }
}
