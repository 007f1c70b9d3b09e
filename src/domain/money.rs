use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// 通貨
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    BRL,
    USD,
    EUR,
    JPY,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::JPY => "¥",
        }
    }

    /// 補助単位の桁数
    pub fn minor_digits(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::BRL),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "JPY" => Ok(Currency::JPY),
            _ => Err(MoneyError::UnknownCurrency),
        }
    }
}

/// 金額
///
/// `amount` は補助単位(BRLならセンターボ)で保持するため負の値にはならない。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: u64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// `"200.00"` のような十進表記から金額を作る
    pub fn from_decimal(value: &str, currency: Currency) -> Result<Self, MoneyError> {
        let value = value.trim();
        if value.starts_with('-') {
            return Err(MoneyError::Negative);
        }
        let digits = currency.minor_digits();
        let (major, minor) = match value.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (value, ""),
        };
        if major.is_empty() || !is_digits(major) || !is_digits(minor) {
            return Err(MoneyError::Malformed);
        }
        if minor.len() > digits as usize {
            return Err(MoneyError::TooPrecise);
        }
        let scale = 10u64.pow(digits);
        let major = major.parse::<u64>().map_err(|_| MoneyError::Malformed)?;
        let minor = match minor.is_empty() {
            true => 0,
            false => {
                let padded = format!("{:0<width$}", minor, width = digits as usize);
                padded.parse::<u64>().map_err(|_| MoneyError::Malformed)?
            }
        };
        major
            .checked_mul(scale)
            .and_then(|x| x.checked_add(minor))
            .map(|amount| Self::new(amount, currency))
            .ok_or(MoneyError::Malformed)
    }
}

fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// `"200.00 BRL"` 形式
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(value), Some(currency), None) => Self::from_decimal(value, currency.parse()?),
            _ => Err(MoneyError::Malformed),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.minor_digits();
        let scale = 10u64.pow(digits);
        let major = (self.amount / scale).to_formatted_string(&Locale::en);
        match digits {
            0 => write!(f, "{}{}", self.currency.symbol(), major),
            _ => write!(
                f,
                "{}{}.{:0width$}",
                self.currency.symbol(),
                major,
                self.amount % scale,
                width = digits as usize
            ),
        }
    }
}

/// 金額エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[display(fmt = "Malformed amount")]
    Malformed,
    #[display(fmt = "Amount cannot be negative")]
    Negative,
    #[display(fmt = "Amount has too many decimal places")]
    TooPrecise,
    #[display(fmt = "Unknown currency")]
    UnknownCurrency,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_price_display() {
        let price = Money::new(1000000, Currency::JPY);
        assert_eq!(format!("{}", price), "¥1,000,000");
        let price = Money::new(150000, Currency::BRL);
        assert_eq!(format!("{}", price), "R$1,500.00");
        let price = Money::new(5, Currency::USD);
        assert_eq!(format!("{}", price), "$0.05");
    }

    #[test]
    fn test_money_from_str() {
        assert_eq!("200.00 BRL".parse(), Ok(Money::new(20000, Currency::BRL)));
        assert_eq!("200.5 brl".parse(), Ok(Money::new(20050, Currency::BRL)));
        assert_eq!("500 JPY".parse(), Ok(Money::new(500, Currency::JPY)));
        assert_eq!("-1.00 BRL".parse::<Money>(), Err(MoneyError::Negative));
        assert_eq!("1.005 BRL".parse::<Money>(), Err(MoneyError::TooPrecise));
        assert_eq!("1.5 JPY".parse::<Money>(), Err(MoneyError::TooPrecise));
        assert_eq!("1.00 XYZ".parse::<Money>(), Err(MoneyError::UnknownCurrency));
        assert_eq!("abc BRL".parse::<Money>(), Err(MoneyError::Malformed));
        assert_eq!(".50 BRL".parse::<Money>(), Err(MoneyError::Malformed));
        assert_eq!("200.00".parse::<Money>(), Err(MoneyError::Malformed));
    }

    #[test]
    fn test_money_json() {
        let price = Money::new(20000, Currency::BRL);
        assert_eq!(
            serde_json::to_value(price).unwrap(),
            json!({ "amount": 20000, "currency": "BRL" })
        );
    }
}
