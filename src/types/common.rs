//! Enumerations shared across the Tinkoff OpenAPI.

use serde::{Deserialize, Serialize};

/// Kind of broker account, used when registering a sandbox account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrokerAccountType {
    /// Regular brokerage account (default)
    #[default]
    Tinkoff,
    /// Individual investment account
    TinkoffIis,
}

impl std::fmt::Display for BrokerAccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrokerAccountType::Tinkoff => write!(f, "Tinkoff"),
            BrokerAccountType::TinkoffIis => write!(f, "TinkoffIis"),
        }
    }
}

/// Candle interval for `market/candles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "2min")]
    TwoMinutes,
    #[serde(rename = "3min")]
    ThreeMinutes,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "10min")]
    TenMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
}

impl CandleInterval {
    /// Wire name of the interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandleInterval::OneMinute => "1min",
            CandleInterval::TwoMinutes => "2min",
            CandleInterval::ThreeMinutes => "3min",
            CandleInterval::FiveMinutes => "5min",
            CandleInterval::TenMinutes => "10min",
            CandleInterval::FifteenMinutes => "15min",
            CandleInterval::ThirtyMinutes => "30min",
            CandleInterval::Hour => "hour",
            CandleInterval::Day => "day",
            CandleInterval::Week => "week",
            CandleInterval::Month => "month",
        }
    }
}

impl std::fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    Buy,
    Sell,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Buy => write!(f, "Buy"),
            OperationType::Sell => write!(f, "Sell"),
        }
    }
}

/// Instrument kind as reported in market payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    Stock,
    Currency,
    Bond,
    Etf,
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InstrumentType::Stock => "Stock",
            InstrumentType::Currency => "Currency",
            InstrumentType::Bond => "Bond",
            InstrumentType::Etf => "Etf",
        };
        write!(f, "{}", s)
    }
}

/// Currencies accepted by the sandbox balance endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
    Gbp,
    Hkd,
    Chf,
    Jpy,
    Cny,
    Try,
}

impl Currency {
    /// ISO code of the currency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Hkd => "HKD",
            Currency::Chf => "CHF",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Try => "TRY",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_interval_wire_names() {
        assert_eq!(
            serde_json::to_string(&CandleInterval::FifteenMinutes).unwrap(),
            r#""15min""#
        );
        assert_eq!(CandleInterval::Hour.to_string(), "hour");
        let parsed: CandleInterval = serde_json::from_str(r#""month""#).unwrap();
        assert_eq!(parsed, CandleInterval::Month);
    }

    #[test]
    fn test_broker_account_type_default() {
        assert_eq!(BrokerAccountType::default(), BrokerAccountType::Tinkoff);
        assert_eq!(
            serde_json::to_string(&BrokerAccountType::TinkoffIis).unwrap(),
            r#""TinkoffIis""#
        );
    }

    #[test]
    fn test_currency_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), r#""USD""#);
        assert_eq!(Currency::Try.to_string(), "TRY");
    }

    #[test]
    fn test_instrument_type_from_payload() {
        let parsed: InstrumentType = serde_json::from_str(r#""Etf""#).unwrap();
        assert_eq!(parsed, InstrumentType::Etf);
        assert_eq!(OperationType::Sell.to_string(), "Sell");
    }
}
