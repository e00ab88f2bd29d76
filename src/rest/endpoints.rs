//! Tinkoff OpenAPI REST endpoint constants.
//!
//! Paths are relative to the environment base URL.

/// Base URL for the production API.
pub const PRODUCTION_BASE_URL: &str = "https://api-invest.tinkoff.ru/openapi/";

/// Base URL for the sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://api-invest.tinkoff.ru/openapi/sandbox/";

/// Sandbox account management (sandbox environment only).
pub mod sandbox {
    /// Register a sandbox broker account.
    pub const REGISTER: &str = "sandbox/register";
    /// Set a currency balance.
    pub const CURRENCIES_BALANCE: &str = "sandbox/currencies/balance";
    /// Set an instrument position balance.
    pub const POSITIONS_BALANCE: &str = "sandbox/positions/balance";
    /// Remove a sandbox account.
    pub const REMOVE: &str = "sandbox/remove";
    /// Clear all positions of a sandbox account.
    pub const CLEAR: &str = "sandbox/clear";
}

/// Market data.
pub mod market {
    /// List stocks.
    pub const STOCKS: &str = "market/stocks";
    /// List bonds.
    pub const BONDS: &str = "market/bonds";
    /// List ETFs.
    pub const ETFS: &str = "market/etfs";
    /// List currencies.
    pub const CURRENCIES: &str = "market/currencies";
    /// Order book snapshot.
    pub const ORDERBOOK: &str = "market/orderbook";
    /// Historical candles.
    pub const CANDLES: &str = "market/candles";
    /// Instrument lookup by FIGI.
    pub const SEARCH_BY_FIGI: &str = "market/search/by-figi";
    /// Instrument lookup by ticker.
    pub const SEARCH_BY_TICKER: &str = "market/search/by-ticker";
}

/// User accounts.
pub mod user {
    /// List broker accounts.
    pub const ACCOUNTS: &str = "user/accounts";
}

/// Operations, portfolio and orders.
pub mod account {
    /// Operations history.
    pub const OPERATIONS: &str = "operations";
    /// Portfolio positions.
    pub const PORTFOLIO: &str = "portfolio";
    /// Portfolio currency balances.
    pub const PORTFOLIO_CURRENCIES: &str = "portfolio/currencies";
    /// Active orders.
    pub const ORDERS: &str = "orders";
    /// Place a limit order.
    pub const LIMIT_ORDER: &str = "orders/limit-order";
    /// Place a market order.
    pub const MARKET_ORDER: &str = "orders/market-order";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "orders/cancel";
}
