//! Market data endpoints.

use time::OffsetDateTime;

use crate::error::TinkoffError;
use crate::rest::TinkoffClient;
use crate::rest::endpoints::market;
use crate::rest::request::Request;
use crate::rest::response::ResponseMap;
use crate::types::CandleInterval;

impl TinkoffClient {
    /// List stocks.
    ///
    /// Instruments are returned in `payload.instruments`.
    pub async fn market_stocks(&self) -> Result<ResponseMap, TinkoffError> {
        self.execute(Request::get(market::STOCKS)).await
    }

    /// List bonds.
    pub async fn market_bonds(&self) -> Result<ResponseMap, TinkoffError> {
        self.execute(Request::get(market::BONDS)).await
    }

    /// List ETFs.
    pub async fn market_etfs(&self) -> Result<ResponseMap, TinkoffError> {
        self.execute(Request::get(market::ETFS)).await
    }

    /// List currencies.
    pub async fn market_currencies(&self) -> Result<ResponseMap, TinkoffError> {
        self.execute(Request::get(market::CURRENCIES)).await
    }

    /// Get an order book snapshot.
    ///
    /// # Arguments
    ///
    /// * `figi` - Instrument FIGI.
    /// * `depth` - Number of price levels per side.
    pub async fn market_orderbook(
        &self,
        figi: &str,
        depth: u32,
    ) -> Result<ResponseMap, TinkoffError> {
        let request = Request::get(market::ORDERBOOK)
            .query("figi", figi)
            .query("depth", depth);
        self.execute(request).await
    }

    /// Get historical candles for `[from, to)`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use time::{Duration, OffsetDateTime};
    /// use tinkoff_open_api::rest::TinkoffClient;
    /// use tinkoff_open_api::types::CandleInterval;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TinkoffClient::sandbox("t.my_token");
    ///     let to = OffsetDateTime::now_utc();
    ///     let from = to - Duration::days(1);
    ///     let candles = client
    ///         .market_candles("BBG000B9XRY4", from, to, CandleInterval::FifteenMinutes)
    ///         .await?;
    ///     println!("{:?}", candles.get("payload"));
    ///     Ok(())
    /// }
    /// ```
    pub async fn market_candles(
        &self,
        figi: &str,
        from: OffsetDateTime,
        to: OffsetDateTime,
        interval: CandleInterval,
    ) -> Result<ResponseMap, TinkoffError> {
        let request = Request::get(market::CANDLES)
            .query("figi", figi)
            .query_datetime("from", &from)?
            .query_datetime("to", &to)?
            .query("interval", interval);
        self.execute(request).await
    }

    /// Look up an instrument by FIGI.
    pub async fn market_search_by_figi(&self, figi: &str) -> Result<ResponseMap, TinkoffError> {
        self.execute(Request::get(market::SEARCH_BY_FIGI).query("figi", figi))
            .await
    }

    /// Look up instruments by ticker.
    pub async fn market_search_by_ticker(
        &self,
        ticker: &str,
    ) -> Result<ResponseMap, TinkoffError> {
        self.execute(Request::get(market::SEARCH_BY_TICKER).query("ticker", ticker))
            .await
    }
}
