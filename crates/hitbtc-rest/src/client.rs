//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, HistoryEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::{
    check_required_params, check_uri_security, parse_base_uri, ApiRequest, DEFAULT_BASE_URI,
    FORM_CONTENT_TYPE,
};
use crate::response::{classify, RawResponse};
use crate::types::OrderRequest;
use hitbtc_auth::{AuthError, Credentials};
use hitbtc_types::{Params, WriteOperation};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable overriding the base URI
pub const BASE_URI_ENV: &str = "HITBTC_API_URI";

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("hitbtc-rest/", env!("CARGO_PKG_VERSION"));

/// HitBTC REST API client
///
/// Every request carries HTTP Basic credentials. The underlying connection
/// pool is shared by clones of the client.
///
/// # Example
///
/// ```no_run
/// use hitbtc_rest::{HitbtcRestClient, Params};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HitbtcRestClient::new("api-key", "api-secret")?;
///
///     let symbol = client.market().get_symbol("ETHBTC", &Params::new()).await?;
///     println!("{}", symbol);
///
///     let balance = client.get_trading_balance().await?;
///     println!("{}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct HitbtcRestClient {
    http_client: Client,
    credentials: Credentials,
    base_uri: Url,
    secure: bool,
}

impl HitbtcRestClient {
    /// Create a client against the default endpoint
    ///
    /// Fails without touching the network if `api_key` or `api_secret` is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> RestResult<Self> {
        let credentials = Credentials::new(api_key, api_secret)?;
        Self::with_credentials(credentials)
    }

    /// Create a client from existing credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    ///
    /// A non-HTTPS base URI is accepted but logged as a warning.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let base_uri = parse_base_uri(&config.base_uri)?;
        let secure = check_uri_security(&base_uri);

        let auth = credentials.basic_auth_header()?;
        let mut auth_value = HeaderValue::from_str(auth.expose_secret())
            .map_err(|e| AuthError::InvalidHeader(e.to_string()))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        info!(base_uri = %base_uri, "Created HitBTC REST client");

        Ok(Self {
            http_client,
            credentials,
            base_uri,
            secure,
        })
    }

    /// Base URI every endpoint path is appended to
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Check if the base URI uses HTTPS
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// API key this client authenticates with
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    /// Send one request to `segments` under the base URI and classify the response
    ///
    /// Reads (GET, DELETE) carry `params` in the query string; writes
    /// (POST, PUT, PATCH) send them form-encoded in the body.
    pub async fn request(
        &self,
        method: Method,
        segments: &[&str],
        params: &Params,
    ) -> RestResult<Value> {
        let request = ApiRequest::build(&self.base_uri, method, segments, params)?;
        let raw = self.dispatch(request).await?;

        classify(&raw).map_err(|e| {
            if let RestError::Api(api) = &e {
                debug!(status = api.status, kind = %api.kind, "Request failed");
            }
            e
        })
    }

    /// Validate required keys for `operation`, then send the request
    ///
    /// Nothing is sent if a key is missing.
    pub async fn write(
        &self,
        operation: WriteOperation,
        method: Method,
        segments: &[&str],
        params: &Params,
    ) -> RestResult<Value> {
        check_required_params(operation, params)?;
        self.request(method, segments, params).await
    }

    async fn dispatch(&self, request: ApiRequest) -> RestResult<RawResponse> {
        debug!(
            method = %request.method,
            path = %request.relative_path(&self.base_uri),
            "Sending request"
        );

        let mut builder = self.http_client.request(request.method, request.url);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        let response = builder.send().await?;
        RawResponse::read(response).await
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Public market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Trading endpoints (orders, trading balance, fees)
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(self)
    }

    /// Order and trade history endpoints
    pub fn history(&self) -> HistoryEndpoints<'_> {
        HistoryEndpoints::new(self)
    }

    /// Account endpoints (balances, deposits, withdrawals, transfers)
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// Get ticker for a symbol
    pub async fn get_ticker(&self, symbol: &str) -> RestResult<Value> {
        self.market().get_ticker(symbol, &Params::new()).await
    }

    /// Get orderbook for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Symbol (e.g., "ETHBTC")
    /// * `limit` - Number of levels per side (0 for the full book)
    pub async fn get_orderbook(&self, symbol: &str, limit: Option<u32>) -> RestResult<Value> {
        let mut params = Params::new();
        if let Some(limit) = limit {
            params.insert("limit", limit);
        }
        self.market().get_orderbook(symbol, &params).await
    }

    /// Get trading wallet balance
    pub async fn get_trading_balance(&self) -> RestResult<Value> {
        self.trading().get_trading_balance(&Params::new()).await
    }

    /// Get account wallet balance
    pub async fn get_account_balance(&self) -> RestResult<Value> {
        self.account().get_account_balance(&Params::new()).await
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading().place_order(order).await
    }

    /// Cancel an order by client order ID
    pub async fn cancel_order(&self, client_order_id: &str) -> RestResult<Value> {
        self.trading().cancel_order(client_order_id, &Params::new()).await
    }
}

impl std::fmt::Debug for HitbtcRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitbtcRestClient")
            .field("base_uri", &self.base_uri.as_str())
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URI for every endpoint
    pub base_uri: String,
    /// Request timeout in seconds, transport default when unset
    pub timeout_secs: Option<u64>,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the base URI taken from `HITBTC_API_URI` if set
    pub fn from_env() -> Self {
        match std::env::var(BASE_URI_ENV) {
            Ok(uri) if !uri.is_empty() => Self::default().with_base_uri(uri),
            _ => Self::default(),
        }
    }

    /// Set base URI
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_key_and_secret_required() {
        assert!(matches!(
            HitbtcRestClient::new("", "fakeapisecret"),
            Err(RestError::Auth(AuthError::MissingKey))
        ));
        assert!(matches!(
            HitbtcRestClient::new("fakeapikey", ""),
            Err(RestError::Auth(AuthError::MissingSecret))
        ));
    }

    #[test]
    fn test_default_base_uri() {
        let client = HitbtcRestClient::new("fakeapikey", "fakeapisecret").unwrap();
        assert_eq!(client.base_uri().as_str(), DEFAULT_BASE_URI);
        assert!(client.is_secure());
    }

    #[test]
    fn test_insecure_base_uri_is_accepted() {
        let creds = Credentials::new("fakeapikey", "fakeapisecret").unwrap();
        let config = ClientConfig::new().with_base_uri("http://api.hitbtc.com/api/1/");
        let client = HitbtcRestClient::with_config(creds, config).unwrap();
        assert!(!client.is_secure());
    }

    /// Log sink shared between the subscriber and the test
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn warnings(&self) -> Vec<String> {
            let text = String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned();
            text.lines()
                .filter(|line| line.contains("WARN"))
                .map(str::to_string)
                .collect()
        }
    }

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn build_logged(base_uri: &str) -> (HitbtcRestClient, Vec<String>) {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let client = tracing::subscriber::with_default(subscriber, || {
            let creds = Credentials::new("fakeapikey", "fakeapisecret").unwrap();
            let config = ClientConfig::new().with_base_uri(base_uri);
            HitbtcRestClient::with_config(creds, config).unwrap()
        });
        (client, captured.warnings())
    }

    #[test]
    fn test_insecure_base_uri_warns_once() {
        let (client, warnings) = build_logged("http://api.hitbtc.com/api/1/");

        assert!(!client.is_secure());
        assert_eq!(warnings.len(), 1, "warnings: {:?}", warnings);
        assert!(warnings[0].contains("insecure API endpoint"));
        assert!(warnings[0].contains("uri=http://api.hitbtc.com/api/1/"));
        assert!(warnings[0].contains("suggested=https://api.hitbtc.com/api/1/"));
    }

    #[test]
    fn test_https_base_uri_does_not_warn() {
        let (client, warnings) = build_logged(DEFAULT_BASE_URI);

        assert!(client.is_secure());
        assert!(warnings.is_empty(), "warnings: {:?}", warnings);
    }

    #[test]
    fn test_invalid_base_uri_is_rejected() {
        let creds = Credentials::new("fakeapikey", "fakeapisecret").unwrap();
        let config = ClientConfig::new().with_base_uri("api.hitbtc.com");
        assert!(matches!(
            HitbtcRestClient::with_config(creds, config),
            Err(RestError::InvalidBaseUri(_))
        ));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_uri("https://api.demo.hitbtc.com/api/2/")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.base_uri, "https://api.demo.hitbtc.com/api/2/");
        assert_eq!(config.timeout_secs, Some(60));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_client_config_from_env() {
        // Only test touching this variable; set and unset in sequence
        std::env::set_var(BASE_URI_ENV, "https://api.demo.hitbtc.com/api/2/");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_uri, "https://api.demo.hitbtc.com/api/2/");
        assert_eq!(config.timeout_secs, None);

        std::env::set_var(BASE_URI_ENV, "");
        assert_eq!(ClientConfig::from_env().base_uri, DEFAULT_BASE_URI);

        std::env::remove_var(BASE_URI_ENV);
        assert_eq!(ClientConfig::from_env().base_uri, DEFAULT_BASE_URI);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = HitbtcRestClient::new("fakeapikey", "fakeapisecret").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("fakeapisecret"));
        assert!(debug.contains("api.hitbtc.com"));
    }
}
