#![allow(dead_code)]

use std::sync::Once;

use bcap::telemetry::tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub(super) const CHROME_64: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36";
pub(super) const CHROME_HEADLESS_64: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) HeadlessChrome/64.0.3282.119 Safari/537.36";
pub(super) const CHROME_IOS_10_3: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 10_3 like Mac OS X) AppleWebKit/602.1.50 (KHTML, like Gecko) CriOS/64.0.3282.112 Mobile/14E5239e Safari/602.1";
pub(super) const OPERA_51: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.186 Safari/537.36 OPR/51.0.2830.40";
pub(super) const VIVALDI_1_94: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/63.0.3239.135 Safari/537.36 Vivaldi/1.94.1030.15";
pub(super) const SAMSUNG_6_4: &str = "Mozilla/5.0 (Linux; Android 8.0.0; SAMSUNG SM-G950F Build/R16NW) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/6.4 Chrome/56.0.2924.87 Mobile Safari/537.36";
pub(super) const EDGE_16: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36 Edge/16.16299";
pub(super) const IE_11: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko";
pub(super) const FIREFOX_40: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101 Firefox/40.0";
pub(super) const FIREFOX_58: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.13; rv:58.0) Gecko/20100101 Firefox/58.0";
pub(super) const FIREFOX_60: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:60.0) Gecko/20100101 Firefox/60.0";
pub(super) const SAFARI_11_0: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_3) AppleWebKit/604.5.6 (KHTML, like Gecko) Version/11.0.3 Safari/604.5.6";
pub(super) const SAFARI_11_1: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.1 Safari/605.1.15";
pub(super) const MOBILE_SAFARI_IOS_11_3: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 11_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.0 Mobile/15E148 Safari/604.1";
pub(super) const CURL: &str = "curl/7.58.0";

/// A `polymer.json` with the builds of the polymer starter kit.
pub(super) const POLYMER_JSON: &str = r#"{
  "entrypoint": "index.html",
  "shell": "src/my-app.js",
  "builds": [
    { "name": "es5-bundled", "js": { "compile": "es5", "minify": true }, "bundle": true },
    { "name": "es6-bundled", "browserCapabilities": ["es2015"], "bundle": true },
    {
      "name": "esm-bundled",
      "basePath": "/esm-bundled/",
      "browserCapabilities": ["es2015", "modules"],
      "bundle": true
    }
  ]
}"#;

static INIT_TRACING_ONCE: Once = Once::new();

/// Initialize tracing for integration tests.
pub(super) fn init_tracing() {
    INIT_TRACING_ONCE.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::TRACE.into())
                    .from_env_lossy(),
            )
            .try_init();
    });
}
