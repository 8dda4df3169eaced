//! Ensayo: page-object browser testing for the TechGlobal Training app
//!
//! Ensayo (Spanish: "rehearsal/test") drives the TechGlobal Training web
//! application through typed page objects over an abstract browser
//! driver, and runs a small tagged suite of end-to-end cases with
//! fail-fast semantics.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌────────────┐    ┌──────────────────┐
//! │ Test Case  │───►│ Page       │───►│ BrowserDriver    │
//! │ (tagged)   │    │ Object     │    │ (CDP or scripted)│
//! └────────────┘    └────────────┘    └──────────────────┘
//!       │
//!       ▼
//! ┌────────────┐    ┌────────────┐
//! │ Runner     │───►│ RunReport  │
//! └────────────┘    └────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use ensayo::{CaseContext, Runner, SuiteConfig, TagFilter};
//! use ensayo::driver::DriverConfig;
//! use ensayo::suites;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let config = SuiteConfig::default();
//! let driver = Arc::new(suites::scripted_driver(&config, DriverConfig::default()));
//! let ctx = CaseContext::new(driver, config)
//!     .with_credentials(suites::demo_credentials());
//!
//! let report = Runner::new(suites::SUITE_NAME)
//!     .with_cases(suites::all_cases())
//!     .with_filter(TagFilter::new(["regression"]))
//!     .run(&ctx)
//!     .await;
//! assert!(report.all_passed());
//! # }
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod assertion;
pub mod case;
#[cfg(feature = "browser")]
pub mod cdp;
pub mod config;
pub mod driver;
pub mod fixture;
pub mod locator;
pub mod mock;
pub mod page;
pub mod reporter;
pub mod result;
pub mod runner;
pub mod suites;

pub use case::{CaseContext, TestCase, TestStatus};
#[cfg(feature = "browser")]
pub use cdp::CdpDriver;
pub use config::SuiteConfig;
pub use driver::{BrowserDriver, DriverConfig, ElementHandle};
pub use fixture::Credentials;
pub use locator::{Locator, Selector};
pub use mock::MockDriver;
pub use page::{HomePage, LoginPage, PageObject};
pub use reporter::{CaseReport, RunReport};
pub use result::{EnsayoError, EnsayoResult};
pub use runner::{Runner, TagFilter};
