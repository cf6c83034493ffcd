// src/config/consts.rs

// Net config
pub const TARGET_URL: &str = "https://quotes.toscrape.com/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Extraction: (tag, class) pairs
pub const CONTAINER_QUERY: (&str, &str) = ("div", "quote");
pub const TEXT_QUERY: (&str, &str) = ("span", "text");
pub const AUTHOR_QUERY: (&str, &str) = ("small", "author");
pub const TEXT_FIELD: &str = "text";
pub const AUTHOR_FIELD: &str = "author";

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const DEFAULT_FILE: &str = "quotes";
pub const CSV_EXT: &str = "csv";
pub const CSV_SEP: char = ',';

// Logging
pub const LOG_FILTER: &str = "quote_scrape=info";
