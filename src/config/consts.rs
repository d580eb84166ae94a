// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://lnb.com.br";
pub const USER_AGENT: &str = "nbb_scrape/0.3";
pub const FETCH_TIMEOUT_SECS: u64 = 20;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Source page literals
pub const REPORT_LINK_SUFFIX: &str = "VER RELATÓRIO";
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";
pub const SEASON_COLUMN: &str = "season";

// GUI
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
pub const ROW_HEIGHT: f32 = 20.0;
