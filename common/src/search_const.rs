//! Constants shared by the client and the mock search service.

/// Key under which the last committed filter set is kept in local storage.
pub const STORAGE_KEY: &str = "search-params";

pub const DEFAULT_SEARCH_API_URL: &str = "http://localhost:8000";
pub const SEARCH_PATH: &str = "/search";
pub const HEALTH_PATH: &str = "/health";

pub const SEARCH_OK_MESSAGE: &str = "검색이 완료되었습니다.";
pub const SEARCH_FAILED_MESSAGE: &str = "검색 처리 중 오류가 발생했습니다.";
