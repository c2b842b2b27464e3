//! HTTP route handlers.

pub mod health;
pub mod search;

pub async fn root() -> &'static str {
    "Hello from the mock search service!"
}
