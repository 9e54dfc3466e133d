pub mod chat_route;
pub mod health_route;
pub mod scrape_route;
