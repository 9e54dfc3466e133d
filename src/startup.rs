use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{chat_route, health_route, scrape_route},
    services::{AnswerEngine, PageFetcher},
};

pub fn run(
    listener: TcpListener,
    fetcher: PageFetcher,
    answer_engine: AnswerEngine,
) -> Result<Server, std::io::Error> {
    let fetcher = web::Data::new(fetcher);
    let answer_engine = web::Data::new(answer_engine);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(
                web::scope("/api")
                    .service(health_route::health)
                    .service(scrape_route::scrape)
                    .service(chat_route::chat),
            )
            .app_data(fetcher.clone())
            .app_data(answer_engine.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
