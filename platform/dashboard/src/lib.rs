pub mod config;
pub mod routes;
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tickerboard::dashboard::Dashboard;

pub fn run(listener: TcpListener, dashboard: Dashboard) -> Result<Server, std::io::Error> {
    let dashboard = web::Data::new(dashboard);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(dashboard.clone())
            .service(routes::health::check)
            .service(routes::page::index)
            .service(routes::page::intervals)
            .service(routes::update::update)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
