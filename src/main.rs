use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use auctions_service::db::establish_connection_pool;
use auctions_service::models::config::ServerConfig;
use auctions_service::repository::DieselRepository;
use auctions_service::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default().separator("__"))
        .build()
        .map_err(io::Error::other)?;
    let server_config: ServerConfig = settings.try_deserialize().map_err(io::Error::other)?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(io::Error::other)?;
    let repo = DieselRepository::new(pool);
    let auth_config = server_config.auth.clone();

    log::info!("Starting auctions service on {}", server_config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(auth_config.clone()))
            .configure(routes::configure)
    })
    .bind(&server_config.bind_address)?
    .run()
    .await
}
