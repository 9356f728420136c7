extern crate actix_files;
extern crate actix_multipart;
extern crate actix_web;
extern crate bytes;
extern crate chrono;
extern crate dotenv;
extern crate env_logger;
extern crate futures_util;
extern crate hex;
extern crate jsonwebtoken;
extern crate log;
extern crate rand;
extern crate serde;
extern crate sha2;
extern crate sqlx;
extern crate thiserror;
extern crate tokio;

mod config;
mod context;
mod core;
mod database;
mod error;
mod handlers;
mod impls;
mod middlewares;
pub mod request;
pub mod response;
mod routes;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::core::auth::AdminGate;
use crate::database::sqlx::PgSqlxManager;
use crate::handlers::upload::UPLOAD_URL_PREFIX;
use crate::impls::storers::local::LocalStorer;
use crate::impls::tokener::jwt::JWT;

#[actix_web::main]
async fn main() -> Result<(), error::Error> {
    let args: Vec<String> = std::env::args().collect();
    if let [_, cmd, password] = args.as_slice() {
        if cmd == "hash-password" {
            let salt = core::auth::random_salt();
            println!("{}={}", config::ADMIN_PASSWORD_SALT, salt);
            println!("{}={}", config::ADMIN_PASSWORD_HASH, core::auth::hash_password(password, &salt));
            return Ok(());
        }
    }

    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::from_env()?;

    let pool = PgPoolOptions::new().max_connections(config.max_connections).connect(&config.database_url).await?;
    let manager = PgSqlxManager::new(pool);
    manager.migrate().await?;
    std::fs::create_dir_all(&config.upload_path)?;

    let gate = AdminGate::new(config.admin_credential(), config.session_ttl);
    let secret = config.jwt_secret.clone();
    let upload_path = config.upload_path.clone();
    log::info!("listening on {}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(manager.clone()))
            .app_data(Data::new(gate.clone()))
            .app_data(Data::new(JWT::new(secret.clone())))
            .app_data(Data::new(LocalStorer::new(&upload_path)))
            .configure(|cfg| routes::configure::<PgSqlxManager, LocalStorer>(cfg, secret.clone()))
            .service(Files::new(UPLOAD_URL_PREFIX, &upload_path))
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;
    Ok(())
}
