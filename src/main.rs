use clap::Parser;
use figment::Figment;
use log::info;
use rocket::{Build, Rocket};

use std::error::Error;

mod cli;
mod config;
mod cors;
mod data;
mod internal_error;
mod logging;
mod todo;


use cli::CliConfig;
use config::app_config::AppConfig;
use config::figment::FigmentExt;
use cors::{cors_routes, Cors};
use internal_error::error_catchers;
use todo::endpoints::todo_routes;
use todo::store::TodoStore;

pub fn build_rocket(figment: Figment) -> Result<Rocket<Build>, figment::Error> {
    let config: AppConfig = figment.extract()?;
    let store = TodoStore::new(config.todo_file);
    info!("storing todos in {}", store.path().display());

    let figment = figment.merge(("limits.json", config.max_json_size));

    Ok(rocket::custom(figment)
        .manage(data::store_handle(store))
        .attach(Cors::new(config.cors_origins))
        .mount("/", todo_routes())
        .mount("/", cors_routes())
        .register("/", error_catchers()))
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging();

    let cli_config = CliConfig::parse();
    let figment = rocket::Config::figment().setup_app_config(&cli_config.config_file);

    build_rocket(figment)?.launch().await?;

    Ok(())
}
