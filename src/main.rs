#[macro_use]
extern crate rocket;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Rocket};

use handler::{
    api_handler::api_version,
    export_handler::export_tree,
    file_handler::{delete_file, download_file, get_file, move_file, rename_file, save_file},
    folder_handler::{
        create_folder, delete_folder, get_folder, get_tree, move_folder, rename_folder,
    },
};

use crate::model::error::ErrorKind;
use crate::model::response::ErrorMessage;
use crate::repository::initialize_db;

mod config;
mod guard;
mod handler;
mod model;
mod repository;
mod service;
mod store;
#[cfg(test)]
mod test;
mod util;

#[catch(400)]
fn bad_request() -> Json<ErrorMessage> {
    ErrorMessage::new(ErrorKind::Validation, "The request could not be read.")
}

#[catch(401)]
fn unauthorized() -> Json<ErrorMessage> {
    ErrorMessage::new(ErrorKind::Unauthorized, "Bad Credentials")
}

#[catch(404)]
fn not_found() -> Json<ErrorMessage> {
    ErrorMessage::new(ErrorKind::NotFound, "The requested resource could not be found.")
}

/// rocket raises 422 for an id that isn't a number, or a body field of the wrong type
#[catch(422)]
fn unprocessable() -> (Status, Json<ErrorMessage>) {
    (
        Status::BadRequest,
        ErrorMessage::new(ErrorKind::Validation, "The request contained an invalid id or field."),
    )
}

#[catch(500)]
fn internal_error() -> Json<ErrorMessage> {
    ErrorMessage::new(ErrorKind::Storage, "Failed to complete the request. Check server logs for details")
}

#[launch]
fn rocket() -> Rocket<Build> {
    #[cfg(not(test))]
    if let Err(e) = setup_logger() {
        eprintln!("Failed to set up logging: {e}");
    }
    if let Err(e) = initialize_db() {
        log::error!("Failed to initialize database. Error is {e:?}");
        panic!("Failed to initialize database: {e}");
    }
    rocket::build()
        .register(
            "/",
            catchers![bad_request, unauthorized, not_found, unprocessable, internal_error],
        )
        .mount("/api", routes![api_version])
        .mount(
            "/files",
            routes![
                get_tree,
                get_folder,
                create_folder,
                rename_folder,
                move_folder,
                delete_folder,
                save_file,
                get_file,
                download_file,
                rename_file,
                move_file,
                delete_file,
                export_tree
            ],
        )
}

#[cfg(not(test))]
fn setup_logger() -> Result<(), fern::InitError> {
    use std::time::SystemTime;

    let log_config = &crate::config::NOTE_SERVER_CONFIG.log;
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log_config.level_filter())
        // rocket's own request logging is noisy at debug
        .level_for("rocket", log::LevelFilter::Warn)
        .chain(std::io::stdout());
    if let Some(file) = &log_config.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}
