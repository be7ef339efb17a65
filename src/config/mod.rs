use config::{Config, ConfigError};
use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct DbConfig {
    pub location: String,
}

/// where uploaded files live. Relative file paths stored on uploaded file records are resolved against this
#[derive(Deserialize, Clone)]
pub struct UploadConfig {
    pub directory: String,
}

#[derive(Deserialize, Clone)]
pub struct LogConfig {
    /// one of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    /// if present, log output is also appended to this file
    pub file: Option<String>,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
pub struct NoteServerConfig {
    pub database: DbConfig,
    pub uploads: UploadConfig,
    pub log: LogConfig,
}

impl LogConfig {
    /// unknown levels fall back to info
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Parses the config file located at ./NoteServer.toml, if it exists.
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> NoteServerConfig {
    let builder = Config::builder()
        .add_source(config::File::with_name("./NoteServer.toml"))
        .build();
    let settings = match builder {
        Ok(settings) => settings,
        // some errors are fine, such as not found
        Err(ConfigError::Foreign(e)) if e.to_string().contains("not found") => {
            log::warn!("No config file found. Continuing startup...");
            return CONFIG_DEFAULT.clone();
        }
        Err(e) => {
            // basically everything else is unrecoverable, though
            log::error!("Failed to parse config file. Exception is {e}");
            panic!("Failed to parse config file. Exception is {e}");
        }
    };
    settings.try_deserialize().unwrap_or_else(|e| {
        log::warn!("Config file is incomplete ({e}), falling back to defaults");
        CONFIG_DEFAULT.clone()
    })
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static NOTE_SERVER_CONFIG: Lazy<NoteServerConfig> = Lazy::new(parse_config);
static CONFIG_DEFAULT: Lazy<NoteServerConfig> = Lazy::new(|| NoteServerConfig {
    database: DbConfig {
        location: "./db.sqlite".to_string(),
    },
    uploads: UploadConfig {
        directory: "./uploads".to_string(),
    },
    log: LogConfig {
        level: "info".to_string(),
        file: None,
    },
});
