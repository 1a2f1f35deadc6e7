use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{Registry, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;

use thiserror::Error;
use anyhow::Result;
use crate::log::LogError::{InitLogTracerError, SetGlobalDefaultError};

pub const LOG_DIRECTORY: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "lighting_lessons.log";
const DEFAULT_FILTER: &str = "INFO";

/// Installs the bunyan JSON subscriber writing to a daily rolling file.
///
/// The returned guard flushes the non-blocking writer when dropped, so the
/// caller has to hold on to it for as long as it wants log output.
pub fn init_logger() -> Result<WorkerGuard> {
    LogTracer::init().map_err(|e| {
        InitLogTracerError {
            source: e
        }
    })?;

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let file_appender = tracing_appender::rolling::daily(LOG_DIRECTORY, LOG_FILE_PREFIX);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer);
    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        SetGlobalDefaultError {
            source: e
        }
    })?;

    Ok(guard)
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Error initializing log-forwarder for tracing")]
    InitLogTracerError {
        source: tracing_log::log_tracer::SetLoggerError
    },
    #[error("Error setting global default subscriber for tracing")]
    SetGlobalDefaultError {
        source: tracing::subscriber::SetGlobalDefaultError
    }
}
