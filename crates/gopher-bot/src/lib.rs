//! Gopher bot library: command grammar, handlers and message dispatch.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod intent;

use crate::commands::{CommandHandler, GopherHandler, GophersHandler, Responder};
use gopher_catalog::{Catalog, Resolver};

/// Responder wired with every command the bot understands.
pub fn default_responder(catalog: Catalog) -> Responder {
    let handlers: Vec<Box<dyn CommandHandler>> = vec![
        Box::new(GopherHandler::new(Resolver::new(catalog.clone()))),
        Box::new(GophersHandler::new(catalog)),
    ];

    Responder::new(handlers)
}
