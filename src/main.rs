#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod app;
mod cache;
mod config;
mod error;
mod fetch;
mod menu;
mod parse;
mod render;
mod sources;
mod tui;

use chrono::{Local, NaiveDate};

use crate::{app::App, cache::MenuCache, fetch::make_client};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let client = make_client()?;
    let mut app = App::new(MenuCache::new(sources::all()), today());
    let mut terminal = tui::Terminal::enter()?;
    let res = tui::run(&mut app, &mut terminal, &client, today).await;
    // leave the alternate screen before anything is printed
    drop(terminal);
    if let Err(e) = &res {
        log::error!("{e}");
    }
    res
}
