mod runtime;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use quill::cli::CliArgs;
use quill::config::EditorConfig;
use quill::model::AppModel;
use quill::theme::load_configured_scheme;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    quill::tracing::init();

    let mut config = match &args.config {
        Some(path) => EditorConfig::load_from(path)?,
        None => EditorConfig::load(),
    };
    args.apply_to(&mut config);

    // A broken color scheme is fatal: no session starts without one
    let scheme = load_configured_scheme(config.color_scheme.as_deref())
        .context("Failed to initialise color scheme")?;

    let model = AppModel::new(config, scheme, (800, 600));

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e.context("Editor stopped")),
        None => Ok(()),
    }
}
