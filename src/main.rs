#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod lookup;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing::{error, info};

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::{
    infra::config::Config,
    util::{
        init_logging,
        version::{version_label, APP_NAME},
    },
};

fn main() {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    init_logging();
    info!(version = %version_label(), "starting {APP_NAME}");

    let args: Vec<String> = std::env::args().collect();
    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "configuration invalid");
            std::process::exit(1);
        }
    };

    let ctx = match app::build_context(&config) {
        Ok(ctx) => ctx,
        Err(err) => {
            error!(error = %err, "failed to initialise services");
            std::process::exit(1);
        }
    };

    let builder = LaunchBuilder::new().with_context(ctx);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
