use eyre::Context;
use log::{error, info};
use serde::Deserialize;
use std::{fmt::Write as _, path::Path};
use tiny_http::{Header, Response};

mod macros;
mod widget;

use widget::dropdown::{self, Dropdown};

pub const NAME: &str = "dropdown-nav";

#[derive(Debug, Clone, Deserialize)]
struct Config {
    bind: Option<String>,
    #[serde(flatten)]
    dropdown: Dropdown,
}

fn load_config(path: impl AsRef<Path>) -> eyre::Result<Config> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read {path:?} to string"))?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    let config_path = dirs::config_dir()
        .expect("System should have a config directory")
        .join(NAME)
        .join("config.toml");
    let config = load_config(&config_path)?;
    let bind = config
        .bind
        .clone()
        .unwrap_or_else(|| "0.0.0.0:8000".to_string());

    // The widget is pure in its input, so one render covers every request.
    let page = generate_page(&dropdown::render(&config.dropdown));
    let server = tiny_http::Server::http(&bind)
        .map_err(|e| eyre::eyre!("Failed to bind {bind}: {e}"))?;
    info!("Serving on {bind}");

    loop {
        // blocks until the next request is received
        let request = match server.recv() {
            Ok(rq) => rq,
            Err(e) => {
                error!("error: {e}");
                break;
            }
        };
        let path = request.url().split('?').next().unwrap_or("");

        match path {
            "/" => {
                if let Err(e) = request.respond(
                    Response::from_string(page.clone()).with_header(
                        "Content-Type: text/html"
                            .parse::<Header>()
                            .expect("valid header"),
                    ),
                ) {
                    error!("Failed to respond: {e}");
                }
            }
            _ => {
                let _ = request.respond(Response::empty(404));
            }
        }
    }

    Ok(())
}

lazy_static::lazy_static! {
    static ref PAGE_HEAD: String = render_head();
}

fn render_head() -> String {
    const TITLE: &str = "Navigation Preview";
    let mut out = String::new();
    writeln!(out, "<head>").unwrap();
    {
        writeln!(out, r#"<meta charset="utf-8" />"#).unwrap();
        writeln!(
            out,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        )
        .unwrap();
        writeln!(out, r#"<title>{TITLE}</title>"#).unwrap();
        writeln!(out, "<style>\n{}\n</style>", dropdown::CSS).unwrap();
    }
    writeln!(out, "</head>").unwrap();
    out
}

fn generate_page(widget_html: &str) -> String {
    let mut buf = String::new();
    writeln!(buf, "<!DOCTYPE html>").unwrap();
    writeln!(buf, r#"<html lang="en-US">"#).unwrap();
    writeln!(buf, "{}", *PAGE_HEAD).unwrap();
    writeln!(buf, "<body>").unwrap();
    {
        writeln!(buf, "{widget_html}").unwrap();
        writeln!(buf, "{}", crate::node! { script => dropdown::JS }).unwrap();
    }
    writeln!(buf, "</body>").unwrap();
    writeln!(buf, "</html>").unwrap();
    buf
}
