use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

mod config;
mod model;
mod render;
mod session;
mod spec;
mod telemetry;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "apiform")]
#[command(about = "Form generator for OpenAPI operations", long_about = None)]
struct Cli {
    /// Specification location: http(s) URL or local file.
    #[arg(long, global = true)]
    spec: Option<String>,

    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Methods to list, in order (repeatable). Replaces the default POST, GET, PUT, DELETE.
    #[arg(long = "method", global = true)]
    methods: Vec<spec::Method>,

    /// Request body media type whose object properties become form fields.
    #[arg(long, global = true)]
    media_type: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable operations.
    List {
        /// Case-insensitive substring filter on the label.
        #[arg(long)]
        filter: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print the form fields derived for one operation.
    Fields {
        /// Operation label, e.g. "/v1/charges (POST)".
        #[arg(long)]
        operation: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the raw operation object.
    Show {
        #[arg(long)]
        operation: String,
    },

    /// Fill in the form for one operation and emit the collected values.
    Submit {
        #[arg(long)]
        operation: String,

        /// NAME=VALUE (repeatable).
        #[arg(long = "value")]
        values: Vec<String>,
    },

    /// Generate the interactive form page.
    Render {
        #[arg(short = 'o', long)]
        out: PathBuf,
    },
}

#[derive(Serialize)]
struct ListEntry<'a> {
    label: String,
    path: &'a str,
    method: spec::Method,
    summary: Option<&'a str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Resolve configuration.
    let mut cfg = config::load_config(cli.config.as_deref())?;
    cfg.apply(config::Overrides {
        spec: cli.spec,
        methods: cli.methods,
        media_type: cli.media_type,
        log_json: cli.log_json,
    });
    telemetry::init(&cfg.telemetry)?;

    // 2) Load the specification.
    let source = cfg.source();
    let mut session = session::Session::new(cfg.policy.clone());
    session.load(&source, cfg.timeout())?;
    tracing::debug!(state = session.state().name(), source = %source, "session ready");

    // 3) Run the command.
    match cli.cmd {
        Commands::List { filter, json } => {
            let query = filter.unwrap_or_default();
            let items: Vec<_> = session
                .options()
                .into_iter()
                .filter(|item| item.matches(&query))
                .collect();

            if json {
                let entries: Vec<ListEntry<'_>> = items
                    .iter()
                    .map(|item| ListEntry {
                        label: item.label(),
                        path: item.path,
                        method: item.method,
                        summary: item.operation.summary(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for item in &items {
                    println!("{}", item.label());
                }
            }
        }
        Commands::Fields { operation, json } => {
            let fields = session.select(&operation)?;
            if json {
                let views: Vec<render::page::FieldView> =
                    fields.iter().map(render::page::FieldView::from).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for field in fields {
                    let required = if field.required { "required" } else { "optional" };
                    println!("{}\t{}", render::field_label(field), required);
                }
            }
        }
        Commands::Show { operation } => {
            session.select(&operation)?;
            if let Some((_, op)) = session.selected() {
                println!("{}", serde_json::to_string_pretty(&op.raw)?);
            }
        }
        Commands::Submit { operation, values } => {
            session.select(&operation)?;
            let values = values
                .iter()
                .map(|v| render::parse_assignment(v))
                .collect::<Result<Vec<_>>>()?;
            for (name, value) in session.submit(&values)? {
                println!("{}={}", name, value);
            }
        }
        Commands::Render { out } => {
            let Some(document) = session.document() else {
                anyhow::bail!("no specification loaded");
            };
            let data = render::build_page_data(document, session.policy(), &source.to_string());
            let html = render::render_html_page(&data)?;
            std::fs::write(&out, html)?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}
