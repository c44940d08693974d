use clap::{Args, Parser, Subcommand};
use framecode_codegen::RenderSettings;
use framecode_scene::Scene;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "framecode")]
#[command(about = "framecode — design scene to HTML/JSX converter")]
#[command(version)]
struct Cli {
    /// Log rendering decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a scene .json file to markup
    Build {
        /// Input scene file
        path: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<String>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the computed text styles of a scene
    Styles {
        /// Input scene file
        path: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Check a scene .json file for errors without generating output
    Check {
        /// Input scene file
        path: String,
    },
}

#[derive(Args, Default)]
struct RenderArgs {
    /// JSON file with `layerName`, `jsx` and `optimizeLayout` settings
    #[arg(long, env = "FRAMECODE_SETTINGS")]
    settings: Option<String>,

    /// Emit JSX instead of HTML
    #[arg(long, env = "FRAMECODE_JSX")]
    jsx: bool,

    /// Add a data-layer attribute with each node's name
    #[arg(long, env = "FRAMECODE_LAYER_NAME")]
    layer_name: bool,

    /// Use inferred auto-layout instead of absolute positioning
    #[arg(long, env = "FRAMECODE_OPTIMIZE_LAYOUT")]
    optimize_layout: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build { path, out, render } => cmd_build(&path, out.as_deref(), &render),
        Command::Styles { path, render } => cmd_styles(&path, &render),
        Command::Check { path } => cmd_check(&path),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_scene(path: &str) -> Scene {
    let source = read_source(path);
    match Scene::from_json(&source) {
        Ok(scene) => {
            debug!(path, nodes = scene.node_count(), "loaded scene");
            scene
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn load_settings(args: &RenderArgs) -> RenderSettings {
    let base = match &args.settings {
        Some(path) => {
            let source = read_source(path);
            match serde_json::from_str::<RenderSettings>(&source) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error in settings {path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => RenderSettings::default(),
    };

    let settings = merge_settings(base, args);
    debug!(?settings, "render settings");
    settings
}

/// Flags and their env vars only switch options on; they never turn off
/// what the settings file enabled.
fn merge_settings(mut settings: RenderSettings, args: &RenderArgs) -> RenderSettings {
    settings.jsx |= args.jsx;
    settings.layer_name |= args.layer_name;
    settings.optimize_layout |= args.optimize_layout;
    settings
}

fn cmd_build(path: &str, out: Option<&str>, args: &RenderArgs) {
    let scene = load_scene(path);
    let settings = load_settings(args);

    let output = framecode_codegen::generate(&scene.nodes, &settings);

    match out {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, format!("{}\n", output.markup)) {
                eprintln!("Error writing {out_path}: {e}");
                std::process::exit(1);
            }
            info!(out = out_path, text_segments = output.text_styles.len(), "wrote markup");
            eprintln!("Built: {out_path}");
        }
        None => println!("{}", output.markup),
    }
}

fn cmd_styles(path: &str, args: &RenderArgs) {
    let scene = load_scene(path);
    let settings = load_settings(args);

    let output = framecode_codegen::generate(&scene.nodes, &settings);
    println!("{}", output.text_styles.report(settings.jsx));
}

fn cmd_check(path: &str) {
    let scene = load_scene(path);
    eprintln!("OK: {path} ({} nodes)", scene.node_count());
}
