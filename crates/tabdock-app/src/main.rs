mod cli;
mod outline;
mod script;

use std::path::Path;

use tabdock_common::{DockError, Orientation, Rect};
use tabdock_config::{DockConfig, LayoutConfig};
use tabdock_layout::{BlueprintNode, DockMetrics, HeadlessHost, LayoutBlueprint, TabDock, TabInfo};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use outline::OutlinePrinter;
use script::Script;

fn load_config(path: Option<&Path>) -> DockConfig {
    let loaded = match path {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            tabdock_config::toml_loader::load_from_path(path).and_then(|config| {
                tabdock_config::validation::validate(&config)?;
                Ok(config)
            })
        }
        None => tabdock_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DockConfig::default()
    })
}

fn metrics_from(layout: &LayoutConfig) -> DockMetrics {
    DockMetrics {
        sep_height: layout.sep_height,
        bar_margin: layout.bar_margin,
        tab_margin: layout.tab_margin,
        folder_margin: layout.folder_margin,
        icon_size: layout.icon_size,
        min_width: layout.min_width,
        min_height: layout.min_height,
        min_tab_width: layout.min_tab_width,
    }
}

/// Commands on the left, the main views stacked in the middle, state on
/// the right.
fn default_blueprint() -> LayoutBlueprint {
    let folder = |tabs: &[(&str, &str)]| BlueprintNode::Folder {
        weight: tabdock_layout::UNSIZED,
        tabs: tabs.iter().map(|(id, label)| TabInfo::new(*id, *label)).collect(),
    };
    LayoutBlueprint {
        orientation: Orientation::Horizontal,
        children: vec![
            folder(&[("commands", "Commands")]),
            BlueprintNode::Group {
                weight: tabdock_layout::UNSIZED,
                children: vec![
                    folder(&[
                        ("framebuffer", "Framebuffer"),
                        ("textures", "Textures"),
                        ("geometry", "Geometry"),
                    ]),
                    folder(&[("report", "Report"), ("log", "Log")]),
                ],
            },
            folder(&[("state", "State"), ("memory", "Memory")]),
        ],
    }
}

fn load_blueprint(path: Option<&Path>) -> Result<LayoutBlueprint, DockError> {
    let Some(path) = path else {
        return Ok(default_blueprint());
    };
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DockError::Other(format!("failed to parse layout {}: {e}", path.display())))
}

fn run(args: &cli::Args, config: &DockConfig) -> Result<String, DockError> {
    let blueprint = load_blueprint(args.layout.as_deref())?;
    let mut dock = TabDock::from_blueprint(
        HeadlessHost::default(),
        metrics_from(&config.layout),
        &blueprint,
    )?;
    dock.set_bounds(Rect::new(0, 0, args.width, args.height));

    if let Some(path) = &args.script {
        let script = Script::load(path)?;
        for line in script.run(&mut dock)? {
            println!("{line}");
        }
    }

    if args.snapshot {
        let snapshot = dock
            .snapshot()
            .ok_or_else(|| DockError::Other("empty layout".into()))?;
        return serde_json::to_string_pretty(&snapshot)
            .map_err(|e| DockError::Other(format!("failed to serialize layout: {e}")));
    }

    let mut printer = OutlinePrinter::default();
    dock.visit(&mut printer);
    Ok(printer.finish())
}

fn main() {
    let args = cli::parse();
    let config = load_config(args.config.as_deref());

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_filter().to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("tabdock v{} starting", env!("CARGO_PKG_VERSION"));

    if args.print_config {
        println!("{}", tabdock_config::config_to_json(&config));
        return;
    }

    match run(&args, &config) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_follow_config() {
        let layout = LayoutConfig {
            folder_margin: 7,
            icon_size: 16,
            ..LayoutConfig::default()
        };
        let metrics = metrics_from(&layout);
        assert_eq!(metrics.folder_margin, 7);
        assert_eq!(metrics.icon_size, 16);
        assert_eq!(metrics.min_height, DockMetrics::default().min_height);
    }

    #[test]
    fn default_config_gives_default_metrics() {
        assert_eq!(
            metrics_from(&LayoutConfig::default()),
            DockMetrics::default()
        );
    }

    #[test]
    fn default_blueprint_is_valid() {
        let blueprint = default_blueprint();
        assert!(blueprint.validate().is_ok());
        assert_eq!(blueprint.tab_count(), 8);
    }

    #[test]
    fn layout_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(
            &path,
            r#"
orientation = "vertical"

[[children]]
kind = "folder"
tabs = [{ id = "log", label = "Log" }]
"#,
        )
        .unwrap();
        let blueprint = load_blueprint(Some(&path)).unwrap();
        assert_eq!(blueprint.orientation, Orientation::Vertical);
        assert_eq!(blueprint.tab_count(), 1);
    }

    #[test]
    fn missing_layout_file_is_io_error() {
        let err = load_blueprint(Some(Path::new("/tmp/no_such_tabdock_layout.toml"))).unwrap_err();
        assert!(matches!(err, DockError::Io(_)));
    }
}
