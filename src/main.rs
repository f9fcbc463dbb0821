mod config;
mod data;
mod diagnostics;
mod render;
mod view;

use anyhow::bail;
use chrono::Utc;
use clap::Parser;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "safety-map")]
#[command(about = "Generate a static HTML risk map with adjustable avoidance radii", long_about = None)]
struct Cli {
    /// Output HTML file.
    #[arg(short = 'o', long, default_value = config::DEFAULT_OUTPUT)]
    out: String,

    /// JSON array of locations to use instead of the built-in table.
    #[arg(long)]
    locations: Option<String>,

    #[arg(long, default_value_t = config::INNER_RADIUS_KM)]
    inner_km: f64,

    #[arg(long, default_value_t = config::OUTER_RADIUS_KM)]
    outer_km: f64,

    #[arg(long, default_value_t = config::AWARE_RADIUS_KM)]
    aware_km: f64,

    /// Link shown in the sidebar footer.
    #[arg(long)]
    contact_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let message = run(Cli::parse())?;
    diagnostics::ok(message);
    Ok(())
}

/// Validate, render, self-check and write. Returns the confirmation line.
fn run(cli: Cli) -> Result<String> {
    // 1) Location table + radii, validated up front.
    let records = match &cli.locations {
        Some(path) => data::load_locations(path)?,
        None => data::builtin(),
    };
    let locations = data::validate(records)?;

    let radii = config::RadiusConfig {
        inner_km: cli.inner_km,
        outer_km: cli.outer_km,
        aware_km: cli.aware_km,
    };
    radii.validate()?;

    // 2) Assemble and render.
    let stamp = Utc::now().format(config::TIMESTAMP_FORMAT).to_string();
    let view = view::build_map_view(&locations, &radii, &stamp, cli.contact_url.as_deref());
    let html = render::render_html(&view)?;

    // 3) The embedded table must read back as exactly what went in.
    check_embedded(&html, &locations.records)?;

    // 4) Write.
    render::write_document(&cli.out, &html)?;
    Ok(format!("HTML map saved -> {}", cli.out))
}

fn check_embedded(html: &str, expected: &[data::LocationRecord]) -> Result<()> {
    if render::extract_locations(html)? != expected {
        bail!(
            "{}",
            diagnostics::error_message("embedded location table does not match the input")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_use_defaults() {
        let cli = Cli::try_parse_from(["safety-map"]).unwrap();
        assert_eq!(cli.out, "index.html");
        assert!(cli.locations.is_none());
        assert!(cli.contact_url.is_none());
        assert_eq!(
            (cli.inner_km, cli.outer_km, cli.aware_km),
            (5.0, 12.0, 22.0)
        );
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "safety-map",
            "-o",
            "out/map.html",
            "--inner-km",
            "3.5",
            "--aware-km",
            "40",
            "--locations",
            "locs.json",
        ])
        .unwrap();
        assert_eq!(cli.out, "out/map.html");
        assert_eq!(cli.inner_km, 3.5);
        assert_eq!(cli.outer_km, 12.0);
        assert_eq!(cli.aware_km, 40.0);
        assert_eq!(cli.locations.as_deref(), Some("locs.json"));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["safety-map", "extra"]).is_err());
    }

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["safety-map"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn no_arguments_write_index_html() {
        let dir = tempfile::tempdir().unwrap();
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let result = run(cli(&[]));
        std::env::set_current_dir(prev).unwrap();

        assert_eq!(result.unwrap(), "HTML map saved -> index.html");
        let page = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(render::extract_locations(&page).unwrap(), data::builtin());
        assert!(page.contains("let r1 = 5000;"));
    }

    #[test]
    fn locations_file_flows_into_page() {
        let dir = tempfile::tempdir().unwrap();
        let locs = dir.path().join("locs.json");
        std::fs::write(
            &locs,
            r##"[{"name":"Fuel Depot","type":"Storage","lat":24.5,"lng":54.4,
                "color":"#112233","status":"WATCH","note":"n","risk":"incident"}]"##,
        )
        .unwrap();
        let out = dir.path().join("map.html");
        let out = out.to_str().unwrap();

        let message = run(cli(&[
            "-o",
            out,
            "--locations",
            locs.to_str().unwrap(),
            "--outer-km",
            "15",
        ]))
        .unwrap();
        assert_eq!(message, format!("HTML map saved -> {}", out));

        let page = std::fs::read_to_string(out).unwrap();
        let back = render::extract_locations(&page).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].name, "Fuel Depot");
        assert!(page.contains("Risk Zones (1)"));
        assert!(page.contains("let r2 = 15000;"));
    }

    #[test]
    fn invalid_radius_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("index.html");
        let err = run(cli(&["-o", out.to_str().unwrap(), "--inner-km", "0"])).unwrap_err();
        assert!(err.to_string().contains("inner radius 0 km is outside slider range"));
        assert!(!out.exists());
    }

    #[test]
    fn self_check_rejects_mismatched_page() {
        let locations = data::validate(data::builtin()).unwrap();
        let view = view::build_map_view(
            &locations,
            &config::RadiusConfig::default(),
            "19 Oct 2026  08:30 UTC",
            None,
        );
        let html = render::render_html(&view).unwrap();
        check_embedded(&html, &locations.records).unwrap();

        let tampered = html.replace("Jebel Ali Port", "Jebel Ali Harbour");
        let err = check_embedded(&tampered, &locations.records).unwrap_err();
        assert!(err.to_string().contains("does not match the input"));
    }
}
