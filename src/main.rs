use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use sehat::config::FlagStore;
use sehat::constants::{FLAG_FILE_NAME, PROVINCES_AND_CITIES_FILE_NAME, STATE_DISTRICT_FILE_NAME};
use sehat::entities::LocalizedName;
use sehat::gazetteer::{Gazetteer, ProvincesAndCities};
use sehat::locale::Language;
use sehat::telemetry::MemoryTelemetry;

fn main() -> Result<()> {
    let mut verbose = false;
    let mut bundle_dir: Option<PathBuf> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("sehat-datacheck {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--verbose" | "-v" => verbose = true,
            other if other.starts_with('-') => anyhow::bail!("Unknown option: {other}"),
            other => bundle_dir = Some(PathBuf::from(other)),
        }
    }

    init_logging(verbose)?;

    let bundle_dir = bundle_dir.unwrap_or_else(|| PathBuf::from("."));
    println!("🔍 Checking data bundle at {}", bundle_dir.display());

    let mut failures = 0;
    failures += check_flags(&bundle_dir);
    failures += check_states(&bundle_dir);
    failures += check_provinces(&bundle_dir);

    if failures > 0 {
        anyhow::bail!("{failures} bundle file(s) failed the check");
    }

    println!("✅ Bundle looks good");
    Ok(())
}

/// Route log output to stderr so it does not mix with the report.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

/// Checks the flag document.
///
/// A missing document is a warning, not a failure: every flag then reads as
/// disabled, which is a valid (if unusual) deployment.
fn check_flags(bundle_dir: &Path) -> usize {
    let path = bundle_dir.join(FLAG_FILE_NAME);
    if !path.exists() {
        println!("⚠️  {FLAG_FILE_NAME}: not present, every flag will read as disabled");
        return 0;
    }

    // The store itself never fails, so document-level problems are checked
    // up front where they can fail the run.
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(error) => {
            println!("❌ {FLAG_FILE_NAME}: unreadable: {error}");
            return 1;
        }
    };
    let parsed = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&content);
    if let Err(error) = parsed {
        println!("❌ {FLAG_FILE_NAME}: malformed: {error}");
        return 1;
    }

    let telemetry = MemoryTelemetry::new();
    let store = FlagStore::with_telemetry(&path, Arc::new(telemetry.clone()));

    let toggles = [
        ("height", store.height_enabled()),
        ("weight", store.weight_enabled()),
        ("temperature", store.temperature_enabled()),
        ("celsius", store.celsius_enabled()),
        ("fahrenheit", store.fahrenheit_enabled()),
        ("privacy notice", store.privacy_notice_enabled()),
    ];
    let enabled: Vec<&str> = toggles
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();

    println!("✅ {FLAG_FILE_NAME}: parsed");
    if enabled.is_empty() {
        println!("   no optional fields enabled");
    } else {
        println!("   enabled: {}", enabled.join(", "));
    }

    for language in [Language::english(), Language::hindi()] {
        let texts = [
            store.teleconsultation_consent(&language),
            store.privacy_policy(&language),
            store.terms_and_conditions(&language),
            store.personal_data_consent(&language),
        ];
        let present = texts.iter().filter(|text| !text.is_empty()).count();
        println!("   consent texts ({language}): {present}/{} present", texts.len());
    }

    let fallbacks = telemetry.reports();
    if !fallbacks.is_empty() {
        println!("   ⚠️  {} lookup(s) fell back to defaults", fallbacks.len());
        for report in &fallbacks {
            log::debug!("{report}");
        }
    }

    0
}

/// Checks the state hierarchy dataset.
fn check_states(bundle_dir: &Path) -> usize {
    let path = bundle_dir.join(STATE_DISTRICT_FILE_NAME);
    if !path.exists() {
        println!("⚠️  {STATE_DISTRICT_FILE_NAME}: not present, address pickers get no hierarchy");
        return 0;
    }

    match Gazetteer::load_from_file(&path) {
        Ok(gazetteer) => {
            let districts: usize = gazetteer
                .states
                .iter()
                .map(|state| state.districts.len())
                .sum();
            println!(
                "✅ {STATE_DISTRICT_FILE_NAME}: {} state(s), {districts} district(s)",
                gazetteer.states.len()
            );

            let english = Language::english();
            let unnamed = gazetteer
                .states
                .iter()
                .filter(|state| state.display_name(&english).is_empty())
                .count();
            if unnamed > 0 {
                println!("   ⚠️  {unnamed} state(s) resolve to an empty display name");
            }

            0
        }
        Err(error) => {
            println!("❌ {STATE_DISTRICT_FILE_NAME}: {error:#}");
            1
        }
    }
}

/// Checks the flat province/city dataset.
fn check_provinces(bundle_dir: &Path) -> usize {
    let path = bundle_dir.join(PROVINCES_AND_CITIES_FILE_NAME);
    if !path.exists() {
        println!("⚠️  {PROVINCES_AND_CITIES_FILE_NAME}: not present");
        return 0;
    }

    match ProvincesAndCities::load_from_file(&path) {
        Ok(dataset) => {
            println!(
                "✅ {PROVINCES_AND_CITIES_FILE_NAME}: {} province(s), {} city/cities",
                dataset.provinces.len(),
                dataset.cities.len()
            );
            0
        }
        Err(error) => {
            println!("❌ {PROVINCES_AND_CITIES_FILE_NAME}: {error:#}");
            1
        }
    }
}

fn print_help() {
    println!("sehat-datacheck - validate a deployment data bundle");
    println!();
    println!("Usage: sehat-datacheck [OPTIONS] [BUNDLE_DIR]");
    println!();
    println!("Arguments:");
    println!("  [BUNDLE_DIR]  Directory holding the bundle files (default: .)");
    println!();
    println!("Options:");
    println!("  -v, --verbose  Log per-key fallback details");
    println!("  -h, --help     Print help");
    println!("  -V, --version  Print version");
}
