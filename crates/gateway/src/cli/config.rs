use sv_domain::config::{Config, ConfigSeverity};

/// Parse and validate the config, printing any issues.
///
/// Returns `true` when no errors were found (warnings are allowed).
pub fn validate(config: &Config, config_path: &str) -> bool {
    let issues = config.validate();

    if issues.is_empty() {
        println!("sessionvault config OK ({config_path})");
        return true;
    }

    for issue in &issues {
        println!("{issue}");
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();
    println!(
        "\nfound {errors} error(s) and {} warning(s) in {config_path}",
        issues.len() - errors,
    );

    errors == 0
}

/// Dump the resolved config (with all defaults filled in) as TOML.
///
/// The signing secret never appears here: the config only names the env
/// var that holds it.
pub fn show(config: &Config) {
    match toml::to_string_pretty(config) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("failed to render config as TOML: {e}");
            std::process::exit(1);
        }
    }
}
