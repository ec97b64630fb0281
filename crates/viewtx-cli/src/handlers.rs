//! Command handlers

use crate::commands::{BundleArgs, GenerateArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use console::style;
use std::fs;
use std::io::Write;
use std::path::Path;
use viewtx::{generate_css, AnimationConfig, AnimationKind, TransitionManifest, TransitionSpec};

/// Build the spec described by `generate` arguments
pub fn spec_from_args(args: &GenerateArgs) -> CliResult<TransitionSpec> {
    let animation: AnimationKind = args.animation.parse()?;
    let config = AnimationConfig::new(args.duration, args.easing.clone())?;
    Ok(TransitionSpec::new(args.name.clone(), animation, config)?)
}

/// `viewtx generate`
pub fn run_generate(args: &GenerateArgs) -> CliResult<()> {
    let spec = spec_from_args(args)?;
    tracing::debug!(fingerprint = %spec.fingerprint(), "generating css");
    emit(&generate_css(&spec), args.output.as_deref())
}

/// `viewtx bundle`
pub fn run_bundle(args: &BundleArgs) -> CliResult<()> {
    let manifest = TransitionManifest::load(&args.manifest)?;
    if manifest.transitions.is_empty() {
        tracing::warn!(path = %args.manifest.display(), "manifest lists no transitions");
    }
    let css = manifest.render_stylesheet()?;
    emit(&css, args.output.as_deref())
}

/// `viewtx list`
pub fn run_list(config: &CliConfig) -> CliResult<()> {
    console::set_colors_enabled(config.color.should_color());
    let mut stdout = std::io::stdout().lock();
    for line in list_lines() {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// One line per animation: name and the keyframes it emits
#[must_use]
pub fn list_lines() -> Vec<String> {
    AnimationKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{:<12} {} / {}",
                style(kind.as_str()).bold(),
                kind.exit_keyframes(),
                kind.enter_keyframes()
            )
        })
        .collect()
}

fn emit(css: &str, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            fs::write(path, css).map_err(|source| CliError::Output {
                path: path.display().to_string(),
                source,
            })?;
            tracing::debug!(path = %path.display(), bytes = css.len(), "wrote stylesheet");
        }
        None => {
            std::io::stdout().lock().write_all(css.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(animation: &str, duration: u32) -> GenerateArgs {
        GenerateArgs {
            name: "card".to_string(),
            animation: animation.to_string(),
            duration,
            easing: "ease".to_string(),
            output: None,
        }
    }

    #[test]
    fn spec_from_valid_args() {
        let spec = spec_from_args(&args("scaleIn", 180)).unwrap();
        assert_eq!(spec.animation(), AnimationKind::ScaleIn);
        assert_eq!(spec.config().duration_ms(), 180);
    }

    #[test]
    fn unknown_animation_rejected() {
        let err = spec_from_args(&args("spin", 180)).unwrap_err();
        assert!(err.to_string().contains("Unknown animation 'spin'"));
    }

    #[test]
    fn zero_duration_rejected() {
        assert!(spec_from_args(&args("fadeIn", 0)).is_err());
    }

    #[test]
    fn generate_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("card.css");
        let mut a = args("fadeIn", 300);
        a.output = Some(path.clone());
        run_generate(&a).unwrap();
        let css = fs::read_to_string(path).unwrap();
        assert!(css.contains("::view-transition-old(card)"));
    }

    #[test]
    fn list_covers_every_kind() {
        console::set_colors_enabled(false);
        let lines = list_lines();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("slideUp"));
        assert!(lines[4].contains("fade-out / fade-in"));
    }
}
