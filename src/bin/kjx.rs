//! kjx - jump across contexts and namespaces in multiple kubeconfig files.
//!
//! The binary is orchestration only: it dispatches CLI modes, drives the
//! interactive picker, and prints results. All decision logic lives in the
//! library.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context as _};
use clap::{Args, Parser, Subcommand};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;

use kjx::classify;
use kjx::kubeconfig::{self, KubeConfig, LoadedConfigs, NamespaceOutcome};
use kjx::kubectl;
use kjx::search::search;
use kjx::session::Session;
use kjx::shell;
use kjx::Error;

/// Namespaces offered when the cluster cannot be reached.
const FALLBACK_NAMESPACES: &[&str] = &["default", "kube-system", "kube-public", "kube-node-lease"];

#[derive(Debug, Parser)]
#[command(
    name = "kjx",
    version,
    about = "Jump across contexts and namespaces in multiple kubeconfig files",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    opts: ModeOpts,

    /// Context name to switch to, or '-' for the previous context
    target: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
struct ModeOpts {
    /// Directory containing kubeconfig files
    #[arg(short = 'd', long, value_name = "DIR", default_value_os_t = kubeconfig::default_config_dir())]
    config_dir: PathBuf,

    /// Interactive mode with fuzzy search
    #[arg(short, long)]
    interactive: bool,

    /// List all available entries
    #[arg(short, long)]
    list: bool,

    /// Show current context information
    #[arg(short, long)]
    current: bool,

    /// Search by name
    #[arg(short, long)]
    search: bool,

    /// Write the selected config file path here for the shell wrapper
    #[arg(long, value_name = "FILE")]
    output_config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Switch between namespaces in the current context
    Ns {
        #[command(flatten)]
        opts: ModeOpts,

        /// Namespace to switch to
        target: Option<String>,
    },

    /// Print the shell integration function
    ShellInit,

    /// Install the shell function into your shell profile
    Install,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Ns { opts, target }) => run_namespace_command(&opts, target),
        Some(Command::ShellInit) => run_shell_init(),
        Some(Command::Install) => run_install(),
        None => run_context_command(&cli.opts, cli.target),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Context switching
// ---------------------------------------------------------------------------

fn run_context_command(opts: &ModeOpts, target: Option<String>) -> anyhow::Result<()> {
    if opts.current {
        show_current_context()?;
        return Ok(());
    }

    let loaded = kubeconfig::load_all(&opts.config_dir)?;
    print_load_warnings(&loaded);
    if loaded.is_empty() {
        bail!("no kubeconfig files found in {}", opts.config_dir.display());
    }

    let mut session = Session::open(&opts.config_dir, opts.output_config.clone());

    if opts.search {
        return match target {
            Some(term) => search_and_switch(&mut session, &loaded, &term, opts),
            None => interactive_context_select(&mut session, &loaded, opts),
        };
    }

    if opts.list {
        list_contexts(&loaded, &session, &opts.config_dir);
        return Ok(());
    }

    match target {
        Some(raw) if !opts.interactive => {
            let name = session.resolve_target(&raw)?;
            switch_to_context(&mut session, &loaded, &name, opts)
        }
        _ => interactive_context_select(&mut session, &loaded, opts),
    }
}

fn search_and_switch(
    session: &mut Session,
    loaded: &LoadedConfigs,
    term: &str,
    opts: &ModeOpts,
) -> anyhow::Result<()> {
    let matches = search(loaded.iter_contexts().map(|(name, _)| name), term);
    if matches.is_empty() {
        println!("No contexts found matching '{}'", term);
        return Ok(());
    }

    println!("Contexts matching '{}':", term);
    for (i, name) in matches.iter().enumerate() {
        let marker = if session.current_context() == Some(name.as_str()) {
            "🔹"
        } else {
            "  "
        };
        let production = loaded
            .find_context(name)
            .is_some_and(|entry| classify::is_production(name, &entry.path));
        println!("{}) {} {}{}", i + 1, marker, name, prod_indicator(production));
    }

    if matches.len() == 1 {
        println!("\nOnly one match found. Switching to '{}'...", matches[0]);
        switch_to_context(session, loaded, &matches[0], opts)?;
    }

    Ok(())
}

fn interactive_context_select(
    session: &mut Session,
    loaded: &LoadedConfigs,
    opts: &ModeOpts,
) -> anyhow::Result<()> {
    // display label, context name, config file
    let mut items: Vec<(String, String, PathBuf)> = loaded
        .iter_contexts()
        .map(|(name, path)| {
            let production = classify::is_production(name, path);
            let label = format!("{} ({}){}", name, file_name(path), prod_indicator(production));
            (label, name.to_string(), path.to_path_buf())
        })
        .collect();

    if items.is_empty() {
        return Err(Error::NoContexts.into());
    }
    items.sort_by(|a, b| a.0.cmp(&b.0));

    let labels: Vec<&str> = items.iter().map(|(label, _, _)| label.as_str()).collect();
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select context (type to search/filter)")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    let Some(index) = selection else {
        println!("No selection made");
        return Ok(());
    };

    let (_, name, path) = &items[index];
    if classify::is_production(name, path) {
        print_production_warning(name, path);
    }
    apply_context_switch(session, path, name, opts)
}

fn switch_to_context(
    session: &mut Session,
    loaded: &LoadedConfigs,
    name: &str,
    opts: &ModeOpts,
) -> anyhow::Result<()> {
    let entry = loaded
        .find_context(name)
        .ok_or_else(|| Error::ContextNotFound(name.to_string()))?;

    if classify::is_production(name, &entry.path) {
        print_production_warning(name, &entry.path);
    }
    apply_context_switch(session, &entry.path, name, opts)
}

fn apply_context_switch(
    session: &mut Session,
    path: &Path,
    name: &str,
    opts: &ModeOpts,
) -> anyhow::Result<()> {
    kubeconfig::set_current_context(path, name)?;
    session.record_switch(path, name)?;

    println!("Switched to context '{}' in {}", name, file_name(path));

    if classify::is_production_name(name) {
        println!(
            "{}",
            style("🔴 You are now connected to a PRODUCTION environment!").red()
        );
        println!(
            "{}",
            style("🔴 Please be extra careful with your operations!").red()
        );
    }

    if opts.output_config.is_none() {
        println!(
            "🔄 To export KUBECONFIG to your shell, run: export KUBECONFIG={}",
            path.display()
        );
        println!("💡 Or use shell integration with: kjx install && source your shell profile");
    }

    Ok(())
}

fn list_contexts(loaded: &LoadedConfigs, session: &Session, config_dir: &Path) {
    println!("Available contexts from {}:\n", config_dir.display());

    for entry in &loaded.entries {
        println!("📁 {}:", file_name(&entry.path));
        for name in &entry.contexts {
            let marker = if session.current_context() == Some(name.as_str()) {
                "🔹"
            } else {
                "  "
            };
            let production = classify::is_production(name, &entry.path);
            println!("{} {}{}", marker, name, prod_indicator(production));
        }
        println!();
    }

    println!("Legend:");
    println!("🔹 = Current context");
    println!("🔴 = Production environment (context name or config file)");
}

fn show_current_context() -> anyhow::Result<()> {
    let path = kubeconfig::active_config_path()?;
    let config = match KubeConfig::load(&path) {
        Ok(config) if !config.current_context.is_empty() => config,
        _ => {
            println!("❌ No current context found or invalid kubeconfig");
            return Ok(());
        }
    };

    let cluster = config
        .find_context(&config.current_context)
        .map(|c| c.context.cluster.clone())
        .unwrap_or_default();

    println!("📍 Current Kubernetes Context Information:");
    println!("{}", "=".repeat(46));
    println!("🔹 Context: {}", config.current_context);
    println!("📁 Config File: {}", file_name(&path));
    println!("🏗️  Cluster: {}", cluster);
    println!("📦 Namespace: {}", config.current_namespace());

    let prod_context = classify::is_production_name(&config.current_context)
        || classify::is_production_name(&cluster);
    let prod_file = classify::is_production_file(&path);

    if prod_context || prod_file {
        println!();
        println!("{}", style("⚠️  PRODUCTION ENVIRONMENT DETECTED!").red().bold());
        if prod_context {
            println!(
                "🔴 Context/Cluster '{}' appears to be a production environment",
                config.current_context
            );
        }
        if prod_file {
            println!(
                "🔴 Config file '{}' appears to be a production environment",
                file_name(&path)
            );
        }
        println!("🔴 Please be extra careful with any operations!");
    }

    println!("\n💾 KUBECONFIG: {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Namespace switching
// ---------------------------------------------------------------------------

fn run_namespace_command(opts: &ModeOpts, target: Option<String>) -> anyhow::Result<()> {
    if opts.current {
        show_current_namespace()?;
        return Ok(());
    }

    let config_path = kubeconfig::active_config_path()?;
    let config = KubeConfig::load(&config_path).context("loading current kubeconfig")?;

    if opts.search {
        return match target {
            Some(term) => search_and_switch_namespace(&config, &config_path, &term),
            None => interactive_namespace_select(&config, &config_path, true),
        };
    }

    if opts.list {
        let namespaces = kubectl::live_namespaces()?;
        println!("Available namespaces in current cluster:");
        for ns in &namespaces {
            println!("  {}", ns);
        }
        return Ok(());
    }

    match target {
        Some(raw) if !opts.interactive => {
            if raw == "-" {
                println!("Previous namespace switching not implemented yet");
                return Ok(());
            }
            direct_namespace_switch(&config, &config_path, &raw)
        }
        _ => interactive_namespace_select(&config, &config_path, false),
    }
}

fn search_and_switch_namespace(
    config: &KubeConfig,
    config_path: &Path,
    term: &str,
) -> anyhow::Result<()> {
    let namespaces = kubectl::live_namespaces()?;
    let matches = search(namespaces.iter().map(String::as_str), term);
    if matches.is_empty() {
        println!("No namespaces found matching '{}'", term);
        return Ok(());
    }

    println!("Namespaces matching '{}':", term);
    for (i, name) in matches.iter().enumerate() {
        println!("{}) {}", i + 1, name);
    }

    if matches.len() == 1 {
        println!("\nOnly one match found. Switching to namespace '{}'...", matches[0]);
        apply_namespace_switch(config, config_path, &matches[0])?;
    }

    Ok(())
}

fn interactive_namespace_select(
    config: &KubeConfig,
    config_path: &Path,
    strict: bool,
) -> anyhow::Result<()> {
    let namespaces = match kubectl::live_namespaces() {
        Ok(namespaces) => namespaces,
        Err(err) if !strict => {
            eprintln!("Warning: Could not get live namespaces ({}), using defaults", err);
            FALLBACK_NAMESPACES.iter().map(|s| s.to_string()).collect()
        }
        Err(err) => return Err(err).context("could not get namespaces"),
    };

    if namespaces.is_empty() {
        return Err(Error::NoNamespaces.into());
    }

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select namespace (type to search/filter)")
        .items(&namespaces)
        .default(0)
        .interact_opt()?;

    let Some(index) = selection else {
        println!("No selection made");
        return Ok(());
    };

    apply_namespace_switch(config, config_path, &namespaces[index])
}

fn direct_namespace_switch(
    config: &KubeConfig,
    config_path: &Path,
    namespace: &str,
) -> anyhow::Result<()> {
    match kubectl::live_namespaces() {
        Ok(namespaces) => {
            if !namespaces.iter().any(|n| n == namespace) {
                println!("Warning: Namespace '{}' not found in cluster", namespace);
                println!("Available namespaces: {}", namespaces.join(", "));
                return Ok(());
            }
        }
        Err(err) => {
            eprintln!("Warning: Could not verify namespace exists: {}", err);
            println!("Switching to namespace '{}' anyway...", namespace);
        }
    }

    apply_namespace_switch(config, config_path, namespace)
}

fn apply_namespace_switch(
    config: &KubeConfig,
    config_path: &Path,
    namespace: &str,
) -> anyhow::Result<()> {
    let outcome = kubeconfig::set_namespace(config_path, namespace, &config.current_context)?;
    match outcome {
        NamespaceOutcome::Updated => {
            println!("Switched to namespace '{}'", namespace);
            if classify::is_production_name(&config.current_context) {
                println!(
                    "{}",
                    style(format!(
                        "🔴 You are working in namespace '{}' in a PRODUCTION environment!",
                        namespace
                    ))
                    .red()
                );
                println!(
                    "{}",
                    style("🔴 Please be extra careful with your operations!").red()
                );
            }
        }
        NamespaceOutcome::ContextNotFound => {
            println!(
                "Warning: no context named '{}' in {}; nothing changed",
                config.current_context,
                file_name(config_path)
            );
        }
    }
    Ok(())
}

fn show_current_namespace() -> anyhow::Result<()> {
    let path = kubeconfig::active_config_path()?;
    let config = match KubeConfig::load(&path) {
        Ok(config) if !config.current_context.is_empty() => config,
        _ => {
            println!("❌ No current context found or invalid kubeconfig");
            return Ok(());
        }
    };

    let cluster = config
        .find_context(&config.current_context)
        .map(|c| c.context.cluster.clone())
        .unwrap_or_default();
    let namespace = config.current_namespace();

    println!("📦 Current Kubernetes Namespace Information:");
    println!("{}", "=".repeat(49));
    println!("📦 Current Namespace: {}", namespace);
    println!("🔹 Context: {}", config.current_context);
    println!("🏗️  Cluster: {}", cluster);
    println!("📁 Config File: {}", file_name(&path));

    let prod_context = classify::is_production_name(&config.current_context)
        || classify::is_production_name(&cluster);
    let prod_file = classify::is_production_file(&path);

    if prod_context || prod_file {
        println!();
        println!("{}", style("⚠️  PRODUCTION ENVIRONMENT DETECTED!").red().bold());
        println!("🔴 You are working in a production environment");
        println!("🔴 Current namespace: '{}'", namespace);
        if prod_context {
            println!("🔴 Context/Cluster contains production keywords");
        }
        if prod_file {
            println!("🔴 Config file contains production keywords");
        }
        println!("🔴 Please be extra careful with any operations!");
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Shell integration
// ---------------------------------------------------------------------------

fn run_shell_init() -> anyhow::Result<()> {
    println!("{}", shell::integration_script(&binary_path()));
    Ok(())
}

fn run_install() -> anyhow::Result<()> {
    let profile = match shell::detect_profile() {
        Ok(profile) => profile,
        Err(Error::UnsupportedShell) => {
            println!("Unsupported shell. Please manually add the shell function to your profile.");
            println!("Run 'kjx shell-init' to get the function code.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let script = shell::integration_script(&binary_path());
    match shell::install_into(&profile, &script)? {
        shell::InstallOutcome::AlreadyInstalled => {
            println!("kjx shell function already exists in {}", profile.display());
        }
        shell::InstallOutcome::Installed => {
            println!("✅ kjx shell function installed to {}", profile.display());
            println!("Please run: source {}", profile.display());
            println!("Or restart your shell to use the function.");
        }
    }
    Ok(())
}

fn binary_path() -> String {
    env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "kjx".to_string())
}

// ---------------------------------------------------------------------------
// Shared output helpers
// ---------------------------------------------------------------------------

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn prod_indicator(production: bool) -> &'static str {
    if production {
        " 🔴"
    } else {
        ""
    }
}

fn print_load_warnings(loaded: &LoadedConfigs) {
    for warning in &loaded.warnings {
        eprintln!(
            "Warning: Could not load {}: {}",
            file_name(&warning.path),
            warning.message
        );
    }
}

fn print_production_warning(context: &str, path: &Path) {
    println!(
        "{}",
        style("⚠️  WARNING: PRODUCTION ENVIRONMENT DETECTED!").red().bold()
    );
    println!("🔴 You are selecting context: '{}'", context);
    if classify::is_production_name(context) {
        println!("🔴 Context name contains production keywords");
    }
    if classify::is_production_file(path) {
        println!("🔴 Config file '{}' contains production keywords", file_name(path));
    }
    println!("🔴 This appears to be a PRODUCTION cluster.");
    println!("🔴 Please be extra careful with any changes!");
    println!();
}
