use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cf_core::CfResult;
use cf_maps::MapRegistry;
use cf_thermo::{compressor_head, consumed_power};

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "Centriflow CLI - compressor head, power and map predictions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute polytropic head for a compression
    Head {
        /// Suction pressure (psia)
        #[arg(long)]
        p_suction: f64,
        /// Discharge pressure (psia)
        #[arg(long)]
        p_discharge: f64,
        /// Average gas compressibility factor
        #[arg(long)]
        z_avg: f64,
        /// Polytropic exponent ratio (k-1)/k
        #[arg(long)]
        mratio: f64,
        /// Suction temperature (degR)
        #[arg(long)]
        t_suction: f64,
        /// Specific gas constant (ft*lbf/(lbm*degR)); pure methane when omitted
        #[arg(long)]
        rgas: Option<f64>,
    },
    /// Compute consumed shaft power
    Power {
        /// Compressor efficiency, in (0,1]
        #[arg(long)]
        eta: f64,
        /// Mass flow (lbm/day)
        #[arg(long)]
        massflow: f64,
        /// Head (ft*lbf/lbm)
        #[arg(long)]
        head: f64,
        /// Mechanical train efficiency, in (0,1]; 1 when omitted
        #[arg(long)]
        mech_eff: Option<f64>,
    },
    /// Predict speed and efficiency from a compressor map
    Predict {
        /// Head (ft*lbf/lbm)
        #[arg(long)]
        head: f64,
        /// Suction flow, in map units
        #[arg(long)]
        flow: f64,
        /// Compressor model name (e.g. c65)
        #[arg(long)]
        model: String,
        /// Map artifact JSON; builtin tables when omitted
        #[arg(long)]
        maps: Option<PathBuf>,
    },
    /// Compute head, map prediction and power for one operating point
    Point {
        /// Suction pressure (psia)
        #[arg(long)]
        p_suction: f64,
        /// Discharge pressure (psia)
        #[arg(long)]
        p_discharge: f64,
        /// Average gas compressibility factor
        #[arg(long)]
        z_avg: f64,
        /// Polytropic exponent ratio (k-1)/k
        #[arg(long)]
        mratio: f64,
        /// Suction temperature (degR)
        #[arg(long)]
        t_suction: f64,
        /// Specific gas constant (ft*lbf/(lbm*degR)); pure methane when omitted
        #[arg(long)]
        rgas: Option<f64>,
        /// Suction flow, in map units
        #[arg(long)]
        flow: f64,
        /// Mass flow (lbm/day)
        #[arg(long)]
        massflow: f64,
        /// Compressor model name (e.g. c65)
        #[arg(long)]
        model: String,
        /// Mechanical train efficiency, in (0,1]; 1 when omitted
        #[arg(long)]
        mech_eff: Option<f64>,
        /// Map artifact JSON; builtin tables when omitted
        #[arg(long)]
        maps: Option<PathBuf>,
    },
    /// List compressor models and their availability
    Models {
        /// Map artifact JSON; builtin tables when omitted
        #[arg(long)]
        maps: Option<PathBuf>,
    },
}

fn main() -> CfResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Head {
            p_suction,
            p_discharge,
            z_avg,
            mratio,
            t_suction,
            rgas,
        } => cmd_head(p_suction, p_discharge, z_avg, mratio, t_suction, rgas),
        Commands::Power {
            eta,
            massflow,
            head,
            mech_eff,
        } => cmd_power(eta, massflow, head, mech_eff),
        Commands::Predict {
            head,
            flow,
            model,
            maps,
        } => cmd_predict(head, flow, &model, maps.as_deref()),
        Commands::Point {
            p_suction,
            p_discharge,
            z_avg,
            mratio,
            t_suction,
            rgas,
            flow,
            massflow,
            model,
            mech_eff,
            maps,
        } => cmd_point(
            p_suction,
            p_discharge,
            z_avg,
            mratio,
            t_suction,
            rgas,
            flow,
            massflow,
            &model,
            mech_eff,
            maps.as_deref(),
        ),
        Commands::Models { maps } => cmd_models(maps.as_deref()),
    }
}

fn load_registry(maps: Option<&Path>) -> CfResult<MapRegistry> {
    let registry = match maps {
        Some(path) => {
            let registry = MapRegistry::from_path(path)?;
            println!("✓ Loaded map artifact: {}", path.display());
            registry
        }
        None => MapRegistry::builtin(),
    };
    tracing::debug!(model_count = registry.len(), "map registry ready");
    Ok(registry)
}

fn cmd_head(
    p_suction: f64,
    p_discharge: f64,
    z_avg: f64,
    mratio: f64,
    t_suction: f64,
    rgas: Option<f64>,
) -> CfResult<()> {
    let head = compressor_head(p_suction, p_discharge, z_avg, mratio, t_suction, rgas)?;
    println!("Head: {:.3} ft*lbf/lbm", head);
    Ok(())
}

fn cmd_power(eta: f64, massflow: f64, head: f64, mech_eff: Option<f64>) -> CfResult<()> {
    let power = consumed_power(eta, massflow, head, mech_eff)?;
    println!("Power: {:.3} hp", power);
    Ok(())
}

fn cmd_predict(head: f64, flow: f64, model: &str, maps: Option<&Path>) -> CfResult<()> {
    let registry = load_registry(maps)?;
    let point = registry.evaluate(head, flow, model)?;

    println!("Model {} at head {:.1}, flow {:.1}:", model, head, flow);
    println!("  Speed:      {:.1} RPM", point.speed_rpm);
    println!("  Efficiency: {:.4}", point.efficiency);
    Ok(())
}

fn cmd_point(
    p_suction: f64,
    p_discharge: f64,
    z_avg: f64,
    mratio: f64,
    t_suction: f64,
    rgas: Option<f64>,
    flow: f64,
    massflow: f64,
    model: &str,
    mech_eff: Option<f64>,
    maps: Option<&Path>,
) -> CfResult<()> {
    let registry = load_registry(maps)?;

    // Head from pressures, speed/efficiency from the map at that head, then
    // power from the predicted efficiency. One pass, no iteration.
    let head = compressor_head(p_suction, p_discharge, z_avg, mratio, t_suction, rgas)?;
    let point = registry.evaluate(head, flow, model)?;
    let power = consumed_power(point.efficiency, massflow, head, mech_eff)?;

    println!("Operating point for model {}:", model);
    println!("  Head:       {:.3} ft*lbf/lbm", head);
    println!("  Speed:      {:.1} RPM", point.speed_rpm);
    println!("  Efficiency: {:.4}", point.efficiency);
    println!("  Power:      {:.3} hp", power);
    Ok(())
}

fn cmd_models(maps: Option<&Path>) -> CfResult<()> {
    let registry = load_registry(maps)?;

    if registry.is_empty() {
        println!("No compressor models registered");
    } else {
        println!("Compressor models:");
        for name in registry.model_names() {
            if registry.is_available(name) {
                println!("  {} - map fitted", name);
            } else {
                println!("  {} - data pending", name);
            }
        }
    }
    Ok(())
}
