mod logging;
mod view_app;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fluidsim_core::{
    build_simulation_context, step_simulation, FluidParams, SimulationContext, VelocityClamp,
};
use view_app::ViewApp;

#[derive(Parser)]
#[command(name = "fluidsim")]
#[command(about = "fluidsim - a 2D particle fluid", long_about = None)]
struct Cli {
    #[command(flatten)]
    setup: SetupArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct SetupArgs {
    /// Number of particles to spawn
    #[arg(long, global = true, default_value_t = 500)]
    particles: usize,

    /// Seed for initial placement (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// What happens to particles moving faster than the speed limit
    #[arg(long, global = true, value_enum, default_value_t = ClampArg::Normalize)]
    clamp: ClampArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ClampArg {
    /// Divide the velocity by its magnitude (unit speed)
    Normalize,
    /// Scale the velocity down to the speed limit
    Max,
}

impl From<ClampArg> for VelocityClamp {
    fn from(arg: ClampArg) -> Self {
        match arg {
            ClampArg::Normalize => VelocityClamp::NormalizeToUnit,
            ClampArg::Max => VelocityClamp::ClampToMax,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window and animate the fluid
    Run,
    /// Step without a window and log statistics
    Headless {
        /// Number of steps to run
        #[arg(long, default_value_t = 200)]
        steps: u64,

        /// Log statistics every this many steps
        #[arg(long, default_value_t = 50)]
        report_every: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::setup() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let params = FluidParams::default()
        .with_particle_count(cli.setup.particles)
        .with_velocity_clamp(cli.setup.clamp.into());

    match cli.command {
        Commands::Run => run_window(params, cli.setup.seed),
        Commands::Headless {
            steps,
            report_every,
        } => {
            let mut ctx = build_simulation_context(params, cli.setup.seed)
                .context("failed to build the simulation")?;
            ctx.max_steps = Some(steps);
            let reports = run_headless(&mut ctx, report_every)?;
            log::debug!("{} progress reports", reports);
            println!("{}", ctx.stats());
            Ok(())
        }
    }
}

fn run_window(params: FluidParams, seed: Option<u64>) -> Result<()> {
    let app = ViewApp::new(params, seed)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("fluidsim")
            .with_inner_size([720.0, 780.0]),
        ..Default::default()
    };

    // Closing the window returns from run_native, which ends the process.
    eframe::run_native("fluidsim", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))
}

/// Step until `max_steps`, logging stats every `report_every` steps.
/// Returns how many progress reports were logged.
fn run_headless(ctx: &mut SimulationContext, report_every: u64) -> Result<u64> {
    let report_every = report_every.max(1);
    let mut reports = 0;

    loop {
        let before = ctx.current_step;
        let done = step_simulation(ctx)?;
        if ctx.current_step > before && ctx.current_step % report_every == 0 {
            log::info!("step {}: {}", ctx.current_step, ctx.stats());
            reports += 1;
        }
        if done {
            break;
        }
    }

    log::info!("finished after {} steps", ctx.current_step);
    Ok(reports)
}
