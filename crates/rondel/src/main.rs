use clap::{Parser, Subcommand};
use rondel::geometry::{Degrees, SliderConfig};
use rondel::svg;
use std::io::Write;
use std::os::unix::net::UnixStream;

const SOCKET_PATH: &str = "/tmp/dial.sock";

#[derive(Parser, Debug)]
#[command(name = "rondel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render a standalone SVG for a configuration to stdout.
    Svg {
        /// Value to place the progress arc and thumb at.
        value: f64,

        #[arg(long, default_value_t = 0.0)]
        min: f64,

        #[arg(long, default_value_t = 100.0)]
        max: f64,

        #[arg(long, default_value_t = 1.0)]
        step: f64,

        /// Angular span of the arc, in degrees.
        #[arg(long, default_value_t = 270.0)]
        arc: f64,

        /// Clockwise offset of the arc start, in degrees.
        #[arg(long, default_value_t = 135.0)]
        rotate: f64,
    },
    /// Set the value of a running dial instance.
    Set { value: f64 },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Svg {
            value,
            min,
            max,
            step,
            arc,
            rotate,
        } => {
            let config =
                SliderConfig::new(min, max, step, Degrees::new(arc), Degrees::new(rotate))?;
            print!("{}", svg::document(&config, value));
            Ok(())
        }
        Commands::Set { value } => send_command(&format!("set {value}")),
    }
}

fn send_command(cmd: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to dial at {}: {}. Is dial running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    log::debug!("sent {cmd:?} to {SOCKET_PATH}");
    Ok(())
}
