use clap::{Parser, Subcommand};
use hora_props::{
    ALL_NAKSHATRAS, Body, ELEMENTS, House, PropsError, Sign, body, element_qualities,
    element_temperament, house, nakshatra, registry, sign,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hora", about = "Traditional astrology property lookups")]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Properties of a sign
    Sign {
        /// Sign name (e.g. "Aries")
        name: String,
    },
    /// Properties of a body or calculated point
    Body {
        /// Body name (e.g. "Saturn", "North Node")
        name: String,
    },
    /// Properties of a house
    House {
        /// House number (1-12)
        number: u8,
    },
    /// Display name of an aspect
    Aspect {
        /// Identifier angle in degrees (-1 for none)
        #[arg(allow_hyphen_values = true)]
        angle: String,
    },
    /// Ruler of a nakshatra, or the whole table
    Nakshatra {
        /// Nakshatra name (e.g. "Magha"); omit to list all
        name: Option<String>,
    },
    /// Domicile ruler of a sign
    Ruler {
        /// Sign name
        sign: String,
    },
    /// Elements with their temperaments and qualities
    Elements,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HORA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn fail(e: PropsError) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}

fn emit_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign { name } => {
            let s = name.parse::<Sign>().unwrap_or_else(|e| fail(e));
            let p = sign::properties(s);
            if cli.json {
                emit_json(&p);
                return;
            }
            let figures: Vec<&str> = sign::figures(s).iter().map(|f| f.name()).collect();
            println!("{} (#{})", s.name(), p.number);
            println!("  mode:        {}", p.mode.name());
            println!("  season:      {}", p.sun_season.name());
            println!("  gender:      {}", p.gender.name());
            println!("  faction:     {}", p.faction.name());
            println!("  element:     {}", p.element.name());
            println!("  temperament: {}", p.temperament.name());
            println!("  fertility:   {}", p.fertility.name());
            if !figures.is_empty() {
                println!("  figure:      {}", figures.join(", "));
            }
        }

        Commands::Body { name } => {
            let b = name.parse::<Body>().unwrap_or_else(|e| fail(e));
            let p = body::properties(b);
            if cli.json {
                emit_json(&p);
                return;
            }
            println!("{}", b.name());
            println!("  mean motion: {} deg/day", p.mean_motion);
            println!("  orb:         {} deg", p.orb);
            if let Some(c) = p.classical {
                println!("  element:     {}", c.element.name());
                println!("  temperament: {}", c.temperament.name());
                println!("  gender:      {}", c.gender.name());
                println!("  faction:     {}", c.faction.name());
                println!("  sign joy:    {}", c.sign_joy.name());
                println!("  house joy:   {}", c.house_joy.name());
            }
        }

        Commands::House { number } => {
            let Some(h) = House::from_number(number) else {
                eprintln!("Invalid house number: {number} (1-12)");
                std::process::exit(1);
            };
            let p = house::properties(h);
            if cli.json {
                emit_json(&p);
                return;
            }
            let side = if p.above_horizon { "above" } else { "below" };
            println!(
                "{} - {}, {}, {} horizon",
                h.name(),
                p.condition.name(),
                p.gender.name(),
                side
            );
        }

        Commands::Aspect { angle } => {
            let name = registry::aspect_name(&angle).unwrap_or_else(|e| fail(e));
            if cli.json {
                emit_json(&name);
            } else {
                println!("{name}");
            }
        }

        Commands::Nakshatra { name: Some(name) } => {
            let ruler = registry::nakshatra_ruler(&name).unwrap_or_else(|e| fail(e));
            if cli.json {
                emit_json(&ruler);
            } else {
                println!("{name} - ruled by {}", ruler.name());
            }
        }

        Commands::Nakshatra { name: None } => {
            if cli.json {
                let rows: Vec<_> = nakshatra::ruler_table().collect();
                emit_json(&rows);
                return;
            }
            for n in ALL_NAKSHATRAS {
                println!("{:>2}  {:<18} {}", n.index() + 1, n.name(), n.ruler().name());
            }
        }

        Commands::Ruler { sign } => {
            let ruler = registry::sign_ruler(&sign).unwrap_or_else(|e| fail(e));
            if cli.json {
                emit_json(&ruler);
            } else {
                println!("{sign} - ruled by {}", ruler.name());
            }
        }

        Commands::Elements => {
            if cli.json {
                let rows: Vec<_> = ELEMENTS
                    .iter()
                    .map(|&e| (e, element_temperament(e), element_qualities(e)))
                    .collect();
                emit_json(&rows);
                return;
            }
            for e in ELEMENTS {
                let [thermal, humidity] = element_qualities(e);
                println!(
                    "{:<6} {:<12} {} / {}",
                    e.name(),
                    element_temperament(e).name(),
                    thermal.name(),
                    humidity.name()
                );
            }
        }
    }
}
