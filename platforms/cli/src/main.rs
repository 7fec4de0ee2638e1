use clap::Parser;
use dial::demos::DemoManager;
use dial::loader::InstructionLoader;
use dial::runner::{append_sink, Runner};
use dial::types::{DialError, Instruction};
use dial::Dial;
use std::io::Write;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The rotation routine file to run
    #[clap(short, long, conflicts_with = "demo")]
    routine: Option<String>,

    /// Run a bundled demo routine by name
    #[clap(long)]
    demo: Option<String>,

    /// List the bundled demo routines and exit
    #[clap(long)]
    list_demos: bool,

    /// The output file receiving the position after each rotation (appended, never truncated)
    #[clap(short, long, default_value = "output.txt")]
    output: String,

    /// Print each step of the run
    #[clap(short = 'd', long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DialError> {
    if cli.list_demos {
        for name in DemoManager::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let instructions = load_instructions(cli)?;
    let mut sink = append_sink(Path::new(&cli.output))?;

    if cli.debug {
        let mut dial = Dial::new();

        for (i, instruction) in instructions.iter().enumerate() {
            dial.apply(instruction)?;

            println!(
                "Step: {}, Rotation: {}, Position: {}, Zero crossings: {}",
                i + 1,
                instruction,
                dial.position(),
                dial.zero_crossings()
            );

            if let Err(e) = writeln!(sink, "{}", dial.position()) {
                eprintln!("Error writing position to output: {e}");
            }
        }

        println!("\nTotal zero crossings: {}", dial.zero_crossings());
    } else {
        let mut runner = Runner::new(sink);
        let summary = runner.run(&instructions)?;

        if summary.write_failures > 0 {
            eprintln!(
                "{} position line(s) could not be written to {}",
                summary.write_failures, cli.output
            );
        }

        println!("Total zero crossings: {}", summary.zero_crossings);
    }

    Ok(())
}

fn load_instructions(cli: &Cli) -> Result<Vec<Instruction>, DialError> {
    if let Some(name) = &cli.demo {
        return Ok(DemoManager::get(name)?.instructions);
    }

    match &cli.routine {
        Some(path) => InstructionLoader::load(Path::new(path)),
        None => Err(DialError::ValidationError(
            "No routine given: pass --routine <FILE> or --demo <NAME>".to_string(),
        )),
    }
}
