use clap::Parser;
use keeporg::application::ConvertService;
use keeporg::cli::{format_summary, Cli};
use keeporg::error::KeeporgError;
use keeporg::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), KeeporgError> {
    println!("Looking for notes in {}", cli.input_dir.display());

    let repo = FileSystemRepository::open(cli.input_dir, cli.output_dir)?;
    let service = ConvertService::new(repo);
    let summary = service.execute()?;

    print!("{}", format_summary(&summary));
    Ok(())
}
