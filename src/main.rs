use clap::Parser;
use notechad::{Cli, Command, ConsolePrompt, NoteEngine, ResolveContext, SystemOpener};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> notechad::Result<()> {
    let ctx = ResolveContext::new(cli.root.as_deref(), cli.json)?;
    let engine = NoteEngine::new(&ctx.root);
    let opener = SystemOpener::new(ctx.editor.clone());

    match cli.command {
        Command::New { words, overwrite, no_open } => {
            let mut prompt = ConsolePrompt::stdio();
            cmd::new::run(&engine, &opener, &mut prompt, &words, overwrite, no_open)
        }
        Command::Find { words, sort, desc, peek, open } => {
            cmd::find::run(&ctx, &engine, &opener, &words, sort, desc, peek, open)
        }
        Command::Open { words } => cmd::open::run(&engine, &opener, &words),
    }
}

mod cmd {
    pub mod new;
    pub mod find;
    pub mod open;
}
