use clap::Parser;
use colored::Colorize;
use droplet::api::DropletApi;
use droplet::commands::{CmdMessage, CmdResult, MessageLevel};
use droplet::config::DropletConfig;
use droplet::error::Result;
use droplet::model::Action;
use droplet::notify;
use droplet::store::fs::FsLauncherStore;
use droplet::transfer::SftpTransfer;
use droplet::wizard::TermPrompter;
use log::warn;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", e.to_string().red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = DropletConfig::load_default()?;
    let exe = std::env::current_exe()?;
    let launcher_dir = config.launcher_dir_or_default(&exe);
    let key_file = config.key_file_or_default()?;

    let mut api = DropletApi::new(
        FsLauncherStore::new(),
        SftpTransfer::new(key_file),
        exe,
        launcher_dir,
    );
    let mut prompter = TermPrompter::new();

    let (action, supplied) = match cli.command {
        Some(Commands::CreateShortcut { opts }) => (Action::CreateShortcut, opts.supplied()),
        Some(Commands::Upload { opts }) => (Action::Upload, opts.supplied()),
        Some(Commands::Interactive) | None => (Action::Interactive, Vec::new()),
    };

    let result = api.dispatch(action, &supplied, &mut prompter)?;
    finish(&result);
    Ok(())
}

fn finish(result: &CmdResult) {
    print_messages(&result.messages);

    if let Some(body) = &result.notification {
        if let Err(e) = notify::send(body) {
            warn!("desktop notification failed: {}", e);
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
