//! The interactive shell: the line editor and command parser are the core's
//! external collaborators, wired up here against a concrete `OperatingSystem`.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use xrplorer::blob::{BlobStore, MemoryBlobStore};
use xrplorer::os::OperatingSystem;
use xrplorer::{resolve, Action};

#[derive(Debug, Parser)]
#[command(name = "xrplorer", about = "Browse an XRPL-compatible node's object store as a filesystem")]
struct Cli {
    /// Host name to report via `hostname`, e.g. the path to a nodestore directory.
    #[arg(default_value = "/var/lib/rippled/db/nudb")]
    hostname: String,
}

/// A process-backed `OperatingSystem`: real env vars, an in-memory blob oracle,
/// and stdout as the output sink.
struct ProcessOperatingSystem {
    cwd: String,
    env: HashMap<String, String>,
    hostname: String,
    db: MemoryBlobStore,
}

impl ProcessOperatingSystem {
    fn new(hostname: String) -> Self {
        ProcessOperatingSystem {
            cwd: "/".to_string(),
            env: HashMap::new(),
            hostname,
            db: MemoryBlobStore::new(),
        }
    }
}

impl OperatingSystem for ProcessOperatingSystem {
    fn cwd(&self) -> String {
        self.cwd.clone()
    }

    fn chdir(&mut self, path: &str) {
        self.cwd = path.to_string();
    }

    fn getenv(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }

    fn setenv(&mut self, key: &str, value: &str) {
        self.env.insert(key.to_string(), value.to_string());
    }

    fn unsetenv(&mut self, key: &str) {
        self.env.remove(key);
    }

    fn gethostname(&self) -> String {
        self.hostname.clone()
    }

    fn sethostname(&mut self, hostname: &str) {
        self.hostname = hostname.to_string();
    }

    fn db(&self) -> Arc<dyn BlobStore> {
        Arc::new(self.db.clone())
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

fn run_command(os: &mut ProcessOperatingSystem, command: &str, args: &[String]) -> anyhow::Result<bool> {
    match command {
        "exit" => return Ok(false),
        "cd" => {
            let target = args.first().map(String::as_str).unwrap_or("/");
            if let Err(e) = resolve(os, target, Action::Cd) {
                eprintln!("cd: {}: {}", e.path(), e);
            }
        }
        "ls" => {
            let target = args.first().map(String::as_str).unwrap_or(".");
            if let Err(e) = resolve(os, target, Action::Ls) {
                eprintln!("ls: {}: {}", e.path(), e);
            }
        }
        "cat" => {
            for target in args {
                if let Err(e) = resolve(os, target, Action::Cat) {
                    eprintln!("cat: {}: {}", e.path(), e);
                }
            }
        }
        "pwd" => println!("{}", os.cwd()),
        "echo" => println!("{}", args.join(" ")),
        "hostname" => println!("{}", os.gethostname()),
        "help" => {
            println!("commands: cd ls cat pwd echo hostname help exit");
        }
        other => {
            eprintln!("{other}: command not found");
        }
    }
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut os = ProcessOperatingSystem::new(cli.hostname);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let words = match shell_words::split(trimmed) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("parse error: {e}");
                continue;
            }
        };
        let Some((command, args)) = words.split_first() else {
            continue;
        };
        if !run_command(&mut os, command, args)? {
            break;
        }
    }
    Ok(())
}
