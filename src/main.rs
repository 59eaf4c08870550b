mod cli;

use clap::Parser;
use cli::{Args, Commands, TagOp};
use event_media::{MediaFormat, capture_pattern, fs as event_fs, tags};
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // Logs go to stderr so `parse` output stays clean JSON on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Parse(a) => {
            let re = capture_pattern(a.event.as_deref().unwrap_or(""))?;
            for name in &a.names {
                match re.captures(name) {
                    Some(caps) => {
                        let media = MediaFormat::from_captures(&caps)?;
                        println!("{}", serde_json::to_string(&media)?);
                    }
                    None => tracing::warn!(file = name, "does not match the event convention"),
                }
            }
        }
        Commands::Rename(a) => {
            let dir = match a.dir {
                Some(d) => d,
                None => std::env::current_dir()?,
            };
            let event = match a.event {
                Some(e) => e,
                None => event_fs::dir_event(&dir)?,
            };
            let renamed = event_fs::rename_into_event(&dir, &event)?;
            tracing::info!(count = renamed.len(), "rename done");
        }
        Commands::Tag(a) => match a.op {
            TagOp::Add(t) => {
                let path = tags::add_tags(&t.file, &t.tags)?;
                tracing::info!("tagged {}", path.display());
            }
            TagOp::Rm(t) => {
                let path = tags::remove_tags(&t.file, &t.tags)?;
                tracing::info!("untagged {}", path.display());
            }
        },
    }

    Ok(())
}
