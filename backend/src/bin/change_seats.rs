//! Change the seats of a webinar held in an in-memory store seeded from JSON.
//!
//! The seed file is a JSON array of webinars in their serialised form. The
//! command prints the change response as JSON on success. On rejection it
//! prints the mapped domain error payload and exits with a failure status.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use webinars::WebinarSettings;
use webinars::domain::ports::{ChangeSeatsCommand, ChangeSeatsRequest};
use webinars::domain::{ChangeSeatsService, DisplayName, Error, User, UserId, WebinarId};
use webinars::outbound::persistence::InMemoryWebinarRepository;

/// `change-seats` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "change-seats",
    about = "Change the seat capacity of a webinar in a JSON-seeded store",
    version
)]
struct CliArgs {
    /// Path to a JSON array of webinars.
    #[arg(long = "webinars", value_name = "path")]
    webinars_path: PathBuf,
    /// Identifier of the user requesting the change.
    #[arg(long = "user-id", value_name = "id", value_parser = parse_user_id)]
    user_id: UserId,
    /// Display name of the requesting user.
    #[arg(
        long = "display-name",
        value_name = "name",
        default_value = "Operator",
        value_parser = parse_display_name
    )]
    display_name: DisplayName,
    /// Identifier of the webinar to change.
    #[arg(long = "webinar-id", value_name = "id", value_parser = parse_webinar_id)]
    webinar_id: WebinarId,
    /// Requested seat capacity.
    #[arg(long = "seats", value_name = "count")]
    seats: u32,
}

impl CliArgs {
    fn request(&self) -> ChangeSeatsRequest {
        ChangeSeatsRequest {
            user: User::new(self.user_id.clone(), self.display_name.clone()),
            webinar_id: self.webinar_id.clone(),
            seats: self.seats,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let settings = WebinarSettings::load_from_iter([OsString::from("change-seats")])
        .map_err(|error| eyre!("failed to load webinar settings: {error}"))?;
    let policy = settings
        .seat_policy()
        .wrap_err("invalid WEBINARS_MAX_SEATS")?;

    let seed = read_seed(&args.webinars_path)?;
    let repo = InMemoryWebinarRepository::from_json(&seed).wrap_err_with(|| {
        format!(
            "failed to parse webinar seed '{}'",
            args.webinars_path.display()
        )
    })?;
    info!(
        webinars = repo.len(),
        max_seats = policy.max_seats(),
        "webinar store seeded"
    );

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to create Tokio runtime")?;
    let service = ChangeSeatsService::with_policy(Arc::new(repo), policy);

    match runtime.block_on(service.execute(args.request())) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(rejection) => {
            let error = Error::from(rejection);
            println!("{}", serde_json::to_string_pretty(&error)?);
            Err(eyre!("seat change rejected: {error}"))
        }
    }
}

fn read_seed(path: &Path) -> Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("seed path '{}' must name a file", path.display()))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).wrap_err_with(|| {
        format!("failed to open seed directory '{}'", parent.display())
    })?;
    directory
        .read_to_string(Path::new(file_name))
        .wrap_err_with(|| format!("failed to read seed file '{}'", path.display()))
}

fn parse_user_id(raw: &str) -> Result<UserId, String> {
    UserId::new(raw).map_err(|error| error.to_string())
}

fn parse_display_name(raw: &str) -> Result<DisplayName, String> {
    DisplayName::new(raw).map_err(|error| error.to_string())
}

fn parse_webinar_id(raw: &str) -> Result<WebinarId, String> {
    WebinarId::new(raw).map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    //! Argument parsing coverage for the `change-seats` command.

    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("change-seats").chain(args.iter().copied()))
    }

    #[rstest]
    fn builds_request_from_arguments() {
        let args = parse(&[
            "--webinars",
            "seed.json",
            "--user-id",
            "alice",
            "--webinar-id",
            "webinar-id",
            "--seats",
            "200",
        ])
        .expect("valid arguments");

        let request = args.request();
        assert_eq!(request.user.id().as_ref(), "alice");
        assert_eq!(request.user.display_name().as_ref(), "Operator");
        assert_eq!(request.webinar_id.as_ref(), "webinar-id");
        assert_eq!(request.seats, 200);
    }

    #[rstest]
    #[case(&["--webinars", "seed.json", "--user-id", "", "--webinar-id", "w", "--seats", "1"])]
    #[case(&["--webinars", "seed.json", "--user-id", "alice", "--webinar-id", "w", "--seats", "-5"])]
    #[case(&["--webinars", "seed.json", "--user-id", "alice", "--webinar-id", "w"])]
    fn rejects_invalid_arguments(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
