//! Dispatch from parsed arguments to `PhotoApi`.
//!
//! Handlers call exactly one API method and hand the `CmdResult` to
//! `render`. A result carrying an error message still prints in full, then
//! turns into a non-zero exit.

use super::capture::StdinCapture;
use super::gate::TerminalGate;
use super::logging;
use super::render::{print_messages, render_paths, render_photo_json, render_photo_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use photoindex::api::PhotoApi;
use photoindex::capture::FileCapture;
use photoindex::commands::CmdResult;
use photoindex::error::{PhotoError, Result};
use photoindex::gate::{Decision, FixedGate};
use photoindex::init::initialize;
use photoindex::store::fs_backend::{FsBlobStore, FsMetadataStore};
use std::path::{Path, PathBuf};
use tracing::debug;

type AppApi = PhotoApi<FsMetadataStore, FsBlobStore>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut api = initialize(cli.data)?.api;
    debug!(data_dir = %api.data_dir().display(), command = ?cli.command, "dispatching");

    match cli.command {
        Some(Commands::Capture { file }) => handle_capture(&mut api, file),
        Some(Commands::List { json }) => handle_list(&api, json),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut api, index, yes),
        Some(Commands::Doctor) => handle_doctor(&mut api),
        Some(Commands::Path { index }) => handle_paths(&api, index),
        None => handle_list(&api, false),
    }
}

fn handle_capture(api: &mut AppApi, file: Option<PathBuf>) -> Result<()> {
    let result = match file {
        Some(path) if path != Path::new("-") => {
            api.capture_photo(&mut FileCapture::new(Some(path)))?
        }
        _ => api.capture_photo(&mut StdinCapture::default())?,
    };
    finish(result)
}

fn handle_list(api: &AppApi, json: bool) -> Result<()> {
    let result = api.list_photos()?;
    if json {
        println!("{}", render_photo_json(&result.listed_photos)?);
    } else {
        print!("{}", render_photo_list(&result.listed_photos));
    }
    finish(result)
}

fn handle_delete(api: &mut AppApi, index: usize, yes: bool) -> Result<()> {
    let result = if yes {
        api.delete_photo(&mut FixedGate(Decision::Confirm), index)?
    } else {
        api.delete_photo(&mut TerminalGate::new(), index)?
    };
    finish(result)
}

fn handle_doctor(api: &mut AppApi) -> Result<()> {
    finish(api.doctor()?)
}

fn handle_paths(api: &AppApi, index: Option<usize>) -> Result<()> {
    let result = api.photo_paths(index)?;
    print!("{}", render_paths(&result.photo_paths));
    finish(result)
}

fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(PhotoError::Api("command finished with errors".to_string()));
    }
    Ok(())
}
