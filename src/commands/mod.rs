mod cat_file;
mod commit_tree;
mod hash_object;
mod init;
mod ls_tree;
mod write_tree;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use cat_file::cat_file;
use commit_tree::commit_tree;
use hash_object::hash_object;
use init::init;
use ls_tree::ls_tree;
use write_tree::write_tree;

use crate::args::{Args, Command};
use crate::fs::Repository;

/// Calls the corresponding function to perform every command variant.
///
/// # Return
///
/// The bytes to print on the standard output.
///
/// # Errors
///
/// This function will fail if any of the executed commands return an error.
pub fn execute_command(args: &Args) -> Result<Vec<u8>> {
    let repository = Repository::new(work_tree_path(args.directory.as_ref())?);

    if let Command::Init = args.command {
        // Only command that can be executed without a repository already existing
        return init(&repository);
    }
    if !repository.exists() {
        bail!("{:?} is not a git repository", repository.work_tree());
    }

    match &args.command {
        Command::Init => init(&repository),
        Command::CatFile {
            pretty,
            kind,
            size,
            hash,
        } => cat_file(&repository, hash, *pretty, *kind, *size),
        Command::HashObject { write, file } => hash_object(&repository, file, *write),
        Command::LsTree { name_only, hash } => ls_tree(&repository, hash, *name_only),
        Command::WriteTree => write_tree(&repository),
        Command::CommitTree {
            tree,
            parents,
            message,
        } => commit_tree(&repository, tree, parents, message),
    }
}

fn work_tree_path(directory: Option<&PathBuf>) -> Result<PathBuf> {
    let current = env::current_dir().context("could not get current dir")?;
    Ok(match directory {
        Some(path) => path_clean::clean(current.join(path)),
        None => current,
    })
}
