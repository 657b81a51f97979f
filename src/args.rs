use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Contains the commands passed to the program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Run as if started in this folder instead of the current one
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// A list of subcommands the program can perform
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates a new repository
    Init,

    /// Shows the object with the specified hash
    #[command(group(ArgGroup::new("show").required(true)))]
    CatFile {
        /// Prints the object content, trees are shown as with ls-tree
        #[arg(short = 'p', group = "show")]
        pretty: bool,
        /// Prints the object type
        #[arg(short = 't', group = "show")]
        kind: bool,
        /// Prints the object size
        #[arg(short = 's', group = "show")]
        size: bool,
        /// Hash of the object to show
        hash: String,
    },

    /// Computes the hash a file would have as a blob
    HashObject {
        /// Also writes the blob to the object database
        #[arg(short = 'w')]
        write: bool,
        /// File to hash
        file: PathBuf,
    },

    /// Lists the entries of a tree object
    LsTree {
        /// Shows only the name of every entry
        #[arg(long)]
        name_only: bool,
        /// Hash of the tree
        hash: String,
    },

    /// Writes the working tree as tree objects and prints the root tree hash
    WriteTree,

    /// Creates a commit object for a tree
    CommitTree {
        /// Hash of the tree the commit points to
        tree: String,
        /// Parent commit, can be repeated
        #[arg(short = 'p', value_name = "PARENT")]
        parents: Vec<String>,
        /// Commit message
        #[arg(short = 'm')]
        message: String,
    },
}
