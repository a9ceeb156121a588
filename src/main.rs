use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use rit::areas::repository::Repository;
use rit::commands::plumbing::cat_file::CatFileMode;

#[derive(Parser)]
#[command(
    name = "rit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A content-addressable git object store",
    long_about = "The plumbing layer of git, written in Rust: typed objects \
    (blob, tree, commit) stored zlib-compressed under their SHA-1 content hash, \
    a recursive tree builder, and a commit builder. \
    Not a git replacement, but the storage core underneath one.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print a stored object's payload, kind, or size",
        group(ArgGroup::new("mode").required(true).args(["pretty", "kind", "size"])),
    )]
    CatFile {
        #[arg(short = 'p', help = "Print the object payload")]
        pretty: bool,
        #[arg(short = 't', help = "Print the object kind")]
        kind: bool,
        #[arg(short = 's', help = "Print the payload size in bytes")]
        size: bool,
        #[arg(index = 1, help = "The object id, full or abbreviated")]
        object: String,
    },
    #[command(
        name = "hash-object",
        about = "Store a file as a blob object and print its id"
    )]
    HashObject {
        #[arg(index = 1, help = "The path to the file")]
        file: String,
    },
    #[command(
        name = "ls-tree",
        about = "List the entries of a tree object in stored order"
    )]
    LsTree {
        #[arg(long = "name-only", help = "Print only entry names")]
        name_only: bool,
        #[arg(short = 'r', help = "Recurse into subtrees")]
        recursive: bool,
        #[arg(index = 1, help = "The tree object id, full or abbreviated")]
        object: String,
    },
    #[command(
        name = "write-tree",
        about = "Snapshot the working directory into a tree object graph and print the root id"
    )]
    WriteTree,
    #[command(
        name = "commit-tree",
        about = "Create a commit object for an existing tree and print its id"
    )]
    CommitTree {
        #[arg(index = 1, help = "The tree object id")]
        tree: String,
        #[arg(short = 'p', long = "parent", help = "The parent commit id")]
        parent: Option<String>,
        #[arg(short = 'm', long = "message", help = "The commit message")]
        message: String,
    },
}

fn repository_at_cwd() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => repository_at_cwd()?,
            };

            repository.init()?
        }
        Commands::CatFile {
            pretty,
            kind,
            size: _,
            object,
        } => {
            let mode = if *pretty {
                CatFileMode::Payload
            } else if *kind {
                CatFileMode::Kind
            } else {
                CatFileMode::Size
            };

            repository_at_cwd()?.cat_file(mode, object)?
        }
        Commands::HashObject { file } => repository_at_cwd()?.hash_object(file)?,
        Commands::LsTree {
            name_only,
            recursive,
            object,
        } => repository_at_cwd()?.ls_tree(object, *name_only, *recursive)?,
        Commands::WriteTree => repository_at_cwd()?.write_tree()?,
        Commands::CommitTree {
            tree,
            parent,
            message,
        } => repository_at_cwd()?.commit_tree(tree, parent.as_deref(), message)?,
    }

    Ok(())
}
