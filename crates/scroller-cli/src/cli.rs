use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "scroller")]
#[command(version, about = "Code Scroller - share, browse and moderate posts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (defaults to the scroller data directory)
    #[arg(long, global = true, env = "SCROLLER_DB_PATH")]
    pub db_path: Option<String>,

    /// API base URL of the Code Scroller backend
    #[arg(long, global = true, env = "SCROLLER_API_BASE")]
    pub api_base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Log in with an existing account
    Login {
        /// Account email
        email: String,
    },

    /// Create an account and log in
    Register {
        /// Full display name
        name: String,
        /// Account email
        email: String,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Browse the approved feed
    Feed {
        /// Only show posts by this author id
        #[arg(long)]
        user: Option<String>,
    },

    /// Submit a post for approval
    Create(CreateArgs),

    /// Comment on a post
    Comment {
        post_id: String,
        content: String,
    },

    /// Like a post
    Like { post_id: String },

    /// Dislike a post
    Dislike { post_id: String },

    /// Toggle a post in the saved set
    Save { post_id: String },

    /// List saved posts
    Saved,

    /// Moderation commands (admin only)
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// AI writing assistance
    #[command(subcommand)]
    Assist(AssistCommands),
}

#[derive(Args)]
pub struct CreateArgs {
    /// Post topic, e.g. "Web Development"
    #[arg(long)]
    pub topic: String,

    /// Post title
    #[arg(long)]
    pub title: String,

    /// Post body
    #[arg(long)]
    pub content: String,

    /// Image URL to attach (defaults to a placeholder)
    #[arg(long, conflicts_with = "image_file")]
    pub image_url: Option<String>,

    /// Local image to upload and attach
    #[arg(long)]
    pub image_file: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List posts awaiting approval
    Pending,
    /// Approve a pending post
    Approve { post_id: String },
    /// Reject (delete) a post
    Reject { post_id: String },
    /// List post authors aggregated from the feeds
    Users,
    /// List comments across all posts
    Comments,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Update display name and photo
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        photo_url: Option<String>,
    },
    /// Change the account password
    Password,
}

#[derive(Subcommand)]
pub enum AssistCommands {
    /// Suggest three titles for a draft
    Titles { content: String },
    /// Check grammar and show inline suggestions
    Grammar { content: String },
    /// Simplify a paragraph
    Simplify { paragraph: String },
}
