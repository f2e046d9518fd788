//! `blogfront`: drives the blog's page controllers against a live server.

mod platform;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use blogfront_engine::ReqwestBlogApi;
use clap::{Parser, Subcommand};
use front_logging::front_info;

use platform::app::App;
use platform::config::ClientConfig;
use platform::ui::dom::{Element, Node};

#[derive(Parser, Debug)]
#[command(name = "blogfront", version, about = "Headless blog front-end client", long_about = None)]
struct Cli {
    /// RON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server base URL, e.g. <http://127.0.0.1:5000>
    #[arg(long)]
    base_url: Option<String>,

    /// Scroll debounce in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a listing page and scroll until no more posts arrive
    Browse {
        #[arg(default_value = "/")]
        path: String,
        /// Stop after this many scroll rounds
        #[arg(long, default_value_t = 100)]
        max_rounds: usize,
        /// Print the markup of every appended post
        #[arg(long)]
        html: bool,
    },
    /// Submit the newsletter form on a page
    Subscribe {
        #[arg(long)]
        email: String,
        #[arg(default_value = "/newsletter")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        config.debounce_ms = debounce_ms;
    }

    front_logging::initialize(config.log, front_logging::parse_level(&config.log_level));
    front_info!("blogfront starting against {}", config.base_url);

    let api = Arc::new(ReqwestBlogApi::new(config.fetch_settings())?);

    match cli.command {
        Command::Browse {
            path,
            max_rounds,
            html,
        } => browse(config, api, &path, max_rounds, html),
        Command::Subscribe { email, path } => subscribe(config, api, &path, &email),
    }
}

fn browse(
    config: ClientConfig,
    api: Arc<ReqwestBlogApi>,
    path: &str,
    max_rounds: usize,
    html: bool,
) -> anyhow::Result<()> {
    let mut app = App::open(config, api, path)?;
    if app.state().feed().is_none() {
        bail!("page {path} has no #posts-container");
    }
    print_nav(&app);

    let rounds = app.scroll_until_exhausted(max_rounds)?;
    let page = app.page();
    for post in page.appended_posts() {
        println!("+ {}", post_line(post));
    }
    if html {
        println!("{}", page.appended_html());
    }
    if page.loading_indicator_visible() {
        println!("a request was still in flight when scrolling stopped");
    }
    println!(
        "{} posts after {} scroll rounds ({} appended){}",
        page.post_count(),
        rounds,
        page.appended_count(),
        if page.end_of_posts_visible() {
            ", end of posts"
        } else {
            ""
        }
    );
    Ok(())
}

fn subscribe(
    config: ClientConfig,
    api: Arc<ReqwestBlogApi>,
    path: &str,
    email: &str,
) -> anyhow::Result<()> {
    let mut app = App::open(config, api, path)?;
    print_nav(&app);
    app.subscribe(email)?;

    let page = app.page();
    let status = page.status();
    println!("[{}] {}", status.class_name, status.text);
    println!(
        "email field: {:?}, button: {:?}{}",
        page.email_value(),
        page.submit_button().label,
        if page.submit_button().disabled {
            " (disabled)"
        } else {
            ""
        }
    );
    Ok(())
}

fn print_nav(app: &App) {
    for link in app.page().nav() {
        let marker = if link.classes.is_empty() { ' ' } else { '*' };
        println!("{marker} {}", link.href);
    }
}

/// `title (date) -> href` for one appended `.post-item`.
fn post_line(post: &Node) -> String {
    let href = post
        .find("a")
        .and_then(|a| a.get_attr("href"))
        .unwrap_or_default();
    let title = post.find("h2").map(Element::text_content);
    let date = post.find("p").map(Element::text_content);
    format!(
        "{} ({}) -> {}",
        title.unwrap_or_default(),
        date.unwrap_or_default(),
        href
    )
}
