use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use urbannest::api::{featured, load_catalog, ApiError};
use urbannest::contact::{ContactForm, SUCCESS_MESSAGE};
use urbannest::format::{format_rupees, price_range_label, truncate_text, DESCRIPTION_PREVIEW_CHARS};
use urbannest::listings::{FilterControls, ListingView, PageMarker};
use urbannest::{assistant, ApiClient, Config, FilterParams, ListingSession, Property, PropertyId, PropertySource};

#[derive(Parser)]
#[command(name = "urbannest")]
#[command(about = "Browse Urban Nest property listings from the terminal")]
#[command(version)]
struct Cli {
    /// Property API base URL (overrides URBANNEST_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and page through the catalog
    List(ListArgs),

    /// Show one property
    Show { id: i64 },

    /// Show the home page's featured properties
    Featured,

    /// Ask the Orion assistant a question
    Ask {
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Check a contact-form submission
    Contact(ContactArgs),
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    /// Defaults to "Inquiry about: <title>" when --property is given
    #[arg(long)]
    subject: Option<String>,

    #[arg(long, default_value = "")]
    message: String,

    /// Title of the property the inquiry is about
    #[arg(long)]
    property: Option<String>,
}

#[derive(Args)]
struct ListArgs {
    /// Text matched against the location, ignoring case
    #[arg(short, long, default_value = "")]
    search: String,

    /// City that must appear in the location
    #[arg(short, long, default_value = "")]
    location: String,

    #[arg(long, default_value = "0")]
    min_price: String,

    #[arg(long, default_value = "999999999")]
    max_price: String,

    /// default, price-low, price-high or location
    #[arg(long, default_value = "default")]
    sort: String,

    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Listings per page (overrides URBANNEST_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<usize>,

    /// Narrow the catalog with the API's location search before filtering
    #[arg(long)]
    server_search: bool,

    /// Print the page as JSON
    #[arg(long)]
    json: bool,
}

impl FilterControls for ListArgs {
    fn search_text(&self) -> &str {
        &self.search
    }

    fn location_filter(&self) -> &str {
        &self.location
    }

    fn min_price(&self) -> &str {
        &self.min_price
    }

    fn max_price(&self) -> &str {
        &self.max_price
    }

    fn sort_by(&self) -> &str {
        &self.sort
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to read configuration")?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    match cli.command {
        Commands::List(args) => list(&config, args).await,
        Commands::Show { id } => show(&config, PropertyId(id)).await,
        Commands::Featured => show_featured(&config).await,
        Commands::Ask { message } => {
            if let Some(reply) = assistant::respond(&message.join(" ")) {
                println!("Orion: {}", reply);
            }
            Ok(())
        }
        Commands::Contact(args) => contact(args),
    }
}

fn contact(args: ContactArgs) -> Result<()> {
    let mut form = match &args.property {
        Some(title) => ContactForm::inquiry_about(title),
        None => ContactForm::default(),
    };
    form.name = args.name;
    form.email = args.email;
    form.phone = args.phone;
    form.message = args.message;
    if let Some(subject) = args.subject {
        form.subject = subject;
    }

    form.validate()?;
    let form = form.trimmed();
    info!("Contact request from {} <{}>: {}", form.name, form.email, form.subject);
    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}

fn client(config: &Config) -> Result<ApiClient> {
    ApiClient::new(&config.api_url, config.timeout).context("Failed to create API client")
}

// The visitor only ever sees the short message; the log keeps the cause.
fn fetch_failed(error: ApiError) -> anyhow::Error {
    error!("Error loading properties: {}", error);
    anyhow!(error.user_message())
}

fn detail_fetch_failed(error: ApiError) -> anyhow::Error {
    error!("Error loading property details: {}", error);
    anyhow!(error.detail_message())
}

async fn list(config: &Config, args: ListArgs) -> Result<()> {
    let mut config = config.clone();
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
        config.validate()?;
    }

    let client = client(&config)?;
    let params = FilterParams::from_controls(&args);

    let properties = if args.server_search {
        client
            .search_by_location(&params.search_text)
            .await
            .map_err(fetch_failed)?
    } else {
        let catalog = load_catalog(&client).await.map_err(fetch_failed)?;
        info!(
            "Catalog of {} properties fetched at {}",
            catalog.properties.len(),
            catalog.fetched_at.to_rfc3339()
        );
        catalog.properties
    };

    let mut session = ListingSession::new(properties, config.page_size);
    if params != FilterParams::default() {
        session.apply_filters(params);
    }
    session.go_to_page(args.page);
    let view = session.view();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", session.count_label());
    println!(
        "Price range: {}",
        price_range_label(session.params().min_price, session.params().max_price)
    );
    println!();
    print_page(&view);
    Ok(())
}

fn print_page(view: &ListingView) {
    if view.page.is_empty() {
        println!("No properties found matching your criteria.");
        return;
    }

    let offset = view.page.range_start;
    for (i, property) in view.page.items.iter().enumerate() {
        print_card(offset + i, property);
    }

    if view.page.shows_controls() {
        let strip: Vec<String> = view
            .page_numbers
            .iter()
            .map(|marker| match marker {
                PageMarker::Ellipsis => "...".to_string(),
                PageMarker::Number(n) if *n == view.page.current_page => format!("[{}]", n),
                PageMarker::Number(n) => n.to_string(),
            })
            .collect();
        println!("Pages: {}", strip.join(" "));
    }
    if let Some(summary) = &view.range_summary {
        println!("{}", summary);
    }
}

fn print_card(position: usize, property: &Property) {
    println!("{}. {} ({})", position, property.title, format_rupees(property.price));
    println!("   📍 {}", property.location);
    println!(
        "   {}",
        truncate_text(property.description_or_empty(), DESCRIPTION_PREVIEW_CHARS)
    );
    println!("   {}", property.detail_path());
    println!();
}

async fn show(config: &Config, id: PropertyId) -> Result<()> {
    let client = client(config)?;
    let property = client.fetch_by_id(id).await.map_err(detail_fetch_failed)?;

    println!("{}", property.title);
    println!("📍 {}", property.location);
    println!("{}", format_rupees(property.price));
    println!();
    println!("{}", property.description_or_empty());
    if let Some(image) = &property.image_url {
        println!("Image: {}", image);
    }
    Ok(())
}

async fn show_featured(config: &Config) -> Result<()> {
    let client = client(config)?;
    let catalog = load_catalog(&client).await.map_err(fetch_failed)?;
    let picks = featured(&catalog.properties, config.featured_count);

    if picks.is_empty() {
        println!("No properties available at the moment.");
        return Ok(());
    }

    info!("Featuring {} of {} properties", picks.len(), catalog.properties.len());
    for (i, property) in picks.iter().enumerate() {
        print_card(i + 1, property);
    }
    Ok(())
}
