// File: crates/art-cli/src/main.rs
// Summary: CLI that renders promo artwork to PNG, accepts logo uploads and runs the artwork store flow.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use art_core::{
    theme, ArtworkForm, ArtworkRequest, ArtworkStore, AssetSource, Compositor, Download, LogoRef, LogoUploader,
    MissionVariant, PreviewSession, RenderOptions, UploadPolicy,
};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "promo-art", version, about = "Square promo artwork generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a preview frame and save it through the download handler.
    Render(RenderArgs),
    /// Validate, normalize (500x500, transparent padding) and store a PNG logo.
    UploadLogo {
        file: PathBuf,
        #[arg(long, default_value = "uploads")]
        uploads_dir: PathBuf,
    },
    /// Create an artwork record, generate its image into the uploads dir, list recent records.
    Generate(GenerateArgs),
}

#[derive(Args)]
struct ArtArgs {
    /// Company name (highlighted line of the follow layout).
    #[arg(long, default_value = "")]
    company: String,
    /// Brand color as #RRGGBB or a preset name (green, blue, purple, pink, orange, red).
    #[arg(long, default_value = "green")]
    color: String,
    /// follow-instagram | choose-proplayer
    #[arg(long, default_value = "follow-instagram")]
    mission: String,
    /// Corner icon image; a built-in icon is drawn when omitted.
    #[arg(long)]
    icon: Option<PathBuf>,
    #[arg(long, default_value = "Trexx")]
    wordmark: String,
    #[arg(long, default_value = "CLUB")]
    badge: String,
}

impl ArtArgs {
    fn compositor(&self) -> Compositor {
        Compositor::new(RenderOptions {
            wordmark: self.wordmark.clone(),
            badge_label: self.badge.clone(),
            icon: self.icon.clone().map(AssetSource::File).unwrap_or_default(),
            ..RenderOptions::default()
        })
    }
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    art: ArtArgs,
    /// Logo image drawn in the footer instead of the wordmark.
    #[arg(long)]
    logo: Option<PathBuf>,
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    art: ArtArgs,
    /// Public logo path as returned by upload-logo (`/uploads/...`).
    #[arg(long)]
    logo_path: Option<String>,
    #[arg(long, default_value = "uploads")]
    uploads_dir: PathBuf,
    /// How many recent records to print (library default when omitted).
    #[arg(long)]
    recent: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => render(args).await,
        Command::UploadLogo { file, uploads_dir } => upload_logo(&file, uploads_dir),
        Command::Generate(args) => generate(args),
    }
}

async fn render(args: RenderArgs) -> Result<()> {
    let color = theme::resolve(&args.art.color).context("parsing --color")?;
    let mission: MissionVariant = args.art.mission.parse().context("parsing --mission")?;
    let mut request = ArtworkRequest::new(args.art.company.clone(), color, mission);
    if let Some(logo) = &args.logo {
        request = request.with_logo(LogoRef::new(logo));
    }

    let mut session = PreviewSession::new(args.art.compositor(), save_into(args.out_dir.clone()))?;
    session.submit(request);
    if !session.has_content() {
        warn!("no company name given; rendering the fallback headline");
    }
    session.settle().await;

    let file_name = session.download()?;
    println!("Wrote {}", args.out_dir.join(file_name).display());
    Ok(())
}

/// Download handler that writes each artwork into `dir`.
fn save_into(dir: PathBuf) -> art_core::DownloadHandler {
    Box::new(move |d: Download| {
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join(&d.file_name), &d.png)
    })
}

fn upload_logo(file: &Path, uploads_dir: PathBuf) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let uploader = LogoUploader::new(UploadPolicy::with_dir(uploads_dir));
    let uploaded = uploader.accept(&bytes, None)?;
    println!("{}", serde_json::to_string_pretty(&uploaded)?);
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let color = theme::resolve(&args.art.color).context("parsing --color")?;
    let form = ArtworkForm {
        company_name: args.art.company.clone(),
        primary_color: color.to_hex(),
        mission_type: args.art.mission.clone(),
        template_type: None,
        logo_path: args.logo_path.clone(),
    };
    let new = form.validate()?;

    let store = ArtworkStore::new();
    let uploads = UploadPolicy::with_dir(args.uploads_dir);
    let artwork = store.create(new);
    let generated = store.generate(artwork.id, &args.art.compositor(), &uploads)?;
    info!("artwork {} rendered to {}", artwork.id, generated.image_path);

    println!("{}", serde_json::to_string_pretty(&generated)?);
    let recent = match args.recent {
        Some(limit) => store.recent(limit),
        None => store.recent_default(),
    };
    println!("{}", serde_json::to_string_pretty(&recent)?);
    Ok(())
}
