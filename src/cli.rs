//! CLI argument parsing with clap.

use clap::Parser;

use crate::config::DefaultsConfig;
use crate::params::PRESET_SIZES;
use crate::prompt::RoomDesign;

/// Describe a room, get photorealistic furnished-room images.
#[derive(Parser, Debug)]
#[command(name = "roomgen", version, about)]
pub struct Cli {
    /// Style preset (see --list-styles) or a free-text style description.
    #[arg(short, long)]
    pub style: Option<String>,

    /// Room type, e.g. "bedroom", "home office".
    #[arg(short, long, default_value = "living room")]
    pub room_type: String,

    /// Key elements / furnishings.
    #[arg(short, long, default_value = "sofa, coffee table, area rug, wall art, floor lamp")]
    pub elements: String,

    /// Surface materials.
    #[arg(short, long, default_value = "light oak wood, linen upholstery, matte black metal")]
    pub materials: String,

    /// Color palette.
    #[arg(short = 'c', long, default_value = "soft neutrals, sage green accents")]
    pub palette: String,

    /// Lighting.
    #[arg(short, long, default_value = "soft ambient, warm temperature, window light")]
    pub lighting: String,

    /// Camera / framing.
    #[arg(long, default_value = "35mm lens, eye-level, centered composition")]
    pub camera: String,

    /// Extra free-form description (bay windows, bookshelves, plants...).
    #[arg(short = 'x', long, default_value = "")]
    pub extra: String,

    /// Image provider: together or openai.
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model name or alias (gpt-1, flux-dev, flux-schnell, flux-pro).
    ///
    /// The model must return base64 image data. Models that only return
    /// URLs, such as dall-e-3, fail with a missing payload error.
    #[arg(long)]
    pub model: Option<String>,

    /// Image size as WIDTHxHEIGHT.
    #[arg(long, help = size_help())]
    pub size: Option<String>,

    /// Number of variations to generate.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// API key for the selected provider (overrides env and config).
    #[arg(long)]
    pub api_key: Option<String>,

    /// Directory to write images into.
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Print the composed prompt and exit without generating.
    #[arg(long)]
    pub print_prompt: bool,

    /// List the style presets and exit.
    #[arg(long)]
    pub list_styles: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Assemble the room design, taking the style from the config default if not given.
    #[must_use]
    pub fn design(&self, defaults: &DefaultsConfig) -> RoomDesign {
        RoomDesign {
            style: self.style.clone().unwrap_or_else(|| defaults.style.clone()),
            room_type: self.room_type.clone(),
            elements: self.elements.clone(),
            materials: self.materials.clone(),
            palette: self.palette.clone(),
            lighting: self.lighting.clone(),
            camera: self.camera.clone(),
            extra: self.extra.clone(),
        }
    }
}

fn size_help() -> String {
    format!("Image size as WIDTHxHEIGHT, e.g. {}", PRESET_SIZES.join(", "))
}
