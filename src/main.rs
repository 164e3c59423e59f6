use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Target};
use log::{LevelFilter, debug, error, info, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;

use carousel::constants::*;
use carousel::images::path_urls;
use carousel::inputs::InputPanel;
use carousel::layout::{Control, Layout};
use carousel::render::draw_carousel;
use carousel::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use carousel::{Carousel, CarouselConfig, CarouselError, Direction, MoveOutcome, OverlapPolicy};

#[derive(Parser, Debug)]
#[command(name = "carousel", about = "Scroll through a directory of images", version)]
struct Cli {
    /// Directory containing png/jpg/jpeg/bmp/gif images
    image_directory: PathBuf,

    /// Items advanced per move
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,

    /// Number of items visible at once
    #[arg(long, default_value_t = DEFAULT_FRAME_SIZE)]
    frame_size: f64,

    /// Pixel width of one item and of the arrow buttons
    #[arg(long, default_value_t = DEFAULT_ITEM_WIDTH)]
    item_width: f64,

    /// Duration of one move in milliseconds
    #[arg(long, default_value_t = DEFAULT_ANIMATION_DURATION)]
    animation_duration: f64,

    /// Duplicate the image list when scrolling past either end
    #[arg(long)]
    infinite: bool,

    /// Let a new move start while the previous one is still animating
    #[arg(long)]
    allow_overlap: bool,

    /// Shuffle the images once at startup
    #[arg(long)]
    shuffle: bool,
}

impl Cli {
    fn config(&self) -> CarouselConfig {
        CarouselConfig {
            step: self.step,
            frame_size: self.frame_size,
            item_width: self.item_width,
            animation_duration: self.animation_duration,
        }
    }
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("carousel", LevelFilter::Debug)
            .init();
    }
}

fn report(result: Result<MoveOutcome, CarouselError>) {
    match result {
        Ok(outcome) => debug!("move: {:?}", outcome),
        Err(CarouselError::ContainerNotReady) => debug!("move skipped, container not ready"),
        Err(e) => warn!("{}", e),
    }
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let mut image_paths = load_sorted_image_paths(&cli.image_directory)?;
    if cli.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("Found {} images in {}", image_paths.len(), cli.image_directory.display());

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load textures, keeping only images that loaded ---
    let mut loaded_paths = Vec::new();
    let mut textures = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => {
                textures.push(texture);
                loaded_paths.push(path);
            }
            Err(e) => error!("{:#}", e),
        }
    }
    if textures.is_empty() {
        anyhow::bail!("No images could be loaded from {}", cli.image_directory.display());
    }

    let overlap = if cli.allow_overlap { OverlapPolicy::Stack } else { OverlapPolicy::Serialize };
    let mut carousel = Carousel::new(path_urls(&loaded_paths), cli.config(), cli.infinite)
        .with_overlap_policy(overlap);
    carousel.mount();

    let mut panel = InputPanel::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt_ms = f64::from(rl.get_frame_time()) * 1000.0;
        let layout = Layout::compute(carousel.config());

        // --- Input ---
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            let control = layout.control_at(mouse.x, mouse.y);
            match control {
                Some(Control::Prev) => report(carousel.handle_move(Direction::Prev)),
                Some(Control::Next) => report(carousel.handle_move(Direction::Next)),
                Some(Control::Input(field)) => panel.focus(Some(field)),
                None => panel.focus(None),
            }
        }

        if panel.focused().is_none() {
            if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
                report(carousel.next());
            }
            if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
                report(carousel.prev());
            }
        }

        let mut submissions = Vec::new();
        while let Some(c) = rl.get_char_pressed() {
            submissions.extend(panel.type_char(c));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
            submissions.extend(panel.backspace());
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            panel.focus(None);
        }
        for (name, value) in submissions {
            if let Err(e) = carousel.handle_change(name, &value) {
                warn!("{}", e);
            }
        }

        // --- Update ---
        carousel.tick(dt_ms);

        // --- Draw ---
        let layout = Layout::compute(carousel.config());
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        draw_carousel(&mut d, &carousel, &textures, &layout, &panel);
    }

    Ok(())
}
