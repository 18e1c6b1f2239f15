use clap::{Parser, ValueEnum};

use ablog::archive::ArchiveOptions;
use ablog::api::SessionOptions;
use ablog::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "ablog")]
#[command(version)]
#[command(about = "The Atomic Blog: an in-memory micro-blog session in your terminal", long_about = None)]
pub struct Cli {
    /// Number of synthetic posts to seed the main list with
    #[arg(long, default_value_t = 30)]
    pub posts: usize,

    /// Size of the archive pool
    #[arg(long, default_value_t = 100)]
    pub archive_size: usize,

    /// Start with the archive panel shown
    #[arg(long)]
    pub show_archive: bool,

    /// Initial display mode
    #[arg(long, value_enum, default_value_t = ThemeArg::Auto)]
    pub theme: ThemeArg,

    /// Line-oriented output: no screen redraws, no prompt styling
    #[arg(long)]
    pub plain: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ThemeArg {
    Light,
    Dark,
    /// Detect from the terminal color scheme
    Auto,
}

impl ThemeArg {
    pub fn resolve(self) -> Theme {
        match self {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Auto => match dark_light::detect() {
                dark_light::Mode::Dark => Theme::Dark,
                dark_light::Mode::Light => Theme::Light,
            },
        }
    }
}

impl Cli {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            seed_posts: self.posts,
            archive: ArchiveOptions {
                size: self.archive_size,
                visible: self.show_archive,
            },
            theme: self.theme.resolve(),
        }
    }
}
