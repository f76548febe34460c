//! Decision engine for an automated Undercover player.
//!
//! Every turn the game loop hands us a [`State`] snapshot and asks for one
//! decision: a word to [speak](strategy::speak), a player to
//! [vote](strategy::vote) against, or, once eliminated as Mr White, a
//! [guess](strategy::guess) at the Civilians' secret word.
//!
//! All three strategies rank candidates by distance in a precomputed
//! embedding [`Table`], loaded once at startup and never mutated afterwards.
//!
//! ## Modules
//!
//! - [`embedding`]: [`Vocabulary`], [`Table`] and the on-disk [`Cache`]
//! - [`distance`]: [`Metric`]s, masked selection and [`Centroid`]s
//! - [`game`]: [`State`] snapshots and revealed [`Role`]s
//! - [`strategy`]: speak / vote / guess procedures
//! - [`players`]: the [`Player`] seam with [`Robot`], [`Fish`] and [`Backup`]
pub mod config;
pub mod distance;
pub mod embedding;
pub mod error;
pub mod game;
pub mod players;
pub mod strategy;

pub use config::*;
pub use distance::*;
pub use embedding::*;
pub use error::*;
pub use game::*;
pub use players::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Distances between embeddings. Lower is closer under every [`Metric`].
pub type Energy = f32;
/// Player identifier as handed out by the game loop (1..=n_players).
pub type PlayerId = usize;

// ============================================================================
// EMBEDDING CACHE PARAMETERS
// ============================================================================
/// Sentence encoder the cached vectors were produced with.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";
/// Output width of [`DEFAULT_MODEL`].
pub const DEFAULT_DIMENSION: usize = 384;
/// Directory the cache lives in, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "cache";
/// File extension of persisted embedding tables.
pub const CACHE_EXTENSION: &str = "embeddings";
/// Leading bytes of every persisted embedding table.
pub const CACHE_MAGIC: &[u8; 8] = b"UCVEC\n\xFF\0";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
