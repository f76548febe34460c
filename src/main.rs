//! Undercover Binary
//!
//! Loads the vocabulary and embedding cache once, then answers one query.
//!
//! Commands: speak, vote, guess, inspect

use anyhow::Context;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;
use undercover::*;

#[derive(Parser)]
#[command(name = "undercover", about = "Embedding-backed Undercover player")]
struct Cli {
    /// Word list, one word per line, in cache row order.
    #[arg(long)]
    vocabulary: PathBuf,
    /// Embedding cache. Defaults to `<cache-dir>/<model>.embeddings`.
    #[arg(long)]
    cache: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,
    /// Encoder the cache was produced with.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,
    #[arg(long, default_value_t = Metric::Euclidean)]
    speak_metric: Metric,
    #[arg(long, default_value_t = Metric::Dot)]
    vote_metric: Metric,
    #[arg(long, default_value_t = Metric::Euclidean)]
    guess_metric: Metric,
    #[arg(long, default_value_t = Guessing::Centroid)]
    guessing: Guessing,
    /// Seed for random votes.
    #[arg(long)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Word to say this turn.
    Speak(Snapshot),
    /// Player to eliminate.
    Vote(Snapshot),
    /// Mr White's guess after elimination.
    Guess(Snapshot),
    /// Cache shape, and optionally the nearest neighbours of a word.
    Inspect {
        word: Option<String>,
        #[arg(long, default_value_t = 10)]
        k: usize,
    },
}

#[derive(Args)]
struct Snapshot {
    #[arg(long)]
    players: usize,
    #[arg(long)]
    player: PlayerId,
    /// Leave empty when playing Mr White.
    #[arg(long, default_value = "")]
    secret: String,
    #[arg(long, value_delimiter = ',')]
    words: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    speakers: Vec<PlayerId>,
    /// Revealed roles as `player=role`, e.g. `2=U,5=C`.
    #[arg(long, value_delimiter = ',', value_parser = reveal)]
    roles: Vec<(PlayerId, Role)>,
}

impl Snapshot {
    fn state(self) -> anyhow::Result<State> {
        State::new(
            self.players,
            self.player,
            &self.secret,
            self.words,
            self.speakers,
            self.roles,
        )
        .context("building game state")
    }
}

impl Cli {
    fn config(&self) -> Config {
        let config = Config::default()
            .with_speak(self.speak_metric)
            .with_vote(self.vote_metric)
            .with_guess(self.guess_metric)
            .with_guessing(self.guessing);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
    fn path(&self) -> PathBuf {
        self.cache
            .clone()
            .unwrap_or_else(|| Cache::path(&self.cache_dir, &self.model))
    }
}

fn reveal(s: &str) -> std::result::Result<(PlayerId, Role), String> {
    let (player, role) = s
        .split_once('=')
        .ok_or_else(|| format!("expected player=role, got {:?}", s))?;
    let player = player
        .trim()
        .parse::<PlayerId>()
        .map_err(|e| format!("bad player {:?}: {}", player, e))?;
    let role = Role::try_from(role).map_err(|e| e.to_string())?;
    Ok((player, role))
}

fn main() -> anyhow::Result<()> {
    log();
    let cli = Cli::parse();
    let ref path = cli.path();
    let config = cli.config();
    if let Command::Inspect { word: None, .. } = cli.command {
        let (rows, cols) = Cache::shape(path).with_context(|| format!("reading {}", path.display()))?;
        println!("{} x {}", rows, cols);
        return Ok(());
    }
    let vocabulary = Vocabulary::load(&cli.vocabulary)
        .with_context(|| format!("reading vocabulary {}", cli.vocabulary.display()))?;
    let ref table = Cache::create_or_load(path, vocabulary, cli.dimension)
        .with_context(|| format!("loading embedding cache {}", path.display()))?;
    let mut player = Backup::new(Robot::new(table, config), Fish::new(table.vocabulary()));
    match cli.command {
        Command::Speak(snapshot) => println!("{}", player.speak(&snapshot.state()?)?),
        Command::Vote(snapshot) => println!("{}", player.vote(&snapshot.state()?)?),
        Command::Guess(snapshot) => println!("{}", player.guess(&snapshot.state()?)?),
        Command::Inspect { word: Some(word), k } => {
            let index = table.index_of(&word)?;
            let distances = config.speak.against(table.row(index), table);
            let mut neighbours = (0..table.len()).filter(|&i| i != index).collect::<Vec<_>>();
            neighbours.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
            println!("{} x {}", table.len(), table.dimension());
            for i in neighbours.into_iter().take(k) {
                println!("{:<32}{:>10.4}", table.word(i), distances[i]);
            }
        }
        Command::Inspect { word: None, .. } => unreachable!("handled before loading"),
    }
    Ok(())
}
