use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use undercover::*;

fn table() -> Table {
    Table::from_rows([
        ("cat", vec![1.00, 0.00, 0.00]),
        ("kitten", vec![0.90, 0.10, 0.00]),
        ("milk", vec![0.98, 0.00, 0.02]),
        ("lion", vec![0.70, 0.30, 0.00]),
        ("dog", vec![0.60, 0.40, 0.00]),
        ("house", vec![0.00, 1.00, 0.00]),
        ("cheese", vec![0.50, 0.00, 0.50]),
        ("friend", vec![0.10, 0.70, 0.70]),
        ("sleep", vec![0.00, 0.00, 1.00]),
    ])
    .unwrap()
}

/// Random legal snapshot: up to half the vocabulary spoken in seat order,
/// some roles revealed.
fn snapshot(rng: &mut SmallRng, table: &Table) -> State {
    let n_players = rng.random_range(3..=8);
    let player = rng.random_range(1..=n_players);
    let secret = match rng.random_bool(0.3) {
        true => String::new(),
        false => table.word(rng.random_range(0..table.len())).to_string(),
    };
    let spoken = rng.random_range(0..table.len() / 2);
    let mut words = table.vocabulary().words().to_vec();
    words.retain(|w| *w != secret);
    let words = words
        .choose_multiple(rng, spoken)
        .cloned()
        .collect::<Vec<_>>();
    let offset = rng.random_range(0..n_players);
    let speakers = (0..words.len())
        .map(|i| (i + offset) % n_players + 1)
        .collect::<Vec<_>>();
    let roles = (1..=n_players)
        .filter(|_| rng.random_bool(0.25))
        .map(|p| (p, Role::Civilian))
        .collect::<Vec<_>>();
    State::new(n_players, player, &secret, words, speakers, roles).unwrap()
}

#[test]
fn holder_speaks_nearest_to_secret() {
    let ref table = table();
    let ref state = State::new(5, 4, "cat", ["milk"], [3], []).unwrap();
    let mut robot = Robot::new(table, Config::default());
    let word = robot.speak(state).unwrap();
    assert_eq!(word, "kitten");
    let ref reference = table.vector_of("cat").unwrap();
    let best = Metric::Euclidean.distance(reference, table.vector_of(&word).unwrap());
    for other in table.vocabulary().words() {
        if other != "cat" && other != "milk" {
            assert!(best <= Metric::Euclidean.distance(reference, table.vector_of(other).unwrap()));
        }
    }
}

#[test]
fn white_votes_one_of_one_three_five() {
    let ref table = table();
    let ref state = State::new(
        5,
        4,
        "",
        ["milk", "lion", "house", "cheese", "friend"],
        [3, 4, 2, 1, 5],
        [(2, Role::Undercover)],
    )
    .unwrap();
    let mut robot = Robot::new(table, Config::default());
    for _ in 0..100 {
        assert!([1, 3, 5].contains(&robot.vote(state).unwrap()));
    }
}

#[test]
fn parrot_is_voted_out() {
    let ref table = table();
    let ref state = State::new(4, 1, "cat", ["friend", "cat", "sleep"], [2, 3, 4], []).unwrap();
    let mut robot = Robot::new(table, Config::default());
    assert_eq!(robot.vote(state).unwrap(), 3);
}

#[test]
fn exhausted_vocabulary_never_yields_a_word() {
    let ref table = table();
    let spoken = ["kitten", "milk", "lion", "dog", "house", "cheese", "friend", "sleep"];
    let speakers = [1, 2, 3, 4, 5, 6, 7, 8];
    let ref state = State::new(9, 9, "cat", spoken, speakers, []).unwrap();
    let mut robot = Robot::new(table, Config::default());
    assert!(matches!(robot.speak(state), Err(Error::NoCandidate { .. })));
}

#[test]
fn white_guesses_secret_after_elimination() {
    let ref table = table();
    let ref state = State::new(
        4,
        4,
        "",
        ["kitten", "milk", "lion", "house"],
        [1, 2, 3, 4],
        [(4, Role::White)],
    )
    .unwrap();
    let mut robot = Robot::new(table, Config::default());
    assert_eq!(robot.guess(state).unwrap(), "cat");
}

#[test]
fn snapshots_are_left_untouched() {
    let ref table = table();
    let state = State::new(5, 4, "cat", ["milk"], [3], []).unwrap();
    let before = state.clone();
    let mut robot = Robot::new(table, Config::default().with_seed(3));
    robot.speak(&state).unwrap();
    robot.vote(&state).unwrap();
    robot.guess(&state).unwrap();
    assert_eq!(state, before);
}

#[test]
fn random_snapshots_respect_speak_invariants() {
    let ref table = Table::random(512, 16, 11);
    let ref mut rng = SmallRng::seed_from_u64(11);
    for metric in [Metric::Euclidean, Metric::Dot] {
        let mut robot = Robot::new(table, Config::default().with_speak(metric));
        for _ in 0..200 {
            let ref state = snapshot(rng, table);
            let word = robot.speak(state).unwrap();
            assert!(table.vocabulary().contains(&word));
            assert!(state.secret() != Some(word.as_str()));
            assert!(!state.words().contains(&word));
        }
    }
}

#[test]
fn random_snapshots_respect_vote_invariants() {
    let ref table = Table::random(512, 16, 12);
    let ref mut rng = SmallRng::seed_from_u64(12);
    let mut robot = Robot::new(table, Config::default().with_seed(12));
    for _ in 0..500 {
        let ref state = snapshot(rng, table);
        match robot.vote(state) {
            Ok(p) => {
                assert_ne!(p, state.player());
                assert!(!state.roles().contains_key(&p));
            }
            Err(Error::NoCandidate { .. }) => assert!(state.suspects().is_empty()),
            Err(e) => panic!("unexpected {}", e),
        }
    }
}

#[test]
fn random_snapshots_respect_guess_invariants() {
    let ref table = Table::random(512, 16, 13);
    let ref mut rng = SmallRng::seed_from_u64(13);
    for guessing in [Guessing::Centroid, Guessing::Recent] {
        let mut robot = Robot::new(table, Config::default().with_guessing(guessing));
        for _ in 0..200 {
            let ref state = snapshot(rng, table);
            match robot.guess(state) {
                Ok(word) => assert!(!state.words().contains(&word)),
                Err(Error::NoCandidate { .. }) => assert!(state.words().is_empty()),
                Err(e) => panic!("unexpected {}", e),
            }
        }
    }
}

#[test]
fn cache_round_trip_feeds_the_robot() {
    let dir = tempfile::tempdir().unwrap();
    let ref path = Cache::path(dir.path(), DEFAULT_MODEL);
    let original = table();
    Cache::save(&original, path).unwrap();
    let vocabulary = Vocabulary::new(original.vocabulary().words().iter().cloned()).unwrap();
    let ref loaded = Cache::create_or_load(path, vocabulary, 3).unwrap();
    assert_eq!(loaded, &original);
    let ref state = State::new(5, 4, "cat", ["milk"], [3], []).unwrap();
    assert_eq!(Robot::new(loaded, Config::default()).speak(state).unwrap(), "kitten");
}
