//! Plays one match of War between a human and a computer player.

use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{
    CardList, Game, GameOptions, MatchOutcome, PlayerKind, RoundError, RoundOutcome, Seat,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Card Game: War");
    println!("==============\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default()
        .with_player1_name("Player")
        .with_player1_kind(PlayerKind::Human)
        .with_player2_name("Computer")
        .with_player2_kind(PlayerKind::Ai);
    let mut game = Game::new(options, seed);

    println!("Dealing cards...");
    match game.deal() {
        Ok(summary) => {
            println!(
                "{} received {} cards",
                game.player(Seat::Player1).name(),
                summary.player1
            );
            println!(
                "{} received {} cards\n",
                game.player(Seat::Player2).name(),
                summary.player2
            );
        }
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    }

    loop {
        match game.play_round() {
            Ok(outcome) => print_round(&game, &outcome),
            Err(RoundError::HandEmpty(_)) => break,
            Err(err) => {
                println!("Round stopped: {err}\n");
                break;
            }
        }
    }

    print_result(&game);
}

fn print_round(game: &Game, outcome: &RoundOutcome) {
    let name1 = game.player(Seat::Player1).name();
    let name2 = game.player(Seat::Player2).name();

    println!("--- Round {} ---", outcome.round);
    println!("{name1} plays: {}", outcome.player1_card);
    println!("{name2} plays: {}", outcome.player2_card);

    let winner = game.player(outcome.winner).name();
    if outcome.went_to_war() {
        for war in &outcome.wars {
            println!("War! Each player burns {} cards...", war.player1_burned.len());
            println!("{name1} burns: {}", CardList(&war.player1_burned));
            println!("{name2} burns: {}", CardList(&war.player2_burned));
            println!("{name1} plays: {}", war.player1_card);
            println!("{name2} plays: {}", war.player2_card);
        }
        if let Some(seat) = outcome.forfeit {
            println!(
                "{} does not have enough cards for war.",
                game.player(seat).name()
            );
        }
        println!("{winner} wins the war!");
    } else {
        println!("{winner} wins this round!");
    }

    println!(
        "Score: {name1} {} - {name2} {}\n",
        outcome.score.player1, outcome.score.player2
    );
}

fn print_result(game: &Game) {
    let result = game.result();
    let name1 = game.player(Seat::Player1).name();
    let name2 = game.player(Seat::Player2).name();

    println!("=== GAME OVER ===");
    match result.outcome {
        MatchOutcome::Winner(seat) => println!(
            "Winner: {} with {} points!",
            game.player(seat).name(),
            result.score.of(seat)
        ),
        MatchOutcome::Draw => println!("It's a draw!"),
    }
    println!(
        "Final score: {name1} {} - {name2} {}",
        result.score.player1, result.score.player2
    );
}
