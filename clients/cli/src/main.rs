use std::error::Error;
use std::io::{self, Write};

use blackjack_engine::{Phase, Round, Session, Shoe, COINS, DEFAULT_BALANCE};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use log::debug;

mod logger;

const LOGO: &str = r#"
.------.            _     _            _    _            _
|A_  _ |.          | |   | |          | |  (_)          | |
|( \/ ).-----.     | |__ | | __ _  ___| | ___  __ _  ___| | __
| \  /|K /\  |     | '_ \| |/ _` |/ __| |/ / |/ _` |/ __| |/ /
|  \/ | /  \ |     | |_) | | (_| | (__|   <| | (_| | (__|   <
`-----| \  / |     |_.__/|_|\__,_|\___|_|\_\ |\__,_|\___|_|\_\
      |  \/ K|                            _/ |
      `------'                           |__/
"#;

#[derive(Parser)]
#[command(
    name = "blackjack-cli",
    about = "Play blackjack against the house in the terminal"
)]
struct Args {
    /// Opening bankroll
    #[arg(long, default_value_t = DEFAULT_BALANCE)]
    balance: u32,

    /// Seed the shoe for a reproducible sequence of cards
    #[arg(long)]
    seed: Option<u64>,

    /// Leave previous rounds on screen instead of clearing
    #[arg(long, default_value_t = false)]
    no_clear: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let args = Args::parse();

    let mut shoe = match args.seed {
        Some(seed) => Shoe::seeded(seed),
        None => Shoe::new(),
    };
    let mut session = Session::new(args.balance);

    clean_screen(args.no_clear)?;
    loop {
        if session.is_broke() {
            print_summary(&session);
            let answer =
                prompt("\nYou are out of money. Restart with the default balance? (y/n): ")?;
            if answer.eq_ignore_ascii_case("y") {
                session.restart();
                clean_screen(args.no_clear)?;
                continue;
            }
            break;
        }

        println!("\nYour bank balance: {}", session.balance);
        let answer = prompt("Play a round of blackjack? (y)es / (n)o / (q)uit: ")?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => {
                clean_screen(args.no_clear)?;
                let stake = assemble_bet(&session)?;
                play_round(&mut shoe, &mut session, stake)?;
            }
            "n" | "no" => println!("Okay. Come back soon."),
            "q" | "quit" => break,
            _ => println!("Unknown command. Use y, n, or q."),
        }
    }

    print_summary(&session);
    println!("\nThanks for playing.");
    Ok(())
}

/// Clear the screen and print the logo, unless the user opted out.
fn clean_screen(skip_clear: bool) -> io::Result<()> {
    if !skip_clear {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    }
    println!("{LOGO}");
    Ok(())
}

fn prompt(text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Build a stake coin by coin. Loops until the player has locked in a
/// non-zero stake the balance covers; bad input is reported and re-prompted.
fn assemble_bet(session: &Session) -> io::Result<u32> {
    loop {
        let mut bet = session.bet();
        println!("\nYour bank balance: {}", session.balance);
        println!("Coins accepted at this table: {COINS:?}");
        loop {
            let answer = prompt("Pick a coin (or 'd' when done): ")?;
            if answer.eq_ignore_ascii_case("d") || answer.eq_ignore_ascii_case("done") {
                break;
            }
            let coin: u32 = match answer.parse() {
                Ok(coin) => coin,
                Err(_) => {
                    println!("That is not a coin. Enter a number or 'd'.");
                    continue;
                }
            };
            let count = loop {
                let answer = prompt("How many of that coin: ")?;
                match answer.parse::<u32>() {
                    Ok(count) => break count,
                    Err(_) => println!("Enter a whole number."),
                }
            };
            match bet.add_coins(coin, count) {
                Ok(()) => println!("Bet so far: {}", bet.amount()),
                Err(err) => println!("{err}"),
            }
        }
        match bet.finish() {
            Ok(stake) => {
                println!("\nFinal stake: {stake}");
                debug!("stake locked at {stake}");
                return Ok(stake);
            }
            Err(err) => println!("{err} Try again."),
        }
    }
}

fn show_player_view(round: &Round) {
    println!(
        "\nYour cards: {}, current score: {}",
        round.player,
        round.player_score()
    );
    if let Some(upcard) = round.dealer.upcard() {
        println!("Dealer shows: {upcard}");
    }
}

fn play_round(shoe: &mut Shoe, session: &mut Session, stake: u32) -> io::Result<()> {
    let mut round = Round::deal(shoe);
    debug!(
        "opening deal: player {} dealer {}",
        round.player, round.dealer
    );

    while round.phase == Phase::PlayerTurn {
        show_player_view(&round);
        let answer = prompt("Type 'y' to take another card, 'n' to stand: ")?;
        match answer.to_lowercase().as_str() {
            "y" => {
                round.player_hit(shoe);
            }
            "n" => round.player_stand(),
            _ => println!("Unknown command. Use y or n."),
        }
    }
    show_player_view(&round);

    round.play_dealer(shoe);
    debug!("dealer played out to {}", round.dealer);

    println!(
        "\nYour final hand: {} with score {}",
        round.player,
        round.player_score()
    );
    println!(
        "Dealer's final hand: {} with score {}",
        round.dealer,
        round.dealer_score()
    );

    let resolution = round.resolve();
    println!("{}", resolution.message);
    session.settle(stake, resolution.outcome);
    debug!("round settled: {:?} for {stake}", resolution.outcome);
    println!("Your bank balance is now {}", session.balance);
    Ok(())
}

fn print_summary(session: &Session) {
    println!("\n====================== SESSION SUMMARY ======================");
    println!("Skill level: {}", session.skill_level().as_str());
    println!("Total amount staked: {}", session.total_bet);
    println!("Rounds played: {}", session.rounds_played);
}
