use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use std::cell::RefCell;
use std::io::{stdin, stdout, Stdin, Write};
use std::rc::Rc;

use connectx::*;

mod console;
use console::*;

fn prompt(stdin: &Stdin, message: &str) -> Result<String> {
    print!("{}", message);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        bail!("end of input");
    }
    Ok(buffer.trim().to_owned())
}

fn read_number(stdin: &Stdin, message: &str, field: &'static str) -> Result<usize> {
    loop {
        match parse_number(&prompt(stdin, message)?, field) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{}", err),
        }
    }
}

fn read_yes_no(stdin: &Stdin, message: &str) -> Result<bool> {
    loop {
        match prompt(stdin, message)?.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn read_new_game(stdin: &Stdin, limits: &dyn ConnectXLimits) -> Result<NewGameInformation> {
    let count = read_number(
        stdin,
        &format!(
            "How many players? ({}-{}): ",
            limits.min_players(),
            limits.max_players()
        ),
        "player count",
    )?;

    let mut players = Vec::with_capacity(count);
    for i in 0..count {
        let mut name = prompt(stdin, &format!("Name of player {}: ", i + 1))?;
        if name.is_empty() {
            name = format!("Player {}", i + 1);
        }
        let chip = Chip::new(Color::PALETTE[i % Color::PALETTE.len()]);
        let player_type = if read_yes_no(stdin, &format!("Is {} a bot? y/n: ", name))? {
            PlayerType::Bot
        } else {
            PlayerType::Human
        };
        players.push(Player::new(name, chip, player_type));
    }

    let grid_height = read_number(
        stdin,
        &format!(
            "Grid height ({}-{}): ",
            limits.min_grid_height(),
            limits.max_grid_height()
        ),
        "grid height",
    )?;
    let grid_width = read_number(
        stdin,
        &format!(
            "Grid width ({}-{}): ",
            limits.min_grid_width(),
            limits.max_grid_width()
        ),
        "grid width",
    )?;
    let in_a_row = read_number(
        stdin,
        &format!(
            "Chips in a row to win ({}-{}): ",
            limits.min_in_a_row(),
            limits.max_in_a_row()
        ),
        "in-a-row value",
    )?;

    Ok(NewGameInformation::new(grid_height, grid_width, in_a_row, players))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let stdin = stdin();

    println!("Welcome to Connect X\n");

    let mut model = Model::new(StandardLimits);
    let observer = Rc::new(RefCell::new(ConsoleObserver));
    model.attach(&observer);

    // keep asking until the configuration is valid
    loop {
        let info = read_new_game(&stdin, model.limits())?;
        match model.create_new_game(info) {
            Ok(()) => break,
            Err(err) => println!("{}\n", err),
        }
    }

    // game loop
    loop {
        display(&model)?;

        let over = model.is_won() || model.is_tie();
        let active = match model.active_player() {
            Some(player) => player.clone(),
            None => break,
        };

        if !over && active.is_bot() {
            println!("{} is thinking...", active);
            model.play_bot_turn()?;
            continue;
        }

        let message = if over {
            "u: undo, n: play again, q: quit > ".to_owned()
        } else {
            format!(
                "{}, pick a column (1-{}), u: undo, r: redo, n: restart, q: quit > ",
                active,
                model.current_grid_width()
            )
        };

        match prompt(&stdin, &message)?.to_lowercase().as_str() {
            "u" => {
                // step back over bot moves so a human gets the turn again
                if model.undo() {
                    while model.active_player().map_or(false, Player::is_bot) && model.undo() {}
                } else {
                    println!("Nothing to undo");
                }
            }
            "r" => {
                if !model.redo() {
                    println!("Nothing to redo");
                }
            }
            "n" => model.reinitialize_current_game()?,
            "q" => {
                model.end_current_game();
                break;
            }
            text => match parse_number(text, "column") {
                Ok(column) if column >= 1 => {
                    if let Err(err) = model.drop_chip(active.chip(), column - 1) {
                        println!("{}", err);
                    }
                }
                Ok(_) => println!("Columns are numbered from 1"),
                Err(err) => println!("{}", err),
            },
        }
    }
    Ok(())
}
