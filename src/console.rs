use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connectx::{GameInformation, NotificationContext, Observer};

fn terminal_color(chip: connectx::Chip) -> Color {
    if chip.is_empty() {
        return Color::DarkBlue;
    }
    let color = chip.color();
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Draws the grid, top row first, with column numbers counted from 1
pub fn display(model: &dyn GameInformation) -> Result<()> {
    let (height, width) = (model.current_grid_height(), model.current_grid_width());
    let mut stdout = stdout();

    let cols: String = (1..=width).map(|x| format!("{:^3}", x)).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in (0..height).rev() {
        for column in 0..width {
            stdout.queue(PrintStyledContent(
                style(" O ")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(terminal_color(model.chip(row, column))),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Announces the end of a game
pub struct ConsoleObserver;

impl Observer<NotificationContext, dyn GameInformation> for ConsoleObserver {
    fn update(&mut self, context: NotificationContext, model: &dyn GameInformation) {
        match context {
            NotificationContext::GameWon => {
                if let Some(winner) = model.winner() {
                    println!("{} wins!", winner);
                }
            }
            NotificationContext::GameTied => println!("Tie!"),
            NotificationContext::GameReinitialized => println!("Starting over"),
            _ => (),
        }
    }
}
