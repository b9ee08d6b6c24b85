//! A single game played at the terminal.

use crate::command::{Command, HELP};
use hexword_core::{Board, Bot, Dictionary, GameEvent, GameState, HexCoord, Outcome, Player};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the prompt loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// A game, the bot playing it and the word list it is judged by
pub struct Session<D> {
    pub game: GameState,
    bot: Bot,
    dictionary: D,
}

impl<D: Dictionary> Session<D> {
    pub fn new(game: GameState, bot: Bot, dictionary: D) -> Self {
        Self {
            game,
            bot,
            dictionary,
        }
    }

    /// Read commands until the game ends, the player quits or input runs out.
    ///
    /// Returns the outcome if the game was played to the end.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<Option<Outcome>> {
        writeln!(out, "{HELP}")?;
        self.print_status(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }

            let flow = match line.parse::<Command>() {
                Ok(command) => self.handle(command, out)?,
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line, e);
                    writeln!(out, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Stop {
                break;
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        Ok(self.game.outcome)
    }

    fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Place { coord, letter } => {
                let turn = match self
                    .game
                    .play_turn(coord, letter, &mut self.bot, &self.dictionary)
                {
                    Ok(turn) => turn,
                    Err(e) => {
                        warn!("Move {} at {} rejected: {}", letter, coord, e);
                        writeln!(out, "{e}")?;
                        return Ok(Flow::Continue);
                    }
                };

                for event in &turn.events {
                    log_event(event);
                    if let Some(line) = describe(event) {
                        writeln!(out, "{line}")?;
                    }
                }
                write_board(out, &self.game.board)?;
                self.print_status(out)?;

                if let Some(outcome) = turn.outcome {
                    writeln!(out, "{}", outcome.message())?;
                    return Ok(Flow::Stop);
                }
            }
            Command::Board => write_board(out, &self.game.board)?,
            Command::Rack => writeln!(out, "Rack: {}", rack_line(&self.game))?,
            Command::Score => {
                let scores = self.game.scores();
                writeln!(out, "Player: {}   AI: {}", scores.human, scores.ai)?;
            }
            Command::State => {
                let json = self
                    .game
                    .snapshot()
                    .to_json()
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {
                info!("Player quit after {} turns", self.game.turn_number);
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn print_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let scores = self.game.scores();
        writeln!(out, "Player: {}   AI: {}", scores.human, scores.ai)?;
        writeln!(out, "Rack: {}", rack_line(&self.game))
    }
}

fn rack_line(game: &GameState) -> String {
    game.rack
        .letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::TilePlaced {
            player,
            coord,
            letter,
        } => debug!("{} placed {} at {}", player, letter, coord),
        GameEvent::BotMoved { kind } => debug!("Bot move: {:?}", kind),
        GameEvent::WordScored {
            player,
            word,
            points,
            ..
        } => info!("{} scored {} for {} points", player, word, points),
        GameEvent::WordSpent { actor, word } => {
            info!("{} spent {} on the opponent's tile", actor, word)
        }
        GameEvent::GameOver { outcome, scores } => info!(
            "Game over: {:?} ({} - {})",
            outcome, scores.human, scores.ai
        ),
    }
}

fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::TilePlaced {
            player: Player::Ai,
            coord,
            letter,
        } => Some(format!("AI plays {letter} at {coord}")),
        GameEvent::WordScored {
            player,
            word,
            points,
            ..
        } => Some(format!("{player} scores {} (+{points})", word.to_uppercase())),
        GameEvent::WordSpent { word, .. } => {
            Some(format!("{} is used up without scoring", word.to_uppercase()))
        }
        _ => None,
    }
}

/// Print the hexagon one row of constant `r` at a time, shifting each row
/// by half a cell. Human tiles are upper case, AI tiles lower case.
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let radius = board.radius();
    for r in -radius..=radius {
        let q_min = (-radius).max(-r - radius);
        let q_max = radius.min(-r + radius);
        let mut row = " ".repeat(r.unsigned_abs() as usize);
        for q in q_min..=q_max {
            let symbol = match board.tile(HexCoord::new(q, r)) {
                Some(tile) if tile.owner == Player::Human => tile.letter,
                Some(tile) => tile.letter.to_ascii_lowercase(),
                None => '.',
            };
            row.push(symbol);
            row.push(' ');
        }
        writeln!(out, "{:>3} {}", r, row.trim_end())?;
    }
    Ok(())
}
