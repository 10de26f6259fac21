//! Interactive console session: read a line, act on it, print the result.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{debug, info, warn};

use gambit_core::{
    Color, Game, GameStatus, MoveError, PositionCounts, Promotion, Square, count_from_with, divide,
};

use crate::command::{Command, SessionOption, parse_command};
use crate::config::SessionConfig;
use crate::error::ConsoleError;

const PROMPT: &str = "Enter your move:";

const HELP: &str = "\
commands:
  e2e4                  move a piece (file letter and rank digit, twice)
  board                 print the board
  count <depth>         count positions reachable in up to <depth> moves
  divide <depth>        count per first move
  set <name> <value>    glyphs|coordinates|echo on/off, maxdepth N, promotion Q/R/N/B
  new                   start a new game
  help                  show this text
  end                   leave
";

/// A console game between two players sharing one input stream.
///
/// Generic over its input and output so tests can script a whole game.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with default settings and a fresh game.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, SessionConfig::default())
    }

    pub fn with_config(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            game: Game::new(),
            config,
        }
    }

    /// Continue from an existing game instead of the starting position.
    #[must_use]
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Consume the session and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the read-eval loop until `end`, `quit` or the input closes.
    ///
    /// Bad input is reported and the loop continues; only I/O failures end
    /// the session with an error.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        info!("session starting");
        self.print_board()?;

        loop {
            writeln!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed");
                break;
            }
            let trimmed = line.trim();
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    writeln!(self.output, "{}", parse_error_message(&e))?;
                }
            }
        }

        info!("session ending");
        self.output.flush()?;
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<(), ConsoleError> {
        match command {
            Command::Move { src, dst } => self.handle_move(src, dst),
            Command::Board => self.print_board(),
            Command::Count(depth) => self.handle_count(depth),
            Command::Divide(depth) => self.handle_divide(depth),
            Command::Set(option) => self.handle_set(option),
            Command::New => {
                self.game.reset();
                self.print_board()
            }
            Command::Help => {
                write!(self.output, "{HELP}")?;
                Ok(())
            }
            Command::Quit | Command::Empty => Ok(()),
        }
    }

    fn handle_move(&mut self, src: Square, dst: Square) -> Result<(), ConsoleError> {
        let mut prompt_error = None;
        let result = {
            let mut chooser = |_: Color, _: Square| {
                match ask_promotion(&mut self.input, &mut self.output) {
                    Ok(piece) => piece,
                    Err(e) => {
                        warn!(error = %e, "promotion prompt failed, choosing queen");
                        prompt_error = Some(e);
                        Promotion::Queen
                    }
                }
            };
            self.game.play(src, dst, &mut chooser)
        };
        if let Some(e) = prompt_error {
            return Err(e.into());
        }

        let report = match result {
            Ok(report) => report,
            Err(e) => {
                writeln!(self.output, "{}", move_error_message(&e))?;
                return Ok(());
            }
        };

        match report.status {
            GameStatus::Ongoing => {}
            GameStatus::Check => writeln!(self.output, "Check!")?,
            GameStatus::Checkmate => {
                if let Some(winner) = self.game.winner() {
                    writeln!(self.output, "Game over! {winner} Wins!")?;
                }
            }
            GameStatus::Stalemate => writeln!(self.output, "Stalemate! The game is a draw.")?,
        }
        if self.config.echo {
            self.print_board()?;
        }
        Ok(())
    }

    fn handle_count(&mut self, depth: usize) -> Result<(), ConsoleError> {
        if !self.check_depth(depth)? {
            return Ok(());
        }
        let side = self.game.side_to_move();
        let started = Instant::now();
        let counts = count_from_with(self.game.board_mut(), depth, side, self.config.promotion);
        info!(depth, elapsed_ms = started.elapsed().as_millis() as u64, "count finished");
        writeln!(self.output, "{}", format_counts(&counts))?;
        Ok(())
    }

    fn handle_divide(&mut self, depth: usize) -> Result<(), ConsoleError> {
        if !self.check_depth(depth)? {
            return Ok(());
        }
        let side = self.game.side_to_move();
        let started = Instant::now();
        let parts = divide(self.game.board_mut(), depth, side, self.config.promotion);
        info!(depth, elapsed_ms = started.elapsed().as_millis() as u64, "divide finished");

        let mut total = PositionCounts::default();
        for (mv, counts) in &parts {
            writeln!(self.output, "{mv}: {}", counts.positions)?;
            total.merge(*counts);
        }
        writeln!(self.output)?;
        writeln!(self.output, "moves {} {}", parts.len(), format_counts(&total))?;
        Ok(())
    }

    fn handle_set(&mut self, option: SessionOption) -> Result<(), ConsoleError> {
        self.config.apply(option);
        info!(%option, "option set");
        writeln!(self.output, "{option}")?;
        Ok(())
    }

    /// Report and refuse depths outside `1..=max_depth`.
    fn check_depth(&mut self, depth: usize) -> Result<bool, ConsoleError> {
        let max = self.config.max_depth;
        if depth == 0 || depth > max {
            writeln!(self.output, "Depth must be between 1 and {max}")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn print_board(&mut self) -> Result<(), ConsoleError> {
        let pretty = self
            .game
            .board()
            .pretty()
            .glyphs(self.config.glyphs)
            .coordinates(self.config.coordinates);
        write!(self.output, "{pretty}")?;
        Ok(())
    }
}

/// Ask which piece a promoting pawn becomes, re-asking until the answer is
/// one of `Q`, `R`, `N` or `B`. Closed input picks a queen.
fn ask_promotion<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Promotion> {
    writeln!(output, "What would you like to promote to ? (Q,R,N,B)")?;
    output.flush()?;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            warn!("input closed during promotion, choosing queen");
            return Ok(Promotion::Queen);
        }
        let mut chars = line.trim().chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(piece) = Promotion::from_letter(c)
        {
            return Ok(piece);
        }
        writeln!(output, "Invalid Promotion")?;
        output.flush()?;
    }
}

fn format_counts(counts: &PositionCounts) -> String {
    format!(
        "positions {} captures {} checks {} checkmates {} stalemates {}",
        counts.positions, counts.captures, counts.checks, counts.checkmates, counts.stalemates
    )
}

fn move_error_message(err: &MoveError) -> &'static str {
    match err {
        MoveError::OutOfBounds => "Invalid move. Source or destination square is out of bounds.",
        MoveError::EmptySource { .. } => "Invalid move. There is no piece at the source square.",
        MoveError::WrongColor { .. } => "Invalid move. This piece is not yours.",
        MoveError::IllegalGeometry { .. } => "That move is invalid",
        MoveError::OwnKingExposed { .. } => "That move puts your king in check",
        MoveError::GameOver => "The game is over. Type 'new' to play again.",
    }
}

fn parse_error_message(err: &ConsoleError) -> String {
    match err {
        ConsoleError::InvalidMoveFormat { .. } => {
            "Invalid move format. Please use chess notation (e.g., 'e2e4').".to_string()
        }
        ConsoleError::OutOfBounds { .. } => {
            "Invalid move. Source or destination square is out of bounds.".to_string()
        }
        other => other.to_string(),
    }
}
