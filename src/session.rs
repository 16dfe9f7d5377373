//! Interactive menu tying games and the leaderboard together.

use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

use crate::console::Console;
use crate::games::tictactoe::{Game, GameError, MatchResult};
use crate::leaderboard::LeaderboardStore;
use crate::players::{ComputerPlayer, HumanPlayer};

const MENU_PROMPT: &str = "
        Enter one of the following options:
            1 - Play the game
            2 - Save your score in the leaderboard
            3 - Load and display the leaderboard
            q - End the program
        1, 2, 3, or q: ";

/// An option picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum MenuChoice {
    /// Play one match.
    Play,
    /// Save the last match's score.
    SaveScore,
    /// Show the leaderboard.
    ShowLeaderboard,
    /// Leave the program.
    Quit,
}

impl MenuChoice {
    /// Parses a menu selection: `1`, `2`, `3` or `q` (any case).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::Play),
            "2" => Some(Self::SaveScore),
            "3" => Some(Self::ShowLeaderboard),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The running program: menu loop, last result and leaderboard.
#[derive(Debug)]
pub struct Session<G> {
    store: LeaderboardStore,
    human: HumanPlayer,
    computer: ComputerPlayer<G>,
    last_result: Option<MatchResult>,
}

impl<G: Rng> Session<G> {
    /// Creates a session saving to `store` with a computer drawing from `rng`.
    pub fn new(store: LeaderboardStore, rng: G) -> Self {
        Self {
            store,
            human: HumanPlayer::new("Player"),
            computer: ComputerPlayer::new("Computer", rng),
            last_result: None,
        }
    }

    /// Result of the most recent match not yet saved.
    pub fn last_result(&self) -> Option<MatchResult> {
        self.last_result
    }

    /// Runs the menu until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if the console itself fails.
    #[instrument(skip_all, fields(leaderboard = %self.store.path().display()))]
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> std::io::Result<()> {
        info!("Session started");
        while let Some(choice) = self.read_choice(console)? {
            debug!(%choice, "Menu choice");
            match choice {
                MenuChoice::Play => {
                    if !self.play(console)? {
                        break;
                    }
                }
                MenuChoice::SaveScore => {
                    if !self.save_score(console)? {
                        break;
                    }
                }
                MenuChoice::ShowLeaderboard => self.show_leaderboard(console)?,
                MenuChoice::Quit => break,
            }
        }
        info!("Session ended");
        Ok(())
    }

    /// Prompts until a valid choice is read. `None` once input ends.
    fn read_choice<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> std::io::Result<Option<MenuChoice>> {
        loop {
            let Some(line) = console.ask(MENU_PROMPT)? else {
                return Ok(None);
            };
            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => console.say("\nPlease select valid options")?,
            }
        }
    }

    /// Plays a match. Returns false if input ended during the game.
    fn play<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> std::io::Result<bool> {
        let mut game = Game::new();
        match game.play(&mut self.human, &mut self.computer, console) {
            Ok(result) => {
                self.last_result = Some(result);
                Ok(true)
            }
            Err(GameError::InputClosed) => {
                info!("Input closed mid-game");
                Ok(false)
            }
            Err(GameError::Io(e)) => Err(e),
            Err(e) => {
                warn!(error = %e, "Match aborted");
                console.say(format!("Game aborted: {}", e))?;
                Ok(true)
            }
        }
    }

    /// Saves the last result under a name. Returns false if input ended.
    fn save_score<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> std::io::Result<bool> {
        let Some(result) = self.last_result else {
            console.say("Play a game first, then save your score.")?;
            return Ok(true);
        };

        let name = loop {
            let Some(line) = console.ask("Enter your name: ")? else {
                return Ok(false);
            };
            if !line.trim().is_empty() {
                break line;
            }
            console.say("Please enter a name.")?;
        };

        match self.store.save(&name, result.score()) {
            Ok(_) => {
                self.last_result = None;
                console.say("Saved Successfully.")?;
            }
            Err(e) => {
                warn!(error = %e, "Failed to save score");
                console.say(format!("Could not save score: {}", e.message))?;
            }
        }
        Ok(true)
    }

    fn show_leaderboard<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> std::io::Result<()> {
        let loaded = self.store.load();
        if let Some(notice) = loaded.notice() {
            console.say(notice)?;
        }
        console.say(loaded.leaderboard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse("2\n"), Some(MenuChoice::SaveScore));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::ShowLeaderboard));
        assert_eq!(MenuChoice::parse("Q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_menu_choice_rejects_others() {
        for input in ["", "0", "4", "quit", "play", "12"] {
            assert_eq!(MenuChoice::parse(input), None, "accepted {input:?}");
        }
    }
}
