//! REPL Module
//!
//! Interactive read-eval-print loop over the PokeAPI client.

pub mod commands;
pub mod pokedex;

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;

pub use commands::{Command, CommandSpec, COMMANDS};
pub use pokedex::{CaughtPokemon, Pokedex};

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

// == Pager ==
/// Position in the location-area listing.
#[derive(Debug, Default)]
struct Pager {
    next: Option<String>,
    previous: Option<String>,
    started: bool,
}

impl Pager {
    fn update(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.started = true;
    }
}

// == Repl ==
/// Pokedex session state: API client, caught Pokemon and map position.
pub struct Repl {
    client: PokeApiClient,
    pokedex: Pokedex,
    pager: Pager,
    prompt: String,
    rng: StdRng,
}

impl Repl {
    // == Constructor ==
    /// Creates a session with an entropy-seeded catch roll.
    pub fn new(client: PokeApiClient, prompt: impl Into<String>) -> Self {
        Self::with_rng(client, prompt, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied random source.
    pub fn with_rng(client: PokeApiClient, prompt: impl Into<String>, rng: StdRng) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            pager: Pager::default(),
            prompt: prompt.into(),
            rng,
        }
    }

    // == Accessors ==
    /// Returns the Pokemon caught so far in this session.
    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Run ==
    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Command failures are reported on `out` and the loop carries on. Only
    /// failures to read input or write output end the loop with an error.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{} > ", self.prompt)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                debug!("Input closed, leaving REPL");
                return Ok(());
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err @ PokedexError::UnknownCommand(_)) => {
                    writeln!(out, "{}\n", err)?;
                    continue;
                }
                Err(err) => {
                    writeln!(out, "Error: {}", err)?;
                    continue;
                }
            };

            match self.execute(command, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(PokedexError::Io(err)) => return Err(PokedexError::Io(err)),
                Err(err) => {
                    warn!(error = %err, input = %line.trim(), "Command failed");
                    writeln!(out, "Error: {}", err)?;
                }
            }
        }
    }

    // == Dispatch ==
    async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Exiting the Pokedex. Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                if self.pager.started && self.pager.next.is_none() {
                    return Err(PokedexError::NoNextPage);
                }
                let next = self.pager.next.clone();
                self.show_page(next.as_deref(), out).await?;
            }
            Command::MapBack => {
                let previous = self
                    .pager
                    .previous
                    .clone()
                    .ok_or(PokedexError::NoPreviousPage)?;
                self.show_page(Some(&previous), out).await?;
            }
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    // == Commands ==
    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for spec in COMMANDS {
            writeln!(out, "{}: {}", spec.usage, spec.description)?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn show_page<W: Write>(&mut self, page_url: Option<&str>, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(page_url).await?;
        self.pager.update(&page);

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let location = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.client.pokemon(name).await?;

        let roll: f64 = self.rng.gen();
        if pokedex::is_caught(roll, pokemon.base_experience) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.add(pokemon);
        } else {
            debug!(pokemon = %pokemon.name, roll, "Catch failed");
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        match self.pokedex.get(name) {
            Some(caught) => writeln!(out, "{}", caught)?,
            None => writeln!(out, "you have not caught that pokemon")?,
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty. Try catching a Pokemon!")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
